//! Screen chrome around the play field: outer frame, area split, status bar
//! and the game-over banner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const STATUS_ROWS: u16 = 2;
const MIN_PLAY_WIDTH: u16 = 20;

/// Where each part of the screen goes.
///
/// ```text
/// ┌─ City Runner ───────────────────┬─ Stats ─────┐
/// │ play field                      │             │
/// │                                 │             │
/// │ status message                  │             │
/// │ [key] action  [key] action      │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub content: Rect,
    pub status_bar: Rect,
    pub info_panel: Rect,
}

impl GameLayout {
    /// Split the inside of the outer frame. The info column keeps its width
    /// until the play field would drop under 20 columns.
    pub fn split(inner: Rect, info_width: u16) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(MIN_PLAY_WIDTH), Constraint::Length(info_width)])
            .split(inner);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(STATUS_ROWS)])
            .split(columns[0]);

        Self {
            content: rows[0],
            status_bar: rows[1],
            info_panel: columns[1],
        }
    }
}

/// Clear `area`, draw the titled outer border and return what is inside it.
pub fn draw_frame(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let border = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = border.inner(area);
    frame.render_widget(border, area);
    inner
}

/// Two centered rows under the play field: a message, then key hints.
pub struct StatusBar<'a> {
    pub message: &'a str,
    pub color: Color,
    pub controls: &'a [(&'a str, &'a str)],
}

impl<'a> StatusBar<'a> {
    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut hints = Vec::with_capacity(self.controls.len() * 3);
        for (key, action) in self.controls {
            if !hints.is_empty() {
                hints.push(Span::raw("  "));
            }
            hints.push(Span::styled(*key, Style::default().fg(Color::White)));
            hints.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        vec![
            Line::from(Span::styled(self.message, Style::default().fg(self.color))),
            Line::from(hints),
        ]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(self.lines()).alignment(Alignment::Center),
            area,
        );
    }
}

/// Smallest area that fits the boxed banner.
const BANNER_MIN_WIDTH: u16 = 30;
const BANNER_HEIGHT: u16 = 5;

/// Banner style that fits `area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStyle {
    Boxed,
    Plain,
}

impl BannerStyle {
    pub fn for_area(area: Rect) -> Self {
        if area.width >= BANNER_MIN_WIDTH && area.height >= BANNER_HEIGHT {
            BannerStyle::Boxed
        } else {
            BannerStyle::Plain
        }
    }
}

/// Render a game-over banner centered in `area` without clearing the scene
/// behind it, so the crash stays visible. Narrow areas get a single plain line.
pub fn render_game_over_banner(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    if area.height == 0 {
        return;
    }

    match BannerStyle::for_area(area) {
        BannerStyle::Boxed => {
            let width = area.width.min((message.len() as u16 + 6).max(BANNER_MIN_WIDTH));
            let banner = Rect::new(
                area.x + (area.width - width) / 2,
                area.y + (area.height - BANNER_HEIGHT) / 2,
                width,
                BANNER_HEIGHT,
            );
            frame.render_widget(Clear, banner);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red));
            let inner = block.inner(banner);
            frame.render_widget(block, banner);

            let lines = vec![
                Line::from(Span::styled(
                    title,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(message, Style::default().fg(Color::White))),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        }
        BannerStyle::Plain => {
            let line = Paragraph::new(format!("{} - {}", title.trim(), message))
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            let y = area.y + area.height / 2;
            frame.render_widget(line, Rect::new(area.x, y, area.width, 1));
        }
    }
}
