//! City Runner scene rendering.
//!
//! The 800x400 world is scaled onto the play field's cell grid. Backdrop,
//! street, obstacles and runner are painted into a [`Canvas`] in that order,
//! then the HUD goes on top.

use super::canvas::{Canvas, Cell};
use super::common::{draw_frame, render_game_over_banner, GameLayout, StatusBar};
use super::skyline::Skyline;
use super::sprites::{runner_legs, sprite_for, RUNNER_COLOR, RUNNER_HEAD_COLOR};
use crate::core::constants::{GROUND_LEVEL, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::geometry::Hitbox;
use crate::core::view::{FrameView, SessionState};
use crate::runner::ObstacleKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MIN_WIDTH: u16 = 44;
const MIN_HEIGHT: u16 = 12;
const INFO_PANEL_WIDTH: u16 = 20;

const SKY: Color = Color::Rgb(120, 180, 230);
const CLOUD: Color = Color::Rgb(240, 240, 245);
const WINDOW_LIGHT: Color = Color::Rgb(255, 230, 120);
const SIDEWALK: Color = Color::Rgb(170, 170, 170);
const ROAD: Color = Color::Rgb(60, 60, 60);
const ROAD_MARKER: Color = Color::Rgb(230, 230, 230);
/// Road markers repeat every 100 world pixels, 50 long, 40 below the curb.
const MARKER_SPACING: i32 = 100;
const MARKER_LENGTH: i32 = 50;
const MARKER_DEPTH: i32 = 40;

/// World-to-cell scale for one play field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    x_scale: f32,
    y_scale: f32,
}

impl Projection {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            x_scale: width as f32 / SCREEN_WIDTH as f32,
            y_scale: height as f32 / SCREEN_HEIGHT as f32,
        }
    }

    pub fn col(&self, x: i32) -> i32 {
        (x as f32 * self.x_scale).floor() as i32
    }

    pub fn row(&self, y: i32) -> i32 {
        (y as f32 * self.y_scale).floor() as i32
    }

    /// Half-open cell range `(col0, row0, col1, row1)` covering `hitbox`.
    /// Anything with area gets at least one cell.
    pub fn cells(&self, hitbox: &Hitbox) -> (i32, i32, i32, i32) {
        let col0 = self.col(hitbox.x);
        let row0 = self.row(hitbox.y);
        let col1 = ((hitbox.right() as f32 * self.x_scale).ceil() as i32).max(col0 + 1);
        let row1 = ((hitbox.bottom() as f32 * self.y_scale).ceil() as i32).max(row0 + 1);
        (col0, row0, col1, row1)
    }
}

/// Render the whole scene for one frame.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, view: &FrameView, skyline: &Skyline) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let inner = draw_frame(frame, area, " City Runner ", Color::LightYellow);
    let layout = GameLayout::split(inner, INFO_PANEL_WIDTH);

    let mut canvas = Canvas::new(layout.content.width, layout.content.height);
    paint_play_field(&mut canvas, view, skyline);
    canvas.render(frame, layout.content);

    status_bar(view.state).render(frame, layout.status_bar);
    if view.state == SessionState::GameOver {
        render_game_over_banner(
            frame,
            layout.content,
            "G A M E   O V E R",
            "Press SPACE to restart",
        );
    }

    render_info_panel(frame, layout.info_panel, view);
}

/// Paint backdrop, street, obstacles, runner and score into `canvas`.
pub fn paint_play_field(canvas: &mut Canvas, view: &FrameView, skyline: &Skyline) {
    let proj = Projection::new(canvas.width(), canvas.height());
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    let ground_row = proj.row(GROUND_LEVEL);

    // ── Sky and clouds ────────────────────────────────────────────────
    canvas.fill(0, 0, width, ground_row, Cell::new(' ', Color::Reset, SKY));
    for cloud in &skyline.clouds {
        let (c0, r0, c1, r1) = proj.cells(&Hitbox::new(cloud.x, cloud.y, cloud.w, cloud.h));
        canvas.fill(c0, r0, c1, r1, Cell::new(' ', Color::Reset, CLOUD));
    }

    // ── Buildings ─────────────────────────────────────────────────────
    for building in &skyline.buildings {
        let (r, g, b) = building.color;
        let bg = Color::Rgb(r, g, b);
        let outline = Hitbox::new(building.x, building.top(), building.width, building.height);
        let (c0, r0, c1, r1) = proj.cells(&outline);
        canvas.fill(c0, r0, c1, r1.min(ground_row), Cell::new(' ', Color::Reset, bg));

        for row in 0..building.window_rows() {
            for col in 0..building.window_cols() {
                if building.is_lit(row, col) {
                    let (wx, wy, _) = building.window_origin(row, col);
                    canvas.put(proj.col(wx), proj.row(wy), Cell::new('▪', WINDOW_LIGHT, bg));
                }
            }
        }
    }

    // ── Sidewalk and road ─────────────────────────────────────────────
    canvas.fill(0, ground_row, width, ground_row + 1, Cell::new('▔', Color::Gray, SIDEWALK));
    canvas.fill(0, ground_row + 1, width, height, Cell::new(' ', Color::Reset, ROAD));
    let scroll = (view.tick.wrapping_mul(u64::from(view.game_speed)) % MARKER_SPACING as u64) as i32;
    let marker_row = proj.row(GROUND_LEVEL + MARKER_DEPTH).max(ground_row + 1);
    let mut x = -scroll;
    while x < SCREEN_WIDTH {
        let c0 = proj.col(x);
        let c1 = proj.col(x + MARKER_LENGTH).max(c0 + 1);
        canvas.fill(c0, marker_row, c1, marker_row + 1, Cell::new('▬', ROAD_MARKER, ROAD));
        x += MARKER_SPACING;
    }

    // ── Obstacles ─────────────────────────────────────────────────────
    for obstacle in &view.obstacles {
        let sprite = sprite_for(obstacle.kind);
        let (c0, r0, c1, r1) = proj.cells(&obstacle.hitbox);
        for row in r0..r1 {
            let ch = if row == r0 && r1 - r0 > 1 { sprite.top } else { sprite.body };
            for col in c0..c1 {
                let bg = canvas.get(col, row).map(|c| c.bg).unwrap_or(Color::Reset);
                canvas.put(col, row, Cell::new(ch, sprite.fg, bg));
            }
        }
    }

    // ── Runner ────────────────────────────────────────────────────────
    let player = &view.player;
    let (c0, r0, c1, r1) = proj.cells(&player.hitbox);
    for row in r0..r1 {
        for col in c0..c1 {
            let bg = canvas.get(col, row).map(|c| c.bg).unwrap_or(Color::Reset);
            let cell = if row == r0 {
                let ch = if col == (c0 + c1 - 1) / 2 { '●' } else { ' ' };
                Cell::new(ch, RUNNER_HEAD_COLOR, bg)
            } else if row == r1 - 1 && r1 - r0 > 2 {
                Cell::new(' ', RUNNER_COLOR, bg)
            } else {
                Cell::new('█', RUNNER_COLOR, bg)
            };
            if cell.ch != ' ' {
                canvas.put(col, row, cell);
            }
        }
    }
    if r1 - r0 > 2 {
        let legs_col = (c0 + c1 - 1) / 2 - 1;
        let legs = runner_legs(player.anim_frame, player.airborne);
        for (i, ch) in legs.chars().enumerate() {
            let col = legs_col + i as i32;
            let bg = canvas.get(col, r1 - 1).map(|c| c.bg).unwrap_or(Color::Reset);
            canvas.put(col, r1 - 1, Cell::new(ch, RUNNER_COLOR, bg));
        }
    }

    // ── Score (top-left) ──────────────────────────────────────────────
    canvas.text(1, 0, &format!("Score: {}", view.score), Color::Black);
    canvas.text(1, 1, &format!("High Score: {}", view.high_score), Color::Black);
}

fn status_bar(state: SessionState) -> StatusBar<'static> {
    match state {
        SessionState::Running => StatusBar {
            message: "Run!",
            color: Color::LightYellow,
            controls: &[("[Space/Up]", "Jump"), ("[Esc/q]", "Quit")],
        },
        SessionState::GameOver => StatusBar {
            message: "Crashed!",
            color: Color::Red,
            controls: &[("[Space/Up]", "Restart"), ("[Esc/q]", "Quit")],
        },
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, view: &FrameView) {
    let panel = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = panel.inner(area);
    frame.render_widget(panel, area);

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                view.score.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best:  ", label),
            Span::styled(view.high_score.to_string(), Style::default().fg(Color::LightYellow)),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(view.game_speed.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Watch out for:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    for kind in ObstacleKind::ALL {
        let sprite = sprite_for(kind);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", sprite.legend), Style::default().fg(sprite.fg)),
            Span::styled(kind.name(), label),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let text = format!(
        "City Runner needs at least {}x{} (terminal is {}x{})",
        MIN_WIDTH, MIN_HEIGHT, area.width, area.height
    );
    let notice = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    let y = area.y + area.height / 2;
    frame.render_widget(notice, Rect::new(area.x, y, area.width, 1.min(area.height)));
}
