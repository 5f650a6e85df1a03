//! Cell buffer for per-character color control.
//!
//! Scenes paint into a 2D grid of [`Cell`]s and then stamp it row by row as
//! Paragraph widgets, merging runs of equal style into one span.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl Cell {
    pub fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Out-of-range writes are dropped.
    pub fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = cell;
        }
    }

    /// Fill the half-open cell range `[col0, col1) x [row0, row1)`.
    pub fn fill(&mut self, col0: i32, row0: i32, col1: i32, row1: i32, cell: Cell) {
        for row in row0.max(0)..row1.min(self.height as i32) {
            for col in col0.max(0)..col1.min(self.width as i32) {
                self.put(col, row, cell);
            }
        }
    }

    /// Write text starting at `col`, keeping whatever background is there.
    pub fn text(&mut self, col: i32, row: i32, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as i32;
            let bg = self.get(c, row).map(|cell| cell.bg).unwrap_or(Color::Reset);
            self.put(c, row, Cell::new(ch, fg, bg));
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = self.height.min(area.height);
        for row in 0..rows {
            let start = row as usize * self.width as usize;
            let row_cells = &self.cells[start..start + self.width as usize];

            let mut spans: Vec<Span> = Vec::new();
            let mut current = Style::default();
            let mut text = String::new();
            for cell in row_cells {
                let style = Style::default().fg(cell.fg).bg(cell.bg);
                if style != current && !text.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut text), current));
                }
                current = style;
                text.push(cell.ch);
            }
            if !text.is_empty() {
                spans.push(Span::styled(text, current));
            }

            let row_area = Rect::new(area.x, area.y + row, self.width.min(area.width), 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }
}
