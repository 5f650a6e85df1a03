//! Glyph sprites for the runner and each obstacle kind.
//!
//! One row per [`ObstacleKind`], parallel to the kind's dimension table, so a
//! new kind only needs a new row here.

use crate::runner::ObstacleKind;
use ratatui::style::Color;

/// How an obstacle is painted: `top` on its first row, `body` below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub top: char,
    pub body: char,
    pub fg: Color,
    pub legend: char,
}

/// Indexed by `ObstacleKind as usize`.
const SPRITES: [Sprite; ObstacleKind::COUNT] = [
    // Coffee cup: steam over a brown cup
    Sprite { top: '~', body: 'U', fg: Color::Rgb(139, 69, 19), legend: 'U' },
    // Briefcase
    Sprite { top: '▄', body: '█', fg: Color::Rgb(110, 60, 30), legend: '▄' },
    // Fire hydrant
    Sprite { top: '▲', body: '█', fg: Color::Rgb(220, 30, 30), legend: '▲' },
    // Trash can
    Sprite { top: '▀', body: '▓', fg: Color::Rgb(120, 120, 120), legend: '▓' },
    // Car
    Sprite { top: '▄', body: '█', fg: Color::Rgb(30, 100, 180), legend: '█' },
    // Bicycle
    Sprite { top: '┬', body: 'O', fg: Color::Rgb(200, 50, 50), legend: 'O' },
    // Puddle
    Sprite { top: '≈', body: '≈', fg: Color::Rgb(80, 140, 220), legend: '≈' },
    // Dog
    Sprite { top: '^', body: '▒', fg: Color::Rgb(150, 120, 60), legend: '^' },
];

pub fn sprite_for(kind: ObstacleKind) -> &'static Sprite {
    &SPRITES[kind as usize]
}

/// Runner color.
pub const RUNNER_COLOR: Color = Color::Rgb(60, 60, 180);
pub const RUNNER_HEAD_COLOR: Color = Color::Rgb(255, 213, 170);

/// Leg glyphs for the running cycle, indexed by animation phase.
const RUN_LEGS: [&str; 4] = ["/|", "||", "|\\", "||"];
const JUMP_LEGS: &str = "/\\";

pub fn runner_legs(anim_frame: u32, airborne: bool) -> &'static str {
    if airborne {
        JUMP_LEGS
    } else {
        RUN_LEGS[anim_frame as usize % RUN_LEGS.len()]
    }
}
