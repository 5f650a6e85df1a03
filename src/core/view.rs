//! What the simulation hands to the renderer each frame.
//!
//! The renderer only ever sees a [`FrameView`]; it never reaches into the
//! session, and the session never touches UI types.

use super::geometry::Hitbox;
use crate::runner::ObstacleKind;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerView {
    pub hitbox: Hitbox,
    pub anim_frame: u32,
    pub airborne: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleView {
    pub hitbox: Hitbox,
    pub kind: ObstacleKind,
}

/// Snapshot of everything drawable for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub state: SessionState,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub high_score: u32,
    pub game_speed: u32,
    pub tick: u64,
}

/// Anything that can present a frame.
pub trait SceneRenderer {
    fn draw(&mut self, view: &FrameView) -> io::Result<()>;
}
