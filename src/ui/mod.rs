//! Terminal presentation: scene painting, shared layout and the renderer.

pub mod canvas;
pub mod common;
pub mod runner_scene;
pub mod skyline;
pub mod sprites;
pub mod terminal;

pub use terminal::TerminalRenderer;
