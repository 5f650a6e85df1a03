//! Simulation core: constants, geometry, the session state machine and the
//! frame loop that drives it.

pub mod constants;
pub mod game_loop;
pub mod geometry;
pub mod session;
pub mod view;

pub use game_loop::{Clock, FramePacer, InputSource, LoopStats, SystemClock};
pub use geometry::Hitbox;
pub use session::{Control, GameSession, TickEvent};
pub use view::{FrameView, SceneRenderer, SessionState};
