//! Runner simulation pieces: the player, the obstacle set and scoring.

pub mod obstacles;
pub mod player;
pub mod score;

pub use obstacles::{Obstacle, ObstacleKind, ObstacleSet, StepOutcome};
pub use player::Player;
pub use score::ScoreTracker;
