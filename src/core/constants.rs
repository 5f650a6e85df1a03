//! Tuning constants for the runner. World coordinates are logical pixels on an
//! 800x400 field with y growing downward.

// World
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 400;
pub const GROUND_LEVEL: i32 = 300;

// Player
pub const PLAYER_X: f32 = 100.0;
pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 80;
pub const JUMP_VELOCITY: f32 = -16.0;
pub const GRAVITY: f32 = 0.8;
/// Jumps score when |velocity| is strictly inside this band (near the apex).
pub const APEX_VELOCITY_BAND: f32 = 2.0;
pub const ANIM_FRAME_TICKS: u32 = 5;
pub const ANIM_PHASES: u32 = 4;

// Pace
pub const GAME_SPEED_INITIAL: u32 = 5;
pub const GAME_SPEED_INCREMENT: u32 = 1;
pub const SPEED_UP_SCORE: u32 = 500;

// Spawning (milliseconds)
pub const SPAWN_INTERVAL_INITIAL_MS: u64 = 2000;
pub const SPAWN_INTERVAL_DECREMENT_MS: u64 = 100;
pub const SPAWN_INTERVAL_MIN_MS: u64 = 500;
pub const SPAWN_JITTER_MS: i64 = 500;

// Scoring
pub const JUMP_SCORE: u32 = 10;

// Loop
pub const TARGET_FPS: u32 = 60;
pub const MAX_FPS: u32 = 240;

// Persistence
pub const DATA_DIR_NAME: &str = ".city-runner";
pub const HIGH_SCORE_FILE: &str = "highscore.dat";
pub const LOG_FILE: &str = "runner.log";
