//! Current score and the persisted high score.

use crate::core::constants::JUMP_SCORE;
use crate::utils::persistence::HighScoreStore;

/// Tracks the running score and keeps the high score in sync with it.
///
/// The high score is raised in memory as soon as the current score passes it
/// and written out on [`reset_session`](Self::reset_session) and
/// [`persist`](Self::persist).
#[derive(Debug)]
pub struct ScoreTracker {
    current: u32,
    high: u32,
    store: HighScoreStore,
}

impl ScoreTracker {
    /// Create a tracker, loading the high score from `store`.
    pub fn load(store: HighScoreStore) -> Self {
        let high = store.load();
        log::info!(
            "Loaded high score {} from {}",
            high,
            store.path().display()
        );
        Self {
            current: 0,
            high,
            store,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Award a scored jump. Returns the new current score.
    pub fn award_jump(&mut self) -> u32 {
        self.current = self.current.saturating_add(JUMP_SCORE);
        if self.current > self.high {
            self.high = self.current;
        }
        self.current
    }

    /// Save the high score, then start a new session at zero.
    pub fn reset_session(&mut self) {
        self.persist();
        self.current = 0;
    }

    /// Write the high score out. Failures are logged and otherwise ignored.
    pub fn persist(&self) {
        if let Err(e) = self.store.save(self.high) {
            log::warn!(
                "Could not save high score to {}: {}",
                self.store.path().display(),
                e
            );
        }
    }
}
