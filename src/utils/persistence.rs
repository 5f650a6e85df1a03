//! Files under ~/.city-runner/ and the high-score store.
//!
//! The high score is kept as a single bare integer (a JSON number), so the
//! file stays human-readable and editable.

use crate::core::constants::{DATA_DIR_NAME, HIGH_SCORE_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `<home>/.city-runner`. Only builds the path; nothing is created.
pub fn data_dir_in(home: &Path) -> PathBuf {
    home.join(DATA_DIR_NAME)
}

/// Get the ~/.city-runner/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = data_dir_in(&home_dir);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.city-runner/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct HighScoreRecord(u32);

/// Reads and writes the persisted high score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `<home>/.city-runner/highscore.dat`. The directory is
    /// created on the first save, so an unusable home only costs the save.
    pub fn in_home(home: &Path) -> Self {
        Self::at(data_dir_in(home).join(HIGH_SCORE_FILE))
    }

    /// Store in the user's home, or `highscore.dat` in the working directory
    /// when there is no home to use.
    pub fn in_data_dir() -> Self {
        match dirs::home_dir() {
            Some(home) => Self::in_home(&home),
            None => {
                log::warn!("No home directory, keeping the high score in ./{}", HIGH_SCORE_FILE);
                Self::at(HIGH_SCORE_FILE)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Previously saved high score. A missing or unreadable file is a fresh
    /// start, not an error.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str::<HighScoreRecord>(&text)
                .unwrap_or_default()
                .0,
            Err(_) => 0,
        }
    }

    pub fn save(&self, high_score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string(&HighScoreRecord(high_score))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}
