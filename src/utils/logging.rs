//! File logging. The game owns the terminal, so log records go to
//! `~/.city-runner/runner.log` instead of stderr.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

/// Filter variable, e.g. `CITY_RUNNER_LOG=debug`.
pub const LOG_ENV: &str = "CITY_RUNNER_LOG";

/// Route `log` records to the log file. Returns the file's path.
pub fn init_file_logging() -> io::Result<PathBuf> {
    let path = data_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
