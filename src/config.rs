//! Command-line configuration.

use crate::core::constants::{MAX_FPS, TARGET_FPS};
use std::path::PathBuf;

pub const USAGE: &str = "\
City Runner - endless runner for the terminal

Usage: city-runner [options]

Options:
  --save-file <path>  Keep the high score in <path> instead of ~/.city-runner
  --seed <n>          Seed the obstacle sequence (same seed, same run)
  --fps <n>           Frames per second, 1-240 (default 60)
  --version, -v       Show version information
  --help, -h          Show this help message

Controls:
  Space / Up          Jump (restart after a crash)
  Esc / q             Quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub save_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub fps: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            save_file: None,
            seed: None,
            fps: TARGET_FPS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play(RunnerConfig),
    Version,
    Help,
}

/// Parse arguments, not including the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = RunnerConfig::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--save-file" => {
                let path = args.next().ok_or("--save-file needs a path")?;
                config.save_file = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                config.seed = Some(seed);
            }
            "--fps" => {
                let value = args.next().ok_or("--fps needs a number")?;
                config.fps = match value.parse::<u32>() {
                    Ok(fps) if (1..=MAX_FPS).contains(&fps) => fps,
                    _ => return Err(format!("Invalid fps: {} (expected 1-{})", value, MAX_FPS)),
                };
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(CliCommand::Play(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_plays_with_defaults() {
        let cmd = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(cmd, CliCommand::Play(RunnerConfig::default()));
        assert_eq!(RunnerConfig::default().fps, 60);
    }

    #[test]
    fn test_all_options() {
        let cmd = parse_args(["--seed", "42", "--fps", "30", "--save-file", "/tmp/hs.dat"]).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Play(RunnerConfig {
                save_file: Some(PathBuf::from("/tmp/hs.dat")),
                seed: Some(42),
                fps: 30,
            })
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(["-v"]).unwrap(), CliCommand::Version);
        assert_eq!(parse_args(["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse_args(["-h"]).unwrap(), CliCommand::Help);
        assert_eq!(parse_args(["--seed", "1", "--help"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_args(["update"]).unwrap_err().contains("Unknown argument"));
        assert!(parse_args(["--seed"]).is_err());
        assert!(parse_args(["--seed", "abc"]).is_err());
        assert!(parse_args(["--fps", "0"]).is_err());
        assert!(parse_args(["--fps", "241"]).is_err());
        assert!(parse_args(["--save-file"]).is_err());
    }
}
