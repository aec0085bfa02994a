//! Run options read from the environment.
//!
//! Board geometry and turn length are fixed (see [`GameConfig`](crate::types::GameConfig));
//! only the board seed and the log destination can be chosen at launch:
//!
//! - `DUEL_SWEEPER_SEED`: board seed (default: derived from the clock)
//! - `DUEL_SWEEPER_LOG_PATH`: append logs to this file (default: no logging)
//! - `RUST_LOG`: log filter (default `info`), only read when a log path is set

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub seed: u64,
    pub log_path: Option<PathBuf>,
}

impl RunOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("DUEL_SWEEPER_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("DUEL_SWEEPER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self { seed, log_path }
    }
}

/// Send logs to `log_path`, if one is set.
///
/// The terminal belongs to the game screen, so without a log file nothing is
/// initialised and every log call is a no-op. Returns whether logging is on.
pub fn init_logging(options: &RunOptions) -> Result<bool> {
    let Some(path) = &options.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(true)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_seed_and_log_path() {
        let opts = RunOptions::from_lookup(|key| match key {
            "DUEL_SWEEPER_SEED" => Some("42".to_string()),
            "DUEL_SWEEPER_LOG_PATH" => Some(" /tmp/duel.log ".to_string()),
            _ => None,
        });
        assert_eq!(opts.seed, 42);
        assert_eq!(opts.log_path, Some(PathBuf::from("/tmp/duel.log")));
    }

    #[test]
    fn blank_log_path_disables_logging() {
        let opts = RunOptions::from_lookup(|key| match key {
            "DUEL_SWEEPER_LOG_PATH" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(opts.log_path, None);
    }

    #[test]
    fn no_log_path_leaves_logging_off() {
        let opts = RunOptions {
            seed: 1,
            log_path: None,
        };
        assert!(!init_logging(&opts).unwrap());
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }

    #[test]
    fn bad_seed_falls_back_to_clock() {
        let opts = RunOptions::from_lookup(|key| match key {
            "DUEL_SWEEPER_SEED" => Some("not-a-number".to_string()),
            _ => None,
        });
        assert_ne!(opts.seed, 0);
    }
}
