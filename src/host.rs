//! Host-side plumbing for running the game in a terminal: configuration,
//! the millisecond clock and file logging.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::Clock;

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Seed for the shape generator.
    pub seed: u32,
    /// Terminal downscale factor, `1..=4`.
    pub scale: u16,
    /// Log file. Logging is off when unset.
    pub log_path: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            scale: 2,
            log_path: None,
        }
    }
}

impl HostConfig {
    /// Create from environment variables.
    ///
    /// - `TFT_TETRIS_SEED`: u32 seed (default: from the system clock)
    /// - `TFT_TETRIS_SCALE`: terminal downscale 1..=4 (default 2)
    /// - `TFT_TETRIS_LOG`: log file path (default: no logging)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TFT_TETRIS_SEED")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or_else(time_seed);

        let scale = lookup("TFT_TETRIS_SCALE")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|s| (1..=4).contains(s))
            .unwrap_or(2);

        let log_path = lookup("TFT_TETRIS_LOG")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            scale,
            log_path,
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Milliseconds since creation, wrapping like the device's `millis()`.
#[derive(Debug, Clone, Copy)]
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

/// Install `env_logger` writing to `path`, so log lines never reach the terminal.
///
/// The filter defaults to `info` and honours `RUST_LOG`.
pub fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_module_path(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}
