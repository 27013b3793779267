//! Session configuration.
//!
//! Defaults come from the static tables in `tui-2060-types`; every knob can be
//! overridden from the environment:
//!
//! - `GAME2060_ROUND_SECS`: round length in seconds (default: 60)
//! - `GAME2060_ANIMATION_MS`: move animation delay (default: 100)
//! - `GAME2060_SEED`: engine seed (default: derived from the clock)
//! - `GAME2060_SAVE_PATH`: progress file (default: platform data dir)
//! - `GAME2060_LOG_DIR`: log directory (default: platform cache dir)

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{ANIMATION_DURATION_MS, LEVEL_THRESHOLDS, MESSAGE_DURATION_MS, ROUND_SECS};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub round_secs: u32,
    pub animation_ms: u64,
    pub message_ms: u64,
    pub thresholds: Vec<u32>,
    pub seed: u32,
    pub save_path: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            round_secs: ROUND_SECS,
            animation_ms: ANIMATION_DURATION_MS,
            message_ms: MESSAGE_DURATION_MS,
            thresholds: LEVEL_THRESHOLDS.to_vec(),
            seed: 1,
            save_path: data_dir().join("save.json"),
            log_dir: cache_dir().join("logs"),
        }
    }
}

impl SessionConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self {
            seed: clock_seed(),
            ..Self::default()
        };

        if let Some(secs) = read_env::<u32>("GAME2060_ROUND_SECS") {
            config.round_secs = secs.max(1);
        }

        if let Some(ms) = read_env::<u64>("GAME2060_ANIMATION_MS") {
            config.animation_ms = ms;
        }

        if let Some(seed) = read_env::<u32>("GAME2060_SEED") {
            config.seed = seed;
        }

        if let Some(path) = read_path("GAME2060_SAVE_PATH") {
            config.save_path = path;
        }

        if let Some(path) = read_path("GAME2060_LOG_DIR") {
            config.log_dir = path;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Platform data directory, `./save_data` when unavailable
fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "2060")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform cache directory, `/tmp/2060` when unavailable
fn cache_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "2060")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/2060"))
}
