//! Game configuration
//!
//! Read from environment variables with defaults:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TETRIS_WIDTH` | 12 |
//! | `TETRIS_HEIGHT` | 20 |
//! | `TETRIS_DROP_MS` | 1000 |
//! | `TETRIS_SEED` | random |
//! | `TETRIS_EVENT_LOG` | unset |
//!
//! Values that fail to parse fall back to the default. Parsed values that are
//! out of range are rejected by [`GameConfig::validate`].

use std::fmt;

use crate::types::{ARENA_HEIGHT, ARENA_WIDTH, DROP_INTERVAL_MS};

/// Smallest accepted arena side; the 4x4 I matrix must fit
pub const MIN_ARENA_SIDE: usize = 4;

/// Largest accepted arena side
pub const MAX_ARENA_SIDE: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Width(usize),
    Height(usize),
    DropInterval(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Width(w) => write!(
                f,
                "arena width {} outside {}..={}",
                w, MIN_ARENA_SIDE, MAX_ARENA_SIDE
            ),
            ConfigError::Height(h) => write!(
                f,
                "arena height {} outside {}..={}",
                h, MIN_ARENA_SIDE, MAX_ARENA_SIDE
            ),
            ConfigError::DropInterval(ms) => write!(f, "drop interval {}ms must be positive", ms),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub drop_interval_ms: u32,
    /// Piece sequence seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Append session events as JSON lines to this file
    pub event_log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            drop_interval_ms: DROP_INTERVAL_MS,
            seed: None,
            event_log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (environment, tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = lookup("TETRIS_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = lookup("TETRIS_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);
        let drop_interval_ms = lookup("TETRIS_DROP_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.drop_interval_ms);
        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());
        let event_log_path = lookup("TETRIS_EVENT_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            width,
            height,
            drop_interval_ms,
            seed,
            event_log_path,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let side = MIN_ARENA_SIDE..=MAX_ARENA_SIDE;
        if !side.contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !side.contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::DropInterval(self.drop_interval_ms));
        }
        Ok(())
    }
}
