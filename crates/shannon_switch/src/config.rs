//! Game configuration, loadable from TOML.

use crate::{ConnectivityEngine, Goals, SearchOrder};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default side length of the grid.
pub const DEFAULT_SIZE: usize = 7;

/// Largest accepted side length.
pub const MAX_SIZE: usize = 255;

/// Pause before a finished round is cleared, in milliseconds.
pub const DEFAULT_RESET_DELAY_MS: u64 = 5000;

/// Configuration for a game: grid size, edge assignment, search order and
/// the front end's post-round pause.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the grid.
    size: usize,

    /// Frontier order of the connectivity search.
    search: SearchOrder,

    /// Pause before a won or drawn round is reset, in milliseconds.
    reset_delay_ms: u64,

    /// Edges each player must connect.
    goals: Goals,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            search: SearchOrder::default(),
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            goals: Goals::default(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with the default edges and search order.
    #[instrument]
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Replaces the edge assignment.
    pub fn with_goals(mut self, goals: Goals) -> Self {
        self.goals = goals;
        self
    }

    /// Replaces the search order.
    pub fn with_search(mut self, search: SearchOrder) -> Self {
        self.search = search;
        self
    }

    /// Replaces the post-round pause.
    pub fn with_reset_delay_ms(mut self, reset_delay_ms: u64) -> Self {
        self.reset_delay_ms = reset_delay_ms;
        self
    }

    /// Post-round pause as a [`Duration`].
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// Connectivity engine for this configuration.
    pub fn engine(&self) -> ConnectivityEngine {
        ConnectivityEngine::new(self.goals, self.search)
    }

    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(size = config.size, search = ?config.search, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validates configuration values.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::new(format!(
                "size must be >= 2, got {}",
                self.size
            )));
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "size must be <= {}, got {}",
                MAX_SIZE, self.size
            )));
        }
        if !self.goals.x.is_spanning() {
            return Err(ConfigError::new(format!(
                "goals.x must join opposite edges, got {}",
                self.goals.x
            )));
        }
        if !self.goals.o.is_spanning() {
            return Err(ConfigError::new(format!(
                "goals.o must join opposite edges, got {}",
                self.goals.o
            )));
        }
        Ok(())
    }

    /// TOML text with every default value spelled out.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
