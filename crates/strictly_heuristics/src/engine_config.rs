//! Engine configuration.

use crate::games::tictactoe::MoveRequest;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an engine run, usually read from a TOML file.
///
/// ```toml
/// seed = 42
/// computer_starts = true
/// trace = true
///
/// [[setup]]
/// side = "x"
/// row = 2
/// col = 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for tie-breaking; OS randomness when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Whether the engine places the opening mark on a new board.
    #[serde(default = "default_computer_starts")]
    computer_starts: bool,

    /// Whether decision trace lines are forwarded to `tracing`.
    #[serde(default = "default_trace")]
    trace: bool,

    /// Moves applied without legality checks before play starts.
    #[serde(default)]
    setup: Vec<MoveRequest>,
}

fn default_computer_starts() -> bool {
    false
}

fn default_trace() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            computer_starts: default_computer_starts(),
            trace: default_trace(),
            setup: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(seed = ?config.seed, setup = config.setup.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides whether the engine opens.
    pub fn with_computer_starts(mut self, computer_starts: bool) -> Self {
        self.computer_starts = computer_starts;
        self
    }

    /// Replaces the setup moves.
    pub fn with_setup(mut self, setup: Vec<MoveRequest>) -> Self {
        self.setup = setup;
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(*config.trace());
        assert!(!*config.computer_starts());
    }

    #[test]
    fn test_full_toml() {
        let config = EngineConfig::from_toml(
            r#"
            seed = 7
            computer_starts = true
            trace = false

            [[setup]]
            side = "x"
            row = 2
            col = 0

            [[setup]]
            side = "o"
            row = 0
            col = 2
            "#,
        )
        .unwrap();

        assert_eq!(*config.seed(), Some(7));
        assert!(*config.computer_starts());
        assert!(!*config.trace());
        assert_eq!(
            config.setup(),
            &vec![MoveRequest::new("x", 2, 0), MoveRequest::new("o", 0, 2)]
        );
    }

    #[test]
    fn test_parse_error_carries_location() {
        let err = EngineConfig::from_toml("seed = \"many\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("engine_config.rs"));
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::default()
            .with_seed(3)
            .with_computer_starts(true)
            .with_setup(vec![MoveRequest::new("x", 1, 1)]);
        assert_eq!(*config.seed(), Some(3));
        assert!(*config.computer_starts());
        assert_eq!(config.setup().len(), 1);
    }
}
