//! Match configuration: TOML file, then environment, then command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the Challenger's name.
pub const ENV_CHALLENGER: &str = "FIN_CHALLENGER";
/// Environment variable overriding the Boardmaster's name.
pub const ENV_BOARDMASTER: &str = "FIN_BOARDMASTER";
/// Environment variable overriding the log filter.
pub const ENV_LOG: &str = "FIN_LOG";

/// Settings for a terminal match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Challenger's name.
    #[serde(default = "default_challenger")]
    challenger: String,

    /// Boardmaster's name.
    #[serde(default = "default_boardmaster")]
    boardmaster: String,

    /// Show the Boardmaster's private board after every move.
    #[serde(default = "default_show_private")]
    show_private: bool,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_challenger() -> String {
    "challenger".to_string()
}

fn default_boardmaster() -> String {
    "boardmaster".to_string()
}

fn default_show_private() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            challenger: default_challenger(),
            boardmaster: default_boardmaster(),
            show_private: default_show_private(),
            log_filter: default_log_filter(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(challenger = %config.challenger, boardmaster = %config.boardmaster, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise starts from defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies overrides from a variable lookup (normally the process
    /// environment after `.env` has been loaded).
    #[instrument(skip(self, lookup))]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(name) = lookup(ENV_CHALLENGER) {
            self.challenger = name;
        }
        if let Some(name) = lookup(ENV_BOARDMASTER) {
            self.boardmaster = name;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        self
    }

    /// Applies command-line overrides.
    pub fn with_players(mut self, challenger: Option<String>, boardmaster: Option<String>) -> Self {
        if let Some(name) = challenger {
            self.challenger = name;
        }
        if let Some(name) = boardmaster {
            self.boardmaster = name;
        }
        self
    }

    /// Checks the two seats are distinguishable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.challenger.trim().is_empty() || self.boardmaster.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if self.challenger == self.boardmaster {
            return Err(ConfigError::new(format!(
                "Challenger and Boardmaster are both named {:?}",
                self.challenger
            )));
        }
        Ok(())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
