//! Runtime configuration for the game driver.

use crate::games::square::{MoveSelector, SelectorKind};
use crate::render::OutputFormat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File read when no `--config` path is given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "square_game.toml";

/// Driver configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Policy automated players use to pick a cell.
    #[serde(default)]
    selector: SelectorKind,

    /// Seed for the random selector.
    #[serde(default = "default_seed")]
    seed: u64,

    /// How boards are printed.
    #[serde(default)]
    format: OutputFormat,
}

#[instrument]
fn default_seed() -> u64 {
    0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            selector: SelectorKind::default(),
            seed: default_seed(),
            format: OutputFormat::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(selector = %config.selector, seed = config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] if it exists,
    /// otherwise the defaults.
    ///
    /// # Errors
    ///
    /// A missing or unparsable explicit path, or an unparsable default file.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces each field whose override is `Some`.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        selector: Option<SelectorKind>,
        seed: Option<u64>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(selector) = selector {
            self.selector = selector;
        }
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Builds the configured selector.
    pub fn build_selector(&self) -> Box<dyn MoveSelector> {
        self.selector.build(self.seed)
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
