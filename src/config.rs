//! Game configuration loaded from TOML.

use crate::console::ClearStyle;
use crate::games::tictactoe::Marks;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest accepted `clear_lines`.
pub const MAX_CLEAR_LINES: usize = 1000;

/// Presentation settings. Every key is optional; defaults reproduce the
/// classic console look.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Mark drawn for player one.
    player_one_mark: char,

    /// Mark drawn for player two.
    player_two_mark: char,

    /// How the screen is reset between renders.
    clear_style: ClearStyle,

    /// Newlines printed by the blank-lines clear style.
    clear_lines: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_mark: 'X',
            player_two_mark: 'O',
            clear_style: ClearStyle::default(),
            clear_lines: 100,
        }
    }
}

impl GameConfig {
    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Mark characters for rendering.
    pub fn marks(&self) -> Marks {
        Marks::new(self.player_one_mark, self.player_two_mark)
    }

    /// Rejects marks that would be invisible or ambiguous on the board, and
    /// clear counts above [`MAX_CLEAR_LINES`].
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clear_lines > MAX_CLEAR_LINES {
            return Err(ConfigError::new(format!(
                "clear_lines {} exceeds the maximum of {}",
                self.clear_lines, MAX_CLEAR_LINES
            )));
        }
        for mark in [self.player_one_mark, self.player_two_mark] {
            if mark.is_whitespace() || mark.is_control() {
                return Err(ConfigError::new(format!(
                    "Mark {:?} is not a visible character",
                    mark
                )));
            }
        }
        if self.player_one_mark == self.player_two_mark {
            return Err(ConfigError::new(format!(
                "Both players use mark {:?}",
                self.player_one_mark
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
