use std::path::Path;

use crate::error::ConfigError;
use crate::game::{COLS, ROWS};

/// Largest accepted board dimension.
pub const MAX_DIMENSION: usize = 64;

/// Settings for a single game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Keep every snapshot. When false only the latest board is retained.
    pub save_history: bool,
    /// Seed for random move selection. Drawn from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: ROWS,
            cols: COLS,
            save_history: true,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("game.rows must be > 0".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("game.cols must be > 0".into()));
        }
        if self.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.rows must be <= {MAX_DIMENSION}"
            )));
        }
        if self.cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.cols must be <= {MAX_DIMENSION}"
            )));
        }
        Ok(())
    }
}
