//! CLI configuration and settings management.

use crate::{CollectError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of slots the demos fill when no configuration overrides it.
pub const DEFAULT_LENGTH: usize = 3;

/// CLI configuration loaded from config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Demo settings
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number of slots each demonstration fills
    pub length: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            demo: DemoConfig {
                length: DEFAULT_LENGTH,
            },
        }
    }
}

impl CliConfig {
    /// Load configuration from file, falling back to defaults.
    ///
    /// An explicit path wins. Otherwise `fillseq.toml` in the current
    /// directory, `.fillseq.toml` in the home directory, and
    /// `fillseq/config.toml` under the platform config directory are tried
    /// in turn, later files taking precedence.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = if let Some(path) = config_path {
            Self::load_from_file(path)?
        } else {
            let mut config = Self::default();

            // Try current directory
            if let Ok(local_config) = Self::load_from_file(Path::new("fillseq.toml")) {
                config = config.merge(local_config);
            }

            // Try home directory
            if let Some(home_dir) = dirs::home_dir() {
                let home_config = home_dir.join(".fillseq.toml");
                if let Ok(home_config) = Self::load_from_file(&home_config) {
                    config = config.merge(home_config);
                }
            }

            // Try system config directory
            if let Some(config_dir) = dirs::config_dir() {
                let system_config = config_dir.join("fillseq").join("config.toml");
                if let Ok(system_config) = Self::load_from_file(&system_config) {
                    config = config.merge(system_config);
                }
            }

            config
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CollectError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            CollectError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CollectError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CollectError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| CollectError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Merge this configuration with another, with the other taking
    /// precedence.
    pub fn merge(self, other: Self) -> Self {
        other
    }

    /// A zero-length demo has nothing to demonstrate.
    pub fn validate(&self) -> Result<()> {
        if self.demo.length == 0 {
            return Err(CollectError::Config(
                "demo.length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the default config file path for the current user.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fillseq").join("config.toml"))
    }
}
