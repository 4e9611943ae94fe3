//! Configuration file support for Daytrack.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/daytrack/config.toml`.

use crate::{Error, Goals, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub goals: Goals,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("daytrack").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check that every goal is a usable positive threshold
    pub fn validate(&self) -> Result<()> {
        let goals = &self.goals;
        if goals.calorie_goal == 0 {
            return Err(Error::Config("calorie_goal must be positive".into()));
        }
        if goals.step_goal == 0 {
            return Err(Error::Config("step_goal must be positive".into()));
        }
        if !(goals.water_goal_liters.is_finite() && goals.water_goal_liters > 0.0) {
            return Err(Error::Config(format!(
                "water_goal_liters must be positive, got {}",
                goals.water_goal_liters
            )));
        }
        if !(goals.water_increment_goal.is_finite() && goals.water_increment_goal > 0.0) {
            return Err(Error::Config(format!(
                "water_increment_goal must be positive, got {}",
                goals.water_increment_goal
            )));
        }
        Ok(())
    }
}
