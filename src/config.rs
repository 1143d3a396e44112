use crate::units::{UnitPolicy, DEFAULT_DECIMALS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "measureit.toml";

/// Upper bound on displayed decimals; f64 carries about 15 significant digits
pub const MAX_DECIMALS: usize = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid decimals: {0} (must be at most 15)")]
    InvalidDecimals(usize),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Decimals shown for converted values
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    // Handling of units that do not belong to the requested category
    #[serde(default)]
    pub unit_policy: UnitPolicy,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            unit_policy: UnitPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise `measureit.toml` when it exists, otherwise defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(self.decimals));
        }
        if self
            .log_level
            .parse::<tracing::level_filters::LevelFilter>()
            .is_err()
        {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}
