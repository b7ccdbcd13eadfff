//! Configuration loading and management.
//!
//! A network is configured with its display name and the password length
//! window enforced at sign-up. Everything has a default, so an empty TOML
//! file (or no file at all) yields a working configuration.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Network identity.
    #[serde(default)]
    pub network: NetworkConfig,
    /// Sign-up limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.password_min == 0 {
            return Err(ConfigError::Invalid(
                "limits.password_min must be at least 1".to_string(),
            ));
        }
        if self.limits.password_min > self.limits.password_max {
            return Err(ConfigError::Invalid(format!(
                "limits.password_min ({}) exceeds limits.password_max ({})",
                self.limits.password_min, self.limits.password_max
            )));
        }
        Ok(())
    }
}

/// Network identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Display name of the network (e.g. "Chirper").
    #[serde(default = "default_network_name")]
    pub name: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: default_network_name(),
        }
    }
}

fn default_network_name() -> String {
    "flocknet".to_string()
}

/// Sign-up limits.
///
/// The password window defaults to the classic 4..=8 characters.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Minimum password length, inclusive (default: 4).
    #[serde(default = "default_password_min")]
    pub password_min: usize,

    /// Maximum password length, inclusive (default: 8).
    #[serde(default = "default_password_max")]
    pub password_max: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            password_min: default_password_min(),
            password_max: default_password_max(),
        }
    }
}

fn default_password_min() -> usize {
    4
}

fn default_password_max() -> usize {
    8
}
