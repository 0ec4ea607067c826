//! Main application configuration
//!
//! This module defines the top-level configuration for the rating ledger,
//! including environment variable loading, TOML file loading and validation.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use super::rating::{PolicySettings, RatingConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
    pub policies: PolicySettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "rating-ledger".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text; missing sections take defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides looked up by variable name (`SERVICE_NAME`, `LOG_LEVEL`,
    /// `DEFAULT_RATING`, `OPPONENT_PLACEHOLDER`, `STREAK_BONUS_INITIAL_STREAK`)
    pub fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(name) = get("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Some(log_level) = get("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Some(rating) = get("DEFAULT_RATING") {
            self.rating.default_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid DEFAULT_RATING value: {}", rating))?;
        }
        if let Some(placeholder) = get("OPPONENT_PLACEHOLDER") {
            self.rating.opponent_placeholder = placeholder;
        }
        if let Some(streak) = get("STREAK_BONUS_INITIAL_STREAK") {
            self.policies.streak_bonus.initial_streak = streak
                .parse()
                .map_err(|_| anyhow!("Invalid STREAK_BONUS_INITIAL_STREAK value: {}", streak))?;
        }
        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.rating.validate()?;
    config.policies.validate()?;

    Ok(())
}
