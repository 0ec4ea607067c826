//! Configuration management for the rating ledger
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values for players and rating policies.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rating::{FixedDeltaSettings, PolicySettings, RatingConfig, StreakBonusSettings};
