//! Rating Ledger - player ratings driven by pluggable game policies
//!
//! This crate tracks players' ratings and game histories. Each recorded game
//! asks a rating policy (standard, training, reduced-loss or win-streak bonus)
//! how many points the outcome is worth.

pub mod config;
pub mod error;
pub mod player;
pub mod rating;
pub mod report;
pub mod scenario;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use player::Player;
pub use rating::{PolicyFactory, RatingPolicy};
pub use scenario::{Scenario, ScenarioRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
