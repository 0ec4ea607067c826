//! Rating policies
//!
//! This module provides the pluggable policies that turn a game outcome into a
//! rating delta, the stub opponent resolution they report, and a factory that
//! builds them from configuration.

pub mod factory;
pub mod opponent;
pub mod policy;

// Re-export commonly used types
pub use factory::PolicyFactory;
pub use opponent::OpponentResolver;
pub use policy::{FixedDeltaPolicy, RatingPolicy, StreakBonusPolicy, TrainingPolicy};
