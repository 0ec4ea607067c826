//! Error types for the rating ledger
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate, with typed variants for the failures callers match on.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Rating policy not found: {name}")]
    MissingPolicy { name: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RatingError {
    /// Shorthand for an `InvalidArgument` error
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RatingError::invalid_argument("initial_streak", "cannot be negative");
        assert_eq!(
            err.to_string(),
            "Invalid argument `initial_streak`: cannot be negative"
        );

        let err = RatingError::MissingPolicy {
            name: "ranked".to_string(),
        };
        assert_eq!(err.to_string(), "Rating policy not found: ranked");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let result: Result<()> = Err(RatingError::PlayerNotFound {
            name: "Carol".to_string(),
        }
        .into());

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RatingError>(),
            Some(RatingError::PlayerNotFound { name }) if name == "Carol"
        ));
    }
}
