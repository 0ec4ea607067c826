//! Opponent name resolution
//!
//! There is no matchmaking behind this: a resolver either reports a fixed
//! placeholder, reports nobody, or pairs two known names with each other.

use serde::{Deserialize, Serialize};

/// Placeholder reported when no better opponent name is known
pub const DEFAULT_OPPONENT: &str = "Opponent";

/// Strategy for naming the opponent of a recorded game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentResolver {
    /// Same name for every player
    Placeholder(String),
    /// Always the empty string
    Nobody,
    /// `.1` for `.0`, `.0` for anyone else
    Pairing(String, String),
}

impl Default for OpponentResolver {
    fn default() -> Self {
        OpponentResolver::Placeholder(DEFAULT_OPPONENT.to_string())
    }
}

impl OpponentResolver {
    pub fn resolve(&self, player_name: &str) -> String {
        match self {
            OpponentResolver::Placeholder(name) => name.clone(),
            OpponentResolver::Nobody => String::new(),
            OpponentResolver::Pairing(first, second) => {
                if player_name == first {
                    second.clone()
                } else {
                    first.clone()
                }
            }
        }
    }
}
