//! Common types used throughout the rating ledger

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RatingError;

/// Name identifying a player
pub type PlayerName = String;

/// Rating assigned to players created without an explicit starting rating
pub const DEFAULT_RATING: i32 = 1000;

/// Lowest rating a player can hold; losses clamp here
pub const RATING_FLOOR: i32 = 1;

/// Outcome of a single game from the recording player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Lose,
}

impl GameResult {
    pub fn is_win(self) -> bool {
        matches!(self, GameResult::Win)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Win => write!(f, "Win"),
            GameResult::Lose => write!(f, "Lose"),
        }
    }
}

/// Which rating policy variant a policy instance implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Standard,
    Training,
    ReducedLoss,
    StreakBonus,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Standard,
        PolicyKind::Training,
        PolicyKind::ReducedLoss,
        PolicyKind::StreakBonus,
    ];
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::Standard => write!(f, "standard"),
            PolicyKind::Training => write!(f, "training"),
            PolicyKind::ReducedLoss => write!(f, "reduced_loss"),
            PolicyKind::StreakBonus => write!(f, "streak_bonus"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| RatingError::invalid_argument("kind", format!("unknown policy kind: {s}")))
    }
}

/// One immutable ledger entry for a single game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// Empty when the policy has no opponent to report
    pub opponent_name: PlayerName,
    pub result: GameResult,
    /// Delta the policy returned, before any floor clamping
    pub rating_change: i32,
    /// 1-based, equal to the player's game count when the record was appended
    pub game_index: u32,
}

/// Snapshot of a player for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: PlayerName,
    pub rating: i32,
    pub games_played: u32,
    pub history: Vec<OutcomeRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_display() {
        assert_eq!(GameResult::Win.to_string(), "Win");
        assert_eq!(GameResult::Lose.to_string(), "Lose");
        assert!(GameResult::Win.is_win());
        assert!(!GameResult::Lose.is_win());
    }

    #[test]
    fn test_policy_kind_parse_matches_display() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>().unwrap(), kind);
        }
        assert!("ranked".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_policy_kind_serde_names() {
        let json = serde_json::to_string(&PolicyKind::ReducedLoss).unwrap();
        assert_eq!(json, "\"reduced_loss\"");

        let kind: PolicyKind = serde_json::from_str("\"streak_bonus\"").unwrap();
        assert_eq!(kind, PolicyKind::StreakBonus);
    }
}
