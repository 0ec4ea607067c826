//! Rating policy trait and implementations
//!
//! A policy decides how many rating points a win or loss is worth. Policies
//! may keep state between calls (the streak bonus does), and that state
//! belongs to the policy instance: every player it is applied to shares it.

use crate::config::rating::{FixedDeltaSettings, StreakBonusSettings};
use crate::error::Result;
use crate::types::PolicyKind;
use tracing::trace;

use super::opponent::OpponentResolver;

/// Trait for computing rating deltas for game outcomes
pub trait RatingPolicy: Send + Sync {
    /// Which variant this policy implements
    fn kind(&self) -> PolicyKind;

    /// Points to add on a win or subtract on a loss. Never negative.
    ///
    /// Stateful policies update their state on every call.
    fn compute_delta(&mut self, is_win: bool) -> i32;

    /// Best-effort opponent name for a game recorded by `player_name`.
    /// Empty when the policy has no notion of an opponent.
    fn resolve_opponent(&self, player_name: &str) -> String;
}

/// Stateless policy with fixed win and loss deltas (standard and reduced-loss games)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDeltaPolicy {
    kind: PolicyKind,
    deltas: FixedDeltaSettings,
    opponents: OpponentResolver,
}

impl FixedDeltaPolicy {
    /// +50 / -20
    pub fn standard() -> Self {
        Self {
            kind: PolicyKind::Standard,
            deltas: FixedDeltaSettings::standard(),
            opponents: OpponentResolver::default(),
        }
    }

    /// +50 / -10
    pub fn reduced_loss() -> Self {
        Self {
            kind: PolicyKind::ReducedLoss,
            deltas: FixedDeltaSettings::reduced_loss(),
            opponents: OpponentResolver::default(),
        }
    }

    /// Replace the deltas, rejecting negative values
    pub fn with_deltas(mut self, deltas: FixedDeltaSettings) -> Result<Self> {
        deltas.validate()?;
        self.deltas = deltas;
        Ok(self)
    }

    pub fn with_opponents(mut self, opponents: OpponentResolver) -> Self {
        self.opponents = opponents;
        self
    }

    pub fn deltas(&self) -> FixedDeltaSettings {
        self.deltas
    }
}

impl RatingPolicy for FixedDeltaPolicy {
    fn kind(&self) -> PolicyKind {
        self.kind
    }

    fn compute_delta(&mut self, is_win: bool) -> i32 {
        if is_win {
            self.deltas.win
        } else {
            self.deltas.loss
        }
    }

    fn resolve_opponent(&self, player_name: &str) -> String {
        self.opponents.resolve(player_name)
    }
}

/// Practice games: no rating effect and no opponent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingPolicy;

impl RatingPolicy for TrainingPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Training
    }

    fn compute_delta(&mut self, _is_win: bool) -> i32 {
        0
    }

    fn resolve_opponent(&self, _player_name: &str) -> String {
        String::new()
    }
}

/// Rewards consecutive wins: `base_win` until the streak passes `threshold`,
/// then `bonus_win`. Any loss resets the streak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakBonusPolicy {
    settings: StreakBonusSettings,
    streak: u32,
    opponents: OpponentResolver,
}

impl StreakBonusPolicy {
    /// Default deltas starting from `initial_streak` consecutive wins.
    ///
    /// Fails with `InvalidArgument` if `initial_streak` is negative.
    pub fn new(initial_streak: i32) -> Result<Self> {
        Self::with_settings(StreakBonusSettings {
            initial_streak,
            ..StreakBonusSettings::default()
        })
    }

    pub fn with_settings(settings: StreakBonusSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            streak: settings.initial_streak.unsigned_abs(),
            opponents: OpponentResolver::default(),
        })
    }

    pub fn with_opponents(mut self, opponents: OpponentResolver) -> Self {
        self.opponents = opponents;
        self
    }

    /// Consecutive wins counted so far
    pub fn streak(&self) -> u32 {
        self.streak
    }
}

impl RatingPolicy for StreakBonusPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::StreakBonus
    }

    fn compute_delta(&mut self, is_win: bool) -> i32 {
        if !is_win {
            trace!(previous_streak = self.streak, "win streak reset");
            self.streak = 0;
            return self.settings.loss;
        }

        self.streak = self.streak.saturating_add(1);
        if self.streak <= self.settings.threshold {
            self.settings.base_win
        } else {
            trace!(streak = self.streak, "win streak bonus applied");
            self.settings.bonus_win
        }
    }

    fn resolve_opponent(&self, player_name: &str) -> String {
        self.opponents.resolve(player_name)
    }
}
