//! Player rating ledger
//!
//! A player owns its rating, game count and an append-only history of
//! outcomes. Each recorded game asks a [`RatingPolicy`] for the delta and the
//! opponent name, applies the delta, and appends an [`OutcomeRecord`].

use crate::error::{RatingError, Result};
use crate::rating::RatingPolicy;
use crate::types::{
    GameResult, OutcomeRecord, PlayerName, PlayerSummary, DEFAULT_RATING, RATING_FLOOR,
};
use tracing::{debug, warn};

/// A rated player and their game history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: PlayerName,
    rating: i32,
    games_played: u32,
    history: Vec<OutcomeRecord>,
}

impl Player {
    /// Create a player with the default rating of 1000
    pub fn new(name: impl Into<PlayerName>) -> Self {
        Self {
            name: name.into(),
            rating: DEFAULT_RATING,
            games_played: 0,
            history: Vec::new(),
        }
    }

    /// Create a player with a starting rating.
    ///
    /// Fails with `InvalidArgument` if `rating` is below the floor.
    pub fn with_rating(name: impl Into<PlayerName>, rating: i32) -> Result<Self> {
        if rating < RATING_FLOOR {
            return Err(RatingError::invalid_argument(
                "rating",
                format!("starting rating must be at least {RATING_FLOOR}, got {rating}"),
            )
            .into());
        }

        Ok(Self {
            rating,
            ..Self::new(name)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Recorded games, oldest first
    pub fn history(&self) -> &[OutcomeRecord] {
        &self.history
    }

    /// Record a win under `policy` and return the appended record
    pub fn record_win(&mut self, policy: &mut dyn RatingPolicy) -> &OutcomeRecord {
        let delta = policy.compute_delta(true);
        self.rating = self.rating.saturating_add(delta);
        self.append(policy, GameResult::Win, delta)
    }

    /// Record a loss under `policy` and return the appended record.
    ///
    /// The rating never drops below the floor; the record keeps the policy's
    /// unclamped delta.
    pub fn record_loss(&mut self, policy: &mut dyn RatingPolicy) -> &OutcomeRecord {
        let delta = policy.compute_delta(false);
        let lowered = self.rating.saturating_sub(delta);
        if lowered < RATING_FLOOR {
            warn!(
                player = %self.name,
                rating = self.rating,
                delta,
                "rating clamped at floor"
            );
        }
        self.rating = lowered.max(RATING_FLOOR);
        self.append(policy, GameResult::Lose, delta)
    }

    /// Record `result` under `policy`
    pub fn record(&mut self, result: GameResult, policy: &mut dyn RatingPolicy) -> &OutcomeRecord {
        match result {
            GameResult::Win => self.record_win(policy),
            GameResult::Lose => self.record_loss(policy),
        }
    }

    /// Snapshot of the player for reporting
    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            name: self.name.clone(),
            rating: self.rating,
            games_played: self.games_played,
            history: self.history.clone(),
        }
    }

    fn append(
        &mut self,
        policy: &dyn RatingPolicy,
        result: GameResult,
        delta: i32,
    ) -> &OutcomeRecord {
        self.games_played += 1;
        let record = OutcomeRecord {
            opponent_name: policy.resolve_opponent(&self.name),
            result,
            rating_change: delta,
            game_index: self.games_played,
        };

        debug!(
            player = %self.name,
            policy = %policy.kind(),
            %result,
            delta,
            rating = self.rating,
            game = self.games_played,
            "recorded game"
        );

        self.history.push(record);
        &self.history[self.history.len() - 1]
    }
}
