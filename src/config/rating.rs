//! Rating system configuration

use crate::error::{RatingError, Result};
use crate::types::{DEFAULT_RATING, RATING_FLOOR};
use serde::{Deserialize, Deserializer, Serialize};

/// Player-level rating configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Starting rating for players declared without one
    pub default_rating: i32,
    /// Name reported as the opponent by policies that have one
    pub opponent_placeholder: String,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_rating: DEFAULT_RATING,
            opponent_placeholder: "Opponent".to_string(),
        }
    }
}

impl RatingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_rating < RATING_FLOOR {
            return Err(RatingError::invalid_argument(
                "default_rating",
                format!("must be at least {RATING_FLOOR}, got {}", self.default_rating),
            )
            .into());
        }
        Ok(())
    }
}

/// Win/loss deltas for a stateless policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDeltaSettings {
    pub win: i32,
    pub loss: i32,
}

impl FixedDeltaSettings {
    /// 50 up, 20 down
    pub fn standard() -> Self {
        Self { win: 50, loss: 20 }
    }

    /// 50 up, 10 down
    pub fn reduced_loss() -> Self {
        Self { win: 50, loss: 10 }
    }

    pub fn validate(&self) -> Result<()> {
        if self.win < 0 {
            return Err(RatingError::invalid_argument("win", "delta cannot be negative").into());
        }
        if self.loss < 0 {
            return Err(RatingError::invalid_argument("loss", "delta cannot be negative").into());
        }
        Ok(())
    }
}

/// Parameters of the win-streak bonus policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakBonusSettings {
    /// Awarded while the streak (including the current win) is at most `threshold`
    pub base_win: i32,
    /// Awarded once the streak exceeds `threshold`
    pub bonus_win: i32,
    pub threshold: u32,
    pub loss: i32,
    /// Streak the policy starts from; negative values are rejected
    pub initial_streak: i32,
}

impl Default for StreakBonusSettings {
    fn default() -> Self {
        Self {
            base_win: 30,
            bonus_win: 50,
            threshold: 3,
            loss: 20,
            initial_streak: 0,
        }
    }
}

impl StreakBonusSettings {
    pub fn validate(&self) -> Result<()> {
        if self.initial_streak < 0 {
            return Err(RatingError::invalid_argument(
                "initial_streak",
                format!("win streak count cannot be negative, got {}", self.initial_streak),
            )
            .into());
        }
        for (name, value) in [
            ("base_win", self.base_win),
            ("bonus_win", self.bonus_win),
            ("loss", self.loss),
        ] {
            if value < 0 {
                return Err(RatingError::invalid_argument(name, "delta cannot be negative").into());
            }
        }
        Ok(())
    }
}

/// Settings for every policy kind the factory can build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySettings {
    #[serde(deserialize_with = "standard_deltas")]
    pub standard: FixedDeltaSettings,
    #[serde(deserialize_with = "reduced_loss_deltas")]
    pub reduced_loss: FixedDeltaSettings,
    pub streak_bonus: StreakBonusSettings,
}

/// Fixed-delta section as written; absent fields fall back to that section's defaults
#[derive(Deserialize)]
struct PartialDeltas {
    win: Option<i32>,
    loss: Option<i32>,
}

impl PartialDeltas {
    fn or(self, base: FixedDeltaSettings) -> FixedDeltaSettings {
        FixedDeltaSettings {
            win: self.win.unwrap_or(base.win),
            loss: self.loss.unwrap_or(base.loss),
        }
    }
}

fn standard_deltas<'de, D>(deserializer: D) -> std::result::Result<FixedDeltaSettings, D::Error>
where
    D: Deserializer<'de>,
{
    PartialDeltas::deserialize(deserializer).map(|p| p.or(FixedDeltaSettings::standard()))
}

fn reduced_loss_deltas<'de, D>(
    deserializer: D,
) -> std::result::Result<FixedDeltaSettings, D::Error>
where
    D: Deserializer<'de>,
{
    PartialDeltas::deserialize(deserializer).map(|p| p.or(FixedDeltaSettings::reduced_loss()))
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            standard: FixedDeltaSettings::standard(),
            reduced_loss: FixedDeltaSettings::reduced_loss(),
            streak_bonus: StreakBonusSettings::default(),
        }
    }
}

impl PolicySettings {
    pub fn validate(&self) -> Result<()> {
        self.standard.validate()?;
        self.reduced_loss.validate()?;
        self.streak_bonus.validate()?;
        Ok(())
    }
}
