//! Construction of rating policies from configuration

use crate::config::rating::{PolicySettings, RatingConfig};
use crate::error::Result;
use crate::types::PolicyKind;
use tracing::debug;

use super::opponent::OpponentResolver;
use super::policy::{FixedDeltaPolicy, RatingPolicy, StreakBonusPolicy, TrainingPolicy};

/// Builds boxed policies from validated settings
#[derive(Debug, Clone, Default)]
pub struct PolicyFactory {
    settings: PolicySettings,
    opponents: OpponentResolver,
}

impl PolicyFactory {
    pub fn new(settings: PolicySettings, rating: &RatingConfig) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            opponents: OpponentResolver::Placeholder(rating.opponent_placeholder.clone()),
        })
    }

    pub fn settings(&self) -> &PolicySettings {
        &self.settings
    }

    /// Build a policy of the given kind using the configured settings
    pub fn create(&self, kind: PolicyKind) -> Result<Box<dyn RatingPolicy>> {
        self.create_with_streak(kind, None)
    }

    /// Like [`create`](Self::create), but a streak-bonus policy starts from
    /// `initial_streak` when given. Ignored for other kinds.
    pub fn create_with_streak(
        &self,
        kind: PolicyKind,
        initial_streak: Option<i32>,
    ) -> Result<Box<dyn RatingPolicy>> {
        debug!(%kind, ?initial_streak, "creating rating policy");

        let policy: Box<dyn RatingPolicy> = match kind {
            PolicyKind::Standard => Box::new(
                FixedDeltaPolicy::standard()
                    .with_deltas(self.settings.standard)?
                    .with_opponents(self.opponents.clone()),
            ),
            PolicyKind::ReducedLoss => Box::new(
                FixedDeltaPolicy::reduced_loss()
                    .with_deltas(self.settings.reduced_loss)?
                    .with_opponents(self.opponents.clone()),
            ),
            PolicyKind::Training => Box::new(TrainingPolicy),
            PolicyKind::StreakBonus => {
                let mut settings = self.settings.streak_bonus;
                if let Some(streak) = initial_streak {
                    settings.initial_streak = streak;
                }
                Box::new(
                    StreakBonusPolicy::with_settings(settings)?
                        .with_opponents(self.opponents.clone()),
                )
            }
        };

        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RatingError;

    #[test]
    fn test_creates_every_kind() {
        let factory = PolicyFactory::default();
        for kind in PolicyKind::ALL {
            let policy = factory.create(kind).unwrap();
            assert_eq!(policy.kind(), kind);
        }
    }

    #[test]
    fn test_default_factory_deltas() {
        let factory = PolicyFactory::default();

        let mut standard = factory.create(PolicyKind::Standard).unwrap();
        assert_eq!(standard.compute_delta(true), 50);
        assert_eq!(standard.compute_delta(false), 20);

        let mut reduced = factory.create(PolicyKind::ReducedLoss).unwrap();
        assert_eq!(reduced.compute_delta(false), 10);

        let mut training = factory.create(PolicyKind::Training).unwrap();
        assert_eq!(training.compute_delta(true), 0);
    }

    #[test]
    fn test_negative_streak_rejected() {
        let factory = PolicyFactory::default();
        let err = factory
            .create_with_streak(PolicyKind::StreakBonus, Some(-1))
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<RatingError>(),
            Some(RatingError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_streak_override() {
        let factory = PolicyFactory::default();
        let mut policy = factory
            .create_with_streak(PolicyKind::StreakBonus, Some(3))
            .unwrap();
        assert_eq!(policy.compute_delta(true), 50);
    }

    #[test]
    fn test_configured_opponent_placeholder() {
        let rating = RatingConfig {
            opponent_placeholder: "House".to_string(),
            ..Default::default()
        };
        let factory = PolicyFactory::new(PolicySettings::default(), &rating).unwrap();

        let policy = factory.create(PolicyKind::Standard).unwrap();
        assert_eq!(policy.resolve_opponent("Alice"), "House");

        let training = factory.create(PolicyKind::Training).unwrap();
        assert_eq!(training.resolve_opponent("Alice"), "");
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = PolicySettings::default();
        settings.standard.win = -10;
        assert!(PolicyFactory::new(settings, &RatingConfig::default()).is_err());
    }
}
