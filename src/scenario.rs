//! Scripted game sequences
//!
//! A [`Scenario`] declares players, named policies and an ordered list of
//! games. [`ScenarioRunner`] builds one policy instance per name and replays
//! the games against it, so stateful policies carry their state across every
//! player that plays under the same name.

use anyhow::Context;
use crate::config::AppConfig;
use crate::error::{RatingError, Result};
use crate::player::Player;
use crate::rating::{PolicyFactory, RatingPolicy};
use crate::types::{GameResult, PlayerName, PlayerSummary, PolicyKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// A player to create before any game is played
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: PlayerName,
    /// Falls back to the configured default rating
    #[serde(default)]
    pub rating: Option<i32>,
}

/// A named policy instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySpec {
    pub name: String,
    pub kind: PolicyKind,
    /// Only meaningful for `streak_bonus`
    #[serde(default)]
    pub initial_streak: Option<i32>,
}

/// One game: `player` records `result` under the policy named `policy`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStep {
    pub player: PlayerName,
    pub policy: String,
    pub result: GameResult,
}

/// Players, policies and games to replay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub players: Vec<PlayerSpec>,
    #[serde(default)]
    pub policies: Vec<PolicySpec>,
    #[serde(default)]
    pub games: Vec<GameStep>,
}

impl Scenario {
    /// Alice and Bob under each game type, ending with a four-win streak for
    /// Alice and a loss for Bob on the same streak-bonus instance.
    pub fn demo() -> Self {
        let policy = |name: &str, kind, initial_streak| PolicySpec {
            name: name.to_string(),
            kind,
            initial_streak,
        };
        let game = |player: &str, policy: &str, result| GameStep {
            player: player.to_string(),
            policy: policy.to_string(),
            result,
        };

        let mut games = Vec::new();
        for name in ["standard", "training", "reduced_loss"] {
            games.push(game("Alice", name, GameResult::Win));
            games.push(game("Bob", name, GameResult::Lose));
        }
        for _ in 0..4 {
            games.push(game("Alice", "bonus", GameResult::Win));
        }
        games.push(game("Bob", "bonus", GameResult::Lose));

        Self {
            players: vec![
                PlayerSpec {
                    name: "Alice".to_string(),
                    rating: None,
                },
                PlayerSpec {
                    name: "Bob".to_string(),
                    rating: None,
                },
            ],
            policies: vec![
                policy("standard", PolicyKind::Standard, None),
                policy("training", PolicyKind::Training, None),
                policy("reduced_loss", PolicyKind::ReducedLoss, None),
                policy("bonus", PolicyKind::StreakBonus, Some(0)),
            ],
            games,
        }
    }

    /// Load a scenario from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse scenario file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(contents)?;
        Ok(scenario)
    }
}

/// Replays a scenario's games against its players
pub struct ScenarioRunner {
    players: Vec<Player>,
    policies: HashMap<String, Box<dyn RatingPolicy>>,
    games: Vec<GameStep>,
}

impl ScenarioRunner {
    /// Create every player and policy the scenario declares.
    ///
    /// Fails on duplicate names, invalid starting ratings or invalid policy
    /// parameters. Game steps are checked by [`check_steps`](Self::check_steps)
    /// and [`run`](Self::run).
    pub fn new(config: &AppConfig, scenario: &Scenario) -> Result<Self> {
        let factory = PolicyFactory::new(config.policies.clone(), &config.rating)?;

        let mut seen = HashSet::new();
        let mut players = Vec::with_capacity(scenario.players.len());
        for spec in &scenario.players {
            if !seen.insert(spec.name.as_str()) {
                return Err(RatingError::invalid_argument(
                    "players",
                    format!("duplicate player name: {}", spec.name),
                )
                .into());
            }
            let rating = spec.rating.unwrap_or(config.rating.default_rating);
            players.push(Player::with_rating(spec.name.clone(), rating)?);
        }

        let mut policies: HashMap<String, Box<dyn RatingPolicy>> =
            HashMap::with_capacity(scenario.policies.len());
        for spec in &scenario.policies {
            if policies.contains_key(&spec.name) {
                return Err(RatingError::invalid_argument(
                    "policies",
                    format!("duplicate policy name: {}", spec.name),
                )
                .into());
            }
            let policy = factory.create_with_streak(spec.kind, spec.initial_streak)?;
            policies.insert(spec.name.clone(), policy);
        }

        Ok(Self {
            players,
            policies,
            games: scenario.games.clone(),
        })
    }

    /// Resolve every game's policy and player without recording anything.
    ///
    /// Reports the first failing step. Within a step the policy is checked
    /// before the player, so a step naming neither fails with `MissingPolicy`.
    pub fn check_steps(&self) -> Result<()> {
        for step in &self.games {
            if !self.policies.contains_key(&step.policy) {
                return Err(RatingError::MissingPolicy {
                    name: step.policy.clone(),
                }
                .into());
            }
            if self.player(&step.player).is_none() {
                return Err(RatingError::PlayerNotFound {
                    name: step.player.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Apply every game in order.
    ///
    /// Stops at the first step naming an unknown policy (`MissingPolicy`) or
    /// player (`PlayerNotFound`); that step changes nothing, earlier steps
    /// stay applied. The policy is looked up first, as in
    /// [`check_steps`](Self::check_steps).
    pub fn run(&mut self) -> Result<()> {
        info!(
            players = self.players.len(),
            policies = self.policies.len(),
            games = self.games.len(),
            "running scenario"
        );

        for step in &self.games {
            let policy = self.policies.get_mut(&step.policy).ok_or_else(|| {
                RatingError::MissingPolicy {
                    name: step.policy.clone(),
                }
            })?;
            let player = self
                .players
                .iter_mut()
                .find(|player| player.name() == step.player)
                .ok_or_else(|| RatingError::PlayerNotFound {
                    name: step.player.clone(),
                })?;

            player.record(step.result, &mut **policy);
        }

        info!("scenario complete");
        Ok(())
    }

    /// Players in declaration order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    pub fn summaries(&self) -> Vec<PlayerSummary> {
        self.players.iter().map(Player::summary).collect()
    }
}
