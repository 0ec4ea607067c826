//! Console reports for player histories
//!
//! Formatting only; nothing here mutates players.

use crate::types::PlayerSummary;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format for player reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Fixed-width history table per player
    #[default]
    Table,
    /// Pretty-printed JSON array of player summaries
    Json,
}

/// Fixed-width table of one player's games
pub struct HistoryTable<'a> {
    summary: &'a PlayerSummary,
}

impl<'a> HistoryTable<'a> {
    pub fn new(summary: &'a PlayerSummary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for HistoryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game history for {}:", self.summary.name)?;
        writeln!(f, "Opponent  | Result | Rating Change | Game Index")?;
        for record in &self.summary.history {
            writeln!(
                f,
                "{:<8} | {:<6} | {:>13} | {:>10}",
                record.opponent_name,
                record.result.to_string(),
                record.rating_change,
                record.game_index
            )?;
        }
        write!(
            f,
            "Rating: {} after {} games",
            self.summary.rating, self.summary.games_played
        )
    }
}

/// Render every summary in the requested format
pub fn render(summaries: &[PlayerSummary], format: ReportFormat) -> anyhow::Result<String> {
    match format {
        ReportFormat::Table => Ok(summaries
            .iter()
            .map(|summary| HistoryTable::new(summary).to_string())
            .collect::<Vec<_>>()
            .join("\n\n")),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameResult, OutcomeRecord};

    fn alice() -> PlayerSummary {
        PlayerSummary {
            name: "Alice".to_string(),
            rating: 1050,
            games_played: 2,
            history: vec![
                OutcomeRecord {
                    opponent_name: "Opponent".to_string(),
                    result: GameResult::Win,
                    rating_change: 50,
                    game_index: 1,
                },
                OutcomeRecord {
                    opponent_name: String::new(),
                    result: GameResult::Win,
                    rating_change: 0,
                    game_index: 2,
                },
            ],
        }
    }

    #[test]
    fn test_table_layout() {
        let summary = alice();
        let table = HistoryTable::new(&summary).to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Game history for Alice:");
        assert_eq!(lines[1], "Opponent  | Result | Rating Change | Game Index");
        assert_eq!(lines[2], "Opponent | Win    |            50 |          1");
        assert_eq!(lines[3], "         | Win    |             0 |          2");
        assert_eq!(lines[4], "Rating: 1050 after 2 games");
    }

    #[test]
    fn test_render_json() {
        let output = render(&[alice()], ReportFormat::Json).unwrap();
        let parsed: Vec<PlayerSummary> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec![alice()]);
    }

    #[test]
    fn test_render_tables_separated() {
        let output = render(&[alice(), alice()], ReportFormat::Table).unwrap();
        assert_eq!(output.matches("Game history for Alice:").count(), 2);
        assert!(output.contains("games\n\nGame history"));
    }
}
