//! Test fixtures and mock implementations for integration testing

use rating_ledger::rating::RatingPolicy;
use rating_ledger::types::PolicyKind;
use std::sync::{Arc, Mutex};

/// Mock policy that returns scripted deltas and records every call
#[derive(Debug, Default)]
pub struct RecordingPolicy {
    win_delta: i32,
    loss_delta: i32,
    opponent: String,
    calls: Arc<Mutex<Vec<bool>>>,
}

impl RecordingPolicy {
    pub fn new(win_delta: i32, loss_delta: i32) -> Self {
        Self {
            win_delta,
            loss_delta,
            opponent: "Mock".to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every `is_win` argument passed to `compute_delta`, in order
    pub fn get_calls(&self) -> Vec<bool> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl RatingPolicy for RecordingPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Standard
    }

    fn compute_delta(&mut self, is_win: bool) -> i32 {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(is_win);
        }
        if is_win {
            self.win_delta
        } else {
            self.loss_delta
        }
    }

    fn resolve_opponent(&self, player_name: &str) -> String {
        format!("{} vs {}", self.opponent, player_name)
    }
}
