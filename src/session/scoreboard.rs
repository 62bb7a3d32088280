//! Aggregate counters and the recent-rounds log.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::Choice;
use crate::rules::RoundResult;

/// Rounds kept in the recent-rounds log.
pub const ROUND_LOG_CAPACITY: usize = 10;

/// Running totals for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub total_rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished round.
    pub fn record(&mut self, result: RoundResult) {
        self.total_rounds += 1;
        match result {
            RoundResult::Win => self.wins += 1,
            RoundResult::Lose => self.losses += 1,
            RoundResult::Draw => self.draws += 1,
        }
    }

    /// Fraction of rounds the player won, 0.0 before any round.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_rounds)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub player: Choice,
    pub opponent: Choice,
    pub result: RoundResult,
}

impl RoundRecord {
    pub fn new(player: Choice, opponent: Choice, result: RoundResult) -> Self {
        Self { player, opponent, result }
    }
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You: {} | AI: {} | Result: {}", self.player, self.opponent, self.result)
    }
}

/// Bounded log of the most recent rounds, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLog {
    entries: VecDeque<RoundRecord>,
}

impl RoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a round, dropping the oldest beyond capacity.
    pub fn push(&mut self, record: RoundRecord) {
        if self.entries.len() == ROUND_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    /// Up to `n` most recent rounds, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &RoundRecord> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
