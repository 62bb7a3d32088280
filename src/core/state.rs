//! Per-session opponent state.
//!
//! The engine never owns this state. Callers hold a `SessionState`, pass it
//! by reference to the opponent heuristics, and commit the round afterwards
//! with [`SessionState::record_round`].
//!
//! `player_history` uses `im::Vector` so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::alphabet::Alphabet;
use super::choice::Choice;
use super::config::{Difficulty, EngineConfig};
use super::error::Result;

/// History and settings the opponent heuristics read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Player's past choices, oldest first. Append-only until reset.
    pub player_history: Vector<Choice>,

    /// Opponent's most recent choice, `None` before the first round.
    pub last_opponent_choice: Option<Choice>,

    /// Active opponent heuristic.
    pub difficulty: Difficulty,

    /// Active alphabet.
    pub alphabet: Alphabet,
}

impl SessionState {
    /// Create an empty state.
    pub fn new(alphabet: Alphabet, difficulty: Difficulty) -> Self {
        Self {
            player_history: Vector::new(),
            last_opponent_choice: None,
            difficulty,
            alphabet,
        }
    }

    /// Create an empty state from configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.alphabet, config.difficulty)
    }

    /// Number of rounds recorded since the last reset.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.player_history.len()
    }

    /// Commit a finished round.
    pub fn record_round(&mut self, player: Choice, opponent: Choice) {
        self.player_history.push_back(player);
        self.last_opponent_choice = Some(opponent);
    }

    /// Clear history and the last opponent choice. Settings are kept.
    pub fn reset(&mut self) {
        self.player_history.clear();
        self.last_opponent_choice = None;
    }

    /// Encode for caller-side persistence.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`SessionState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
