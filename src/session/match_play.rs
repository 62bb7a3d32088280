//! Best-of-five match tracking.
//!
//! A match ends when either side reaches three wins or five rounds have been
//! played. Finishing a match credits a vote to its winner; votes survive
//! across matches until the session is reset.

use serde::{Deserialize, Serialize};

use crate::rules::RoundResult;

use super::scoreboard::RoundRecord;

/// Rounds in a full match.
pub const MATCH_ROUNDS: u32 = 5;

/// Wins needed to take a match early.
pub const MATCH_WINS_NEEDED: u32 = 3;

/// Progress of the current match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Rounds played in the current match.
    pub round: u32,
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    /// Rounds of the current match in play order.
    pub rounds: Vec<RoundRecord>,
    /// Matches won by the player.
    pub player_votes: u32,
    /// Matches won by the opponent.
    pub opponent_votes: u32,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.player_wins >= MATCH_WINS_NEEDED
            || self.opponent_wins >= MATCH_WINS_NEEDED
            || self.round >= MATCH_ROUNDS
    }

    /// Winner of a completed match from the player's perspective.
    ///
    /// `None` while the match is still running.
    #[must_use]
    pub fn winner(&self) -> Option<RoundResult> {
        if !self.is_complete() {
            return None;
        }
        Some(match self.player_wins.cmp(&self.opponent_wins) {
            std::cmp::Ordering::Greater => RoundResult::Win,
            std::cmp::Ordering::Less => RoundResult::Lose,
            std::cmp::Ordering::Equal => RoundResult::Draw,
        })
    }

    /// Add a round to the match, starting a new match first if the previous
    /// one is already complete.
    ///
    /// Returns the winner when this round completes the match.
    pub fn record(&mut self, record: RoundRecord) -> Option<RoundResult> {
        if self.is_complete() {
            self.start_next();
        }

        self.round += 1;
        match record.result {
            RoundResult::Win => self.player_wins += 1,
            RoundResult::Lose => self.opponent_wins += 1,
            RoundResult::Draw => self.draws += 1,
        }
        self.rounds.push(record);

        let winner = self.winner()?;
        match winner {
            RoundResult::Win => self.player_votes += 1,
            RoundResult::Lose => self.opponent_votes += 1,
            RoundResult::Draw => {}
        }
        log::info!(
            "match complete after {} rounds: {} ({}-{})",
            self.round,
            winner,
            self.player_wins,
            self.opponent_wins
        );
        Some(winner)
    }

    /// Clear the current match but keep vote totals.
    pub fn start_next(&mut self) {
        self.round = 0;
        self.player_wins = 0;
        self.opponent_wins = 0;
        self.draws = 0;
        self.rounds.clear();
    }

    /// Clear everything, votes included.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
