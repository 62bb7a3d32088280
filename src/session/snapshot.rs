//! Whole-session checkpoints.
//!
//! A snapshot carries everything a [`Session`](super::Session) needs to pick
//! up where it stopped: opponent state, counters, the round log, match
//! progress, and the position of the RNG stream. Restoring one continues the
//! same opponent sequence.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRngState, PlayMode, Result, SessionState};

use super::match_play::{MatchState, MATCH_ROUNDS};
use super::scoreboard::{RoundLog, Scoreboard, ROUND_LOG_CAPACITY};

/// Serializable copy of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub mode: PlayMode,
    pub scoreboard: Scoreboard,
    pub log: RoundLog,
    pub match_state: MatchState,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Check that the parts agree with each other.
    ///
    /// Counters must cover exactly the recorded history, the log cannot hold
    /// more rounds than were played, and the running match must be one a
    /// session could have produced.
    pub fn validate(&self) -> Result<()> {
        let played = self.state.rounds_played();
        let board = &self.scoreboard;

        if board.total_rounds as usize != played {
            return Err(inconsistent(format!(
                "scoreboard counts {} rounds, history has {}",
                board.total_rounds, played
            )));
        }
        if board.wins + board.losses + board.draws != board.total_rounds {
            return Err(inconsistent("scoreboard totals do not add up".to_string()));
        }
        if self.log.len() > ROUND_LOG_CAPACITY.min(played) {
            return Err(inconsistent(format!("round log holds {} entries", self.log.len())));
        }

        let m = &self.match_state;
        if m.round > MATCH_ROUNDS
            || m.player_wins + m.opponent_wins + m.draws != m.round
            || m.rounds.len() != m.round as usize
        {
            return Err(inconsistent(format!("match state at round {} is malformed", m.round)));
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate a snapshot produced by [`SessionSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

fn inconsistent(reason: String) -> EngineError {
    EngineError::InconsistentSnapshot(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Choice, EngineConfig, GameRng};
    use crate::rules::RoundResult;
    use crate::session::RoundRecord;

    fn snapshot_after(rounds: &[(Choice, Choice, RoundResult)]) -> SessionSnapshot {
        let mut state = SessionState::from_config(&EngineConfig::default());
        let mut scoreboard = Scoreboard::new();
        let mut log = RoundLog::new();
        for &(player, opponent, result) in rounds {
            state.record_round(player, opponent);
            scoreboard.record(result);
            log.push(RoundRecord::new(player, opponent, result));
        }
        SessionSnapshot {
            state,
            mode: PlayMode::Single,
            scoreboard,
            log,
            match_state: MatchState::new(),
            rng: GameRng::new(1).state(),
        }
    }

    #[test]
    fn test_consistent_snapshot_validates() {
        let snapshot = snapshot_after(&[
            (Choice::Rock, Choice::Scissors, RoundResult::Win),
            (Choice::Paper, Choice::Paper, RoundResult::Draw),
        ]);
        assert!(snapshot.validate().is_ok());

        let restored = SessionSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_counters_must_match_history() {
        let mut snapshot = snapshot_after(&[(Choice::Rock, Choice::Paper, RoundResult::Lose)]);
        snapshot.state.reset();

        let err = snapshot.validate().unwrap_err();
        assert!(matches!(err, EngineError::InconsistentSnapshot(_)));

        // decoding rejects it too
        let bytes = snapshot.to_bytes().unwrap();
        assert!(matches!(
            SessionSnapshot::from_bytes(&bytes),
            Err(EngineError::InconsistentSnapshot(_))
        ));
    }

    #[test]
    fn test_malformed_match_rejected() {
        let mut snapshot = snapshot_after(&[]);
        snapshot.match_state.round = 2;
        assert!(snapshot.validate().is_err());
    }
}
