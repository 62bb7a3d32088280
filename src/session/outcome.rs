//! Serializable response for one played round.

use serde::{Deserialize, Serialize};

use crate::core::Choice;
use crate::rules::RoundResult;

use super::match_play::MatchState;
use super::scoreboard::Scoreboard;

/// Match progress included in a round outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchProgress {
    pub round: u32,
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    pub complete: bool,
    /// Set once the match is complete.
    pub winner: Option<RoundResult>,
}

impl From<&MatchState> for MatchProgress {
    fn from(state: &MatchState) -> Self {
        Self {
            round: state.round,
            player_wins: state.player_wins,
            opponent_wins: state.opponent_wins,
            draws: state.draws,
            complete: state.is_complete(),
            winner: state.winner(),
        }
    }
}

/// Everything a front-end needs to render a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player: Choice,
    pub opponent: Choice,
    pub result: RoundResult,
    pub message: String,
    pub scoreboard: Scoreboard,
    /// Present in match mode only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub match_progress: Option<MatchProgress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let outcome = RoundOutcome {
            player: Choice::Rock,
            opponent: Choice::Scissors,
            result: RoundResult::Win,
            message: RoundResult::Win.message(Choice::Rock, Choice::Scissors),
            scoreboard: Scoreboard { total_rounds: 1, wins: 1, losses: 0, draws: 0 },
            match_progress: None,
        };

        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["player"], "rock");
        assert_eq!(json["opponent"], "scissors");
        assert_eq!(json["result"], "win");
        assert_eq!(json["scoreboard"]["wins"], 1);
        assert!(json.get("match_progress").is_none());

        let back: RoundOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn test_progress_from_state() {
        let state = MatchState {
            round: 3,
            player_wins: 3,
            ..MatchState::default()
        };
        let progress = MatchProgress::from(&state);
        assert!(progress.complete);
        assert_eq!(progress.winner, Some(RoundResult::Win));
    }
}
