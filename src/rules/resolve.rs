//! Round resolution and the pure helpers the opponent heuristics share.

use serde::{Deserialize, Serialize};

use crate::core::{Alphabet, Choice, RandomSource, Result};

/// Outcome of a round, always from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    Win,
    Lose,
    Draw,
}

impl RoundResult {
    /// Resolve two choices without alphabet validation.
    ///
    /// Total over all five choices.
    #[must_use]
    pub fn between(player: Choice, opponent: Choice) -> Self {
        if player == opponent {
            RoundResult::Draw
        } else if player.beats(opponent) {
            RoundResult::Win
        } else {
            RoundResult::Lose
        }
    }

    /// The same round seen from the opponent's side.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            RoundResult::Win => RoundResult::Lose,
            RoundResult::Lose => RoundResult::Win,
            RoundResult::Draw => RoundResult::Draw,
        }
    }

    /// Human-readable description of the round.
    #[must_use]
    pub fn message(self, player: Choice, opponent: Choice) -> String {
        match self {
            RoundResult::Draw => format!("It's a tie! Both chose {}.", player),
            RoundResult::Win => format!("You win! {} beats {}.", player, opponent),
            RoundResult::Lose => format!("AI wins! {} beats {}.", opponent, player),
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Win => f.write_str("win"),
            RoundResult::Lose => f.write_str("lose"),
            RoundResult::Draw => f.write_str("draw"),
        }
    }
}

/// Resolve a round between `player` and `opponent`.
///
/// Both choices must belong to `alphabet`; otherwise `InvalidChoice` is
/// returned and no verdict is produced.
pub fn resolve(alphabet: Alphabet, player: Choice, opponent: Choice) -> Result<RoundResult> {
    alphabet.check(player)?;
    alphabet.check(opponent)?;
    Ok(RoundResult::between(player, opponent))
}

/// The designated counter of `choice`.
///
/// For Rock/Paper/Scissors this is the unique choice that defeats it. For
/// Lizard and Spock, which each lose to two choices, one fixed counter is
/// used (Lizard→Rock, Spock→Lizard) rather than either winning reply.
#[must_use]
pub const fn counter_of(choice: Choice) -> Choice {
    match choice {
        Choice::Rock => Choice::Paper,
        Choice::Paper => Choice::Scissors,
        Choice::Scissors => Choice::Rock,
        Choice::Lizard => Choice::Rock,
        Choice::Spock => Choice::Lizard,
    }
}

/// Uniform draw from a non-empty slice of choices.
pub fn random_of<R: RandomSource + ?Sized>(choices: &[Choice], rng: &mut R) -> Choice {
    debug_assert!(!choices.is_empty());
    choices[rng.index(choices.len())]
}
