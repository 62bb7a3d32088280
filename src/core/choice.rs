//! Hand choices and the beats-relation.
//!
//! ## Beats-relation
//!
//! | Choice   | Beats              |
//! |----------|--------------------|
//! | Rock     | Scissors, Lizard   |
//! | Paper    | Rock, Spock        |
//! | Scissors | Paper, Lizard      |
//! | Lizard   | Paper, Spock       |
//! | Spock    | Scissors, Rock     |
//!
//! Restricted to Rock/Paper/Scissors this is the classic 3-cycle. Over all
//! five choices it is a tournament: for any two distinct choices exactly one
//! beats the other.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::EngineError;

/// One playable hand-sign.
///
/// Declaration order is the canonical enumeration order and is relied on
/// for deterministic tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Choice {
    /// All choices in canonical order.
    pub const ALL: [Choice; 5] = [
        Choice::Rock,
        Choice::Paper,
        Choice::Scissors,
        Choice::Lizard,
        Choice::Spock,
    ];

    /// The three core choices of the basic game.
    pub const CORE: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Position in canonical order (0-4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The two choices this one defeats.
    #[must_use]
    pub const fn defeats(self) -> [Choice; 2] {
        match self {
            Choice::Rock => [Choice::Scissors, Choice::Lizard],
            Choice::Paper => [Choice::Rock, Choice::Spock],
            Choice::Scissors => [Choice::Paper, Choice::Lizard],
            Choice::Lizard => [Choice::Paper, Choice::Spock],
            Choice::Spock => [Choice::Scissors, Choice::Rock],
        }
    }

    /// Check if this choice beats `other`.
    #[must_use]
    pub fn beats(self, other: Choice) -> bool {
        self.defeats().contains(&other)
    }

    /// Lowercase English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
            Choice::Lizard => "lizard",
            Choice::Spock => "spock",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Choice::Rock => "✊",
            Choice::Paper => "✋",
            Choice::Scissors => "✌️",
            Choice::Lizard => "🦎",
            Choice::Spock => "🖖",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses English names case-insensitively, plus the Finnish
/// `kivi`/`paperi`/`sakset` used by the console and desktop front-ends.
impl FromStr for Choice {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "rock" | "kivi" => Ok(Choice::Rock),
            "paper" | "paperi" => Ok(Choice::Paper),
            "scissors" | "sakset" => Ok(Choice::Scissors),
            "lizard" => Ok(Choice::Lizard),
            "spock" => Ok(Choice::Spock),
            _ => Err(EngineError::InvalidChoice(s.to_string())),
        }
    }
}
