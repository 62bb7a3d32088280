//! Engine configuration types.
//!
//! Callers configure a session by providing:
//! - `Alphabet`: which choices are playable
//! - `Difficulty`: which opponent heuristic runs
//! - `PlayMode`: single rounds or best-of-five matches
//! - `EngineConfig`: combines the above with an RNG seed

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::alphabet::Alphabet;
use super::choice::Choice;
use super::error::{EngineError, Result};

/// Opponent strategy selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Repeats its previous move 60% of the time.
    #[default]
    Normal,
    /// Predicts the player's most frequent core move and counters it.
    Hard,
    /// Counters the player's most frequent move once enough history exists.
    Adaptive,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Normal, Difficulty::Hard, Difficulty::Adaptive];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Normal => f.write_str("normal"),
            Difficulty::Hard => f.write_str("hard"),
            Difficulty::Adaptive => f.write_str("adaptive"),
        }
    }
}

/// Accepts `easy` as an alias of `normal`, as the web front-end stores it.
impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "easy" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "adaptive" => Ok(Difficulty::Adaptive),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// How rounds are grouped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Independent rounds.
    #[default]
    Single,
    /// Best of five rounds; first to three wins takes the match.
    Match,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Playable choices.
    pub alphabet: Alphabet,

    /// Opponent heuristic.
    pub difficulty: Difficulty,

    /// Round grouping.
    pub mode: PlayMode,

    /// Seed for the session RNG. Same seed produces the same opponent moves.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Basic,
            difficulty: Difficulty::Normal,
            mode: PlayMode::Single,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Build the alphabet from explicit choice names.
    ///
    /// Fails with `EmptyAlphabetConfiguration` when `names` is empty.
    pub fn with_choice_names(mut self, names: &[&str]) -> Result<Self> {
        let choices = names
            .iter()
            .map(|name| name.parse::<Choice>())
            .collect::<Result<Vec<_>>>()?;
        self.alphabet = Alphabet::from_choices(&choices)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Log the configuration at info level.
    pub fn log(&self) {
        log::info!("[EngineConfig]");
        log::info!("| alphabet: {}", self.alphabet);
        log::info!("| difficulty: {}", self.difficulty);
        log::info!("| mode: {:?}", self.mode);
        log::info!("| seed: {}", self.seed);
    }
}
