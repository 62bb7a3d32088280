//! The closed set of choices a session plays with.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::choice::Choice;
use super::error::{EngineError, Result};

/// Active alphabet of hand choices.
///
/// Fixed at configuration time. Both sides of a round must draw from the
/// same alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Rock, Paper, Scissors.
    #[default]
    Basic,
    /// Rock, Paper, Scissors, Lizard, Spock.
    Extended,
}

impl Alphabet {
    /// Build an alphabet from an explicit set of choices.
    ///
    /// Order and duplicates are ignored. The set must be exactly the basic
    /// or the extended alphabet.
    pub fn from_choices(choices: &[Choice]) -> Result<Self> {
        if choices.is_empty() {
            return Err(EngineError::EmptyAlphabetConfiguration);
        }

        let mut present = [false; 5];
        for choice in choices {
            present[choice.index()] = true;
        }

        match present {
            [true, true, true, false, false] => Ok(Alphabet::Basic),
            [true, true, true, true, true] => Ok(Alphabet::Extended),
            _ => {
                let names: Vec<&str> = Choice::ALL
                    .iter()
                    .filter(|c| present[c.index()])
                    .map(|c| c.name())
                    .collect();
                Err(EngineError::UnsupportedAlphabet(names.join(", ")))
            }
        }
    }

    /// Members in canonical order.
    #[must_use]
    pub fn members(self) -> &'static [Choice] {
        match self {
            Alphabet::Basic => &Choice::CORE,
            Alphabet::Extended => &Choice::ALL,
        }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.members().len()
    }

    #[must_use]
    pub fn contains(self, choice: Choice) -> bool {
        self.members().contains(&choice)
    }

    /// Return `choice` if it belongs to this alphabet.
    pub fn check(self, choice: Choice) -> Result<Choice> {
        if self.contains(choice) {
            Ok(choice)
        } else {
            Err(EngineError::InvalidChoice(format!(
                "{} is not part of the {} alphabet",
                choice, self
            )))
        }
    }

    /// Parse caller input and check membership in one step.
    pub fn parse_choice(self, input: &str) -> Result<Choice> {
        let choice: Choice = input.parse()?;
        self.check(choice)
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Basic => f.write_str("basic"),
            Alphabet::Extended => f.write_str("extended"),
        }
    }
}

impl FromStr for Alphabet {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "classic" | "rps" => Ok(Alphabet::Basic),
            "extended" | "rpsls" | "lizard-spock" => Ok(Alphabet::Extended),
            _ => Err(EngineError::UnsupportedAlphabet(s.to_string())),
        }
    }
}
