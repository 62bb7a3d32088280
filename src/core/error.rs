//! Engine error type.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are
//! surfaced to the caller unchanged; the engine never substitutes a default
//! choice for bad input.

use thiserror::Error;

/// Errors produced by the engine and the session layer.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input could not be parsed as a choice, or the choice is not a member
    /// of the active alphabet.
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// An alphabet was configured with zero choices.
    #[error("Alphabet must contain at least one choice")]
    EmptyAlphabetConfiguration,

    /// A non-empty choice set that is neither the basic nor the extended alphabet.
    #[error("Unsupported alphabet: {0}")]
    UnsupportedAlphabet(String),

    /// Difficulty name could not be parsed.
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Session snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// A decoded session snapshot contradicts itself.
    #[error("Inconsistent snapshot: {0}")]
    InconsistentSnapshot(String),
}

impl EngineError {
    /// Check if this error was caused by caller input rather than configuration.
    #[must_use]
    pub fn is_invalid_choice(&self) -> bool {
        matches!(self, EngineError::InvalidChoice(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
