//! Core engine types: choices, alphabets, configuration, errors, RNG, session state.
//!
//! This module contains the fundamental building blocks shared by the
//! resolution rules, the opponent heuristics, and the session layer.

pub mod choice;
pub mod alphabet;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use choice::Choice;
pub use alphabet::Alphabet;
pub use config::{Difficulty, EngineConfig, PlayMode};
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use state::SessionState;
