//! # rps-engine
//!
//! Round resolution and computer-opponent engine for Rock-Paper-Scissors and
//! Rock-Paper-Scissors-Lizard-Spock.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: The engine holds no session state. History,
//!    last opponent move, and difficulty are threaded in on every call.
//!
//! 2. **Injectable Randomness**: Every decision draws from a `RandomSource`.
//!    Production code uses the seeded `GameRng`; tests use `ScriptedRng`.
//!
//! 3. **Closed Difficulty Set**: `Normal | Hard | Adaptive`, dispatched in
//!    one function.
//!
//! ## Modules
//!
//! - `core`: Choices, alphabets, configuration, errors, RNG, session state
//! - `rules`: Round resolution and the counter table
//! - `opponent`: Opponent heuristics and frequency tally
//! - `session`: Scoreboard, match mode, per-id session store
//!
//! ## Example
//!
//! ```
//! use rps_engine::{resolve, Alphabet, Choice, RoundResult};
//!
//! let verdict = resolve(Alphabet::Extended, Choice::Spock, Choice::Rock).unwrap();
//! assert_eq!(verdict, RoundResult::Win);
//!
//! assert!(resolve(Alphabet::Basic, Choice::Lizard, Choice::Rock).is_err());
//! ```

pub mod core;
pub mod rules;
pub mod opponent;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Alphabet, Choice, Difficulty, EngineConfig, EngineError, GameRng, GameRngState, PlayMode,
    RandomSource, Result, ScriptedRng, SessionState,
};

pub use crate::rules::{counter_of, random_of, resolve, RoundResult};

pub use crate::opponent::{choose_opponent_move, next_move, Tally};

pub use crate::session::{
    MatchProgress, MatchState, RoundLog, RoundOutcome, RoundRecord, Scoreboard, Session, SessionId,
    SessionSnapshot, SessionStore,
};
