//! Session bookkeeping around the engine.
//!
//! - `Session`: plays rounds, commits history, keeps counters
//! - `Scoreboard` / `RoundLog`: aggregate totals and the last few rounds
//! - `MatchState`: best-of-five match tracking
//! - `RoundOutcome`: serializable per-round response
//! - `SessionSnapshot`: whole-session checkpoint, RNG position included
//! - `SessionStore`: independent sessions keyed by `SessionId`

pub mod game;
pub mod match_play;
pub mod outcome;
pub mod scoreboard;
pub mod snapshot;
pub mod store;

pub use game::Session;
pub use match_play::{MatchState, MATCH_ROUNDS, MATCH_WINS_NEEDED};
pub use outcome::{MatchProgress, RoundOutcome};
pub use scoreboard::{RoundLog, RoundRecord, Scoreboard, ROUND_LOG_CAPACITY};
pub use snapshot::SessionSnapshot;
pub use store::{SessionId, SessionStore};
