//! Round resolution rules.
//!
//! - `resolve`: verdict for a round, validated against the active alphabet
//! - `counter_of`: designated counter used by the opponent heuristics
//! - `random_of`: uniform pick from a choice set
//!
//! All functions here are pure apart from consuming the supplied random source.

pub mod resolve;

pub use resolve::{counter_of, random_of, resolve, RoundResult};
