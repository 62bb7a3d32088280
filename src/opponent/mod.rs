//! Computer opponent move selection.
//!
//! [`choose_opponent_move`] is the single decision point: it dispatches on
//! [`Difficulty`] to one of the heuristics in [`strategy`]. Adding a
//! difficulty means adding one enum variant and one match arm here.
//!
//! ## Example
//!
//! ```
//! use rps_engine::core::{Alphabet, Difficulty, GameRng, SessionState};
//! use rps_engine::opponent::choose_opponent_move;
//!
//! let state = SessionState::new(Alphabet::Basic, Difficulty::Hard);
//! let mut rng = GameRng::new(42);
//!
//! let reply = choose_opponent_move(Difficulty::Hard, &state, &mut rng);
//! assert!(Alphabet::Basic.contains(reply));
//! ```

pub mod strategy;
pub mod tally;

pub use strategy::{
    ADAPTIVE_COUNTER_PROBABILITY, ADAPTIVE_MIN_HISTORY, HARD_COUNTER_PROBABILITY, REPEAT_PROBABILITY,
};
pub use tally::Tally;

use crate::core::{Choice, Difficulty, RandomSource, SessionState};

/// Pick the opponent's next choice.
///
/// Reads `state` only; the caller commits the round afterwards.
pub fn choose_opponent_move<R: RandomSource + ?Sized>(
    difficulty: Difficulty,
    state: &SessionState,
    rng: &mut R,
) -> Choice {
    let choice = match difficulty {
        Difficulty::Normal => strategy::normal(state, rng),
        Difficulty::Hard => strategy::hard(state, rng),
        Difficulty::Adaptive => strategy::adaptive(state, rng),
    };

    log::debug!(
        "opponent ({}, {} alphabet, {} moves seen) -> {}",
        difficulty,
        state.alphabet,
        state.player_history.len(),
        choice
    );
    choice
}

/// Pick the opponent's next choice using the state's own difficulty.
pub fn next_move<R: RandomSource + ?Sized>(state: &SessionState, rng: &mut R) -> Choice {
    choose_opponent_move(state.difficulty, state, rng)
}
