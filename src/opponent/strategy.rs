//! The three opponent heuristics.
//!
//! Each function reads the session state and draws from the supplied random
//! source in a fixed order, so a [`ScriptedRng`](crate::core::ScriptedRng)
//! can pin the exact outcome:
//!
//! | Heuristic | Draws                                                                 |
//! |-----------|-----------------------------------------------------------------------|
//! | Normal    | first round: `index`; else `roll`, then `index` when not repeating   |
//! | Hard      | cold start: `index`; else `index` on ties, `roll`, `index` on noise  |
//! | Adaptive  | cold start: `index`; else `roll`, then `index` when not countering   |

use smallvec::SmallVec;

use crate::core::{Choice, RandomSource, SessionState};
use crate::rules::{counter_of, random_of};

use super::tally::Tally;

/// Probability that Normal repeats its previous move.
pub const REPEAT_PROBABILITY: f64 = 0.60;

/// Probability that Hard plays the counter of its prediction.
pub const HARD_COUNTER_PROBABILITY: f64 = 0.90;

/// Probability that Adaptive plays the counter of the most frequent move.
pub const ADAPTIVE_COUNTER_PROBABILITY: f64 = 0.70;

/// Player moves Adaptive needs before it starts predicting.
pub const ADAPTIVE_MIN_HISTORY: usize = 3;

/// Recency-biased repetition.
///
/// A previous opponent choice that is not in the active alphabet (the
/// alphabet was narrowed mid-session) is treated as absent.
pub fn normal<R: RandomSource + ?Sized>(state: &SessionState, rng: &mut R) -> Choice {
    let members = state.alphabet.members();

    let last = match state.last_opponent_choice {
        Some(last) if state.alphabet.contains(last) => last,
        _ => return random_of(members, rng),
    };

    if rng.chance(REPEAT_PROBABILITY) {
        return last;
    }

    let others: SmallVec<[Choice; 4]> = members.iter().copied().filter(|&c| c != last).collect();
    if others.is_empty() {
        return last;
    }
    random_of(&others, rng)
}

/// Frequency prediction over Rock/Paper/Scissors with a random tie-break.
///
/// Lizard and Spock in the history are ignored, and the reply is always one
/// of the three core choices.
pub fn hard<R: RandomSource + ?Sized>(state: &SessionState, rng: &mut R) -> Choice {
    if state.player_history.is_empty() {
        return random_of(&Choice::CORE, rng);
    }

    let tally = Tally::from_history(&state.player_history);
    if tally.max_over(&Choice::CORE) == 0 {
        return random_of(&Choice::CORE, rng);
    }

    let leaders = tally.leaders(&Choice::CORE);
    let predicted = if leaders.len() == 1 {
        leaders[0]
    } else {
        random_of(&leaders, rng)
    };
    log::trace!("hard: predicted {} from {:?}", predicted, leaders);

    if rng.chance(HARD_COUNTER_PROBABILITY) {
        counter_of(predicted)
    } else {
        random_of(&Choice::CORE, rng)
    }
}

/// Counter of the most frequent move over the full active alphabet.
///
/// Ties for most frequent go to the earliest choice in canonical order.
pub fn adaptive<R: RandomSource + ?Sized>(state: &SessionState, rng: &mut R) -> Choice {
    let members = state.alphabet.members();

    if state.player_history.len() < ADAPTIVE_MIN_HISTORY {
        return random_of(members, rng);
    }

    let tally = Tally::from_history(&state.player_history);
    match tally.most_frequent(members) {
        Some((most_frequent, count)) if count > 0 && rng.chance(ADAPTIVE_COUNTER_PROBABILITY) => {
            log::trace!("adaptive: countering {} (seen {} times)", most_frequent, count);
            counter_of(most_frequent)
        }
        _ => random_of(members, rng),
    }
}
