//! Random sources for opponent move generation.
//!
//! The engine never reaches for an ambient generator. Every decision draws
//! from a [`RandomSource`] handed in by the caller:
//!
//! - [`GameRng`]: seeded ChaCha8 generator for production use
//! - [`ScriptedRng`]: replays a fixed script so tests can assert exact moves
//!
//! ## Usage
//!
//! ```
//! use rps_engine::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let idx = rng.index(3);
//! assert!(idx < 3);
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.index(100), b.index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Source of uniform randomness used by every opponent decision.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is always non-zero when called by the engine.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// True with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.roll() < probability
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

/// Seeded ChaCha8 generator with per-context streams.
///
/// Not intended to be a fairness-audited source.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream for a specific context (a session id).
    ///
    /// Hashed with `FxHasher`, whose output is fixed, so the same seed and
    /// context give the same stream on every build.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Position in the stream, for session checkpoints.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream exactly where [`GameRng::state`] left it.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn roll(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable position of a [`GameRng`] stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays scripted values instead of generating them.
///
/// `index` calls consume the index script, `roll` calls consume the roll
/// script. Each script wraps around when exhausted; an empty script yields
/// `0` / `0.0`. Indices are reduced modulo the requested length.
///
/// ```
/// use rps_engine::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new(vec![2, 0], vec![0.95]);
/// assert_eq!(rng.index(3), 2);
/// assert_eq!(rng.index(3), 0);
/// assert!(!rng.chance(0.9));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    indices: Vec<usize>,
    rolls: Vec<f64>,
    next_index: usize,
    next_roll: usize,
}

impl ScriptedRng {
    /// Create a scripted source from index and roll sequences.
    #[must_use]
    pub fn new(indices: Vec<usize>, rolls: Vec<f64>) -> Self {
        Self {
            indices,
            rolls,
            next_index: 0,
            next_roll: 0,
        }
    }

    /// Script only index draws; rolls are always `0.0`.
    #[must_use]
    pub fn with_indices(indices: Vec<usize>) -> Self {
        Self::new(indices, Vec::new())
    }

    /// Script only rolls; index draws are always `0`.
    #[must_use]
    pub fn with_rolls(rolls: Vec<f64>) -> Self {
        Self::new(Vec::new(), rolls)
    }

    /// Number of index and roll draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> (usize, usize) {
        (self.next_index, self.next_roll)
    }
}

impl RandomSource for ScriptedRng {
    fn index(&mut self, len: usize) -> usize {
        let value = if self.indices.is_empty() {
            0
        } else {
            self.indices[self.next_index % self.indices.len()]
        };
        self.next_index += 1;
        if len == 0 {
            0
        } else {
            value % len
        }
    }

    fn roll(&mut self) -> f64 {
        let value = if self.rolls.is_empty() {
            0.0
        } else {
            self.rolls[self.next_roll % self.rolls.len()]
        };
        self.next_roll += 1;
        value
    }
}
