//! Frequency table over the player's move history.

use smallvec::SmallVec;

use crate::core::Choice;

/// Occurrence counts per choice, indexed in canonical order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u32; 5],
}

impl Tally {
    /// Count every choice in `history`.
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = &'a Choice>,
    {
        let mut tally = Self::default();
        for choice in history {
            tally.counts[choice.index()] += 1;
        }
        tally
    }

    #[must_use]
    pub fn count(&self, choice: Choice) -> u32 {
        self.counts[choice.index()]
    }

    /// Highest count among `candidates` (0 when empty).
    #[must_use]
    pub fn max_over(&self, candidates: &[Choice]) -> u32 {
        candidates.iter().map(|&c| self.count(c)).max().unwrap_or(0)
    }

    /// Every candidate whose count equals the maximum, in the order given.
    #[must_use]
    pub fn leaders(&self, candidates: &[Choice]) -> SmallVec<[Choice; 5]> {
        let max = self.max_over(candidates);
        candidates
            .iter()
            .copied()
            .filter(|&c| self.count(c) == max)
            .collect()
    }

    /// The most frequent candidate and its count.
    ///
    /// Ties go to the candidate listed first. `None` only for an empty slice.
    #[must_use]
    pub fn most_frequent(&self, candidates: &[Choice]) -> Option<(Choice, u32)> {
        let mut best: Option<(Choice, u32)> = None;
        for &choice in candidates {
            let count = self.count(choice);
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((choice, count)),
            }
        }
        best
    }
}
