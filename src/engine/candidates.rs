//! Remaining-candidate estimate
//!
//! Counts answers that avoid every locked letter. Present/correct constraints
//! are deliberately not applied, so this is a coarse upper estimate rather
//! than a consistency filter.

use crate::core::{Letter, Word};
use rayon::prelude::*;

/// Bitmask with bit `i` set for the `i`th letter of the alphabet
fn mask_of(letters: impl IntoIterator<Item = Letter>) -> u32 {
    letters
        .into_iter()
        .fold(0, |mask, letter| mask | (1 << letter.index()))
}

/// Number of pool entries containing none of the `locked` letters
///
/// # Examples
/// ```
/// use wordle_plus::core::Letter;
/// use wordle_plus::engine::count_candidates;
/// use wordle_plus::wordlists::loader::words_from_slice;
///
/// let pool = words_from_slice(&["crane", "slate", "pious"]);
/// let t = Letter::from_char('t').unwrap();
/// assert_eq!(count_candidates(&pool, &[t]), 2);
/// ```
#[must_use]
pub fn count_candidates(pool: &[Word], locked: &[Letter]) -> usize {
    let locked = mask_of(locked.iter().copied());
    pool.par_iter()
        .filter(|word| mask_of(word.letters().iter().copied()) & locked == 0)
        .count()
}

/// Answer pool with per-word letter masks computed once per game
#[derive(Debug, Clone, Default)]
pub struct CandidateCounter {
    masks: Vec<u32>,
}

impl CandidateCounter {
    #[must_use]
    pub fn new(pool: &[Word]) -> Self {
        let masks = pool
            .par_iter()
            .map(|word| mask_of(word.letters().iter().copied()))
            .collect();
        Self { masks }
    }

    /// Size of the full pool, the count before anything is locked
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.masks.len()
    }

    /// Same result as [`count_candidates`] over the pool this was built from
    #[must_use]
    pub fn count(&self, locked: impl IntoIterator<Item = Letter>) -> usize {
        let locked = mask_of(locked);
        if locked == 0 {
            return self.masks.len();
        }
        self.masks
            .par_iter()
            .filter(|&&mask| mask & locked == 0)
            .count()
    }
}
