//! Per-tile feedback for a committed guess
//!
//! Each position is classified independently against the solution in a single
//! left-to-right pass:
//! - `Correct` when the guess letter matches the solution letter at that position
//! - `Present` when the solution contains the letter anywhere else
//! - `Absent` otherwise
//!
//! Letter multiplicities are not reserved, so a guess with a repeated letter can
//! show more `Present` tiles than the solution has copies of that letter.

use super::{WORD_LEN, Word};

/// Feedback value for one letter
///
/// Ordered so that a better classification compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Absent,
    Present,
    Correct,
}

impl Classification {
    /// Emoji tile for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Classification of all five tiles of a committed row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LEN]);

impl Feedback {
    /// All tiles correct
    pub const PERFECT: Self = Self([Classification::Correct; WORD_LEN]);

    /// Classify `guess` against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordle_plus::core::{Classification, Feedback, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let solution = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &solution);
    ///
    /// assert_eq!(feedback.tile(3), Classification::Absent);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut tiles = [Classification::Absent; WORD_LEN];

        for (i, tile) in tiles.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            *tile = if solution.letter_at(i) == letter {
                Classification::Correct
            } else if solution.contains(letter) {
                Classification::Present
            } else {
                Classification::Absent
            };
        }

        Self(tiles)
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Classification; WORD_LEN] {
        &self.0
    }

    /// Classification at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn tile(&self, position: usize) -> Classification {
        self.0[position]
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        self.0.iter().filter(|&&c| c == classification).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}
