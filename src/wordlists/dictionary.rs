//! The dictionary collaborator the engine reads from
//!
//! The engine never owns word data. It asks a [`Dictionary`] whether a guess is
//! acceptable, for a random solution, and for the full answer pool.

use crate::core::Word;
use rand::RngCore;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};

/// Read-only word source for a game
pub trait Dictionary {
    /// Case-insensitive membership in the acceptable-guess list
    fn is_valid_guess(&self, word: &str) -> bool;

    /// A uniformly chosen answer, or `None` if the pool is empty
    fn random_answer(&self, rng: &mut dyn RngCore) -> Option<Word>;

    /// Every answer in a stable order
    fn all_answers(&self) -> &[Word];
}

/// In-memory dictionary: an answer pool plus a set of acceptable guesses
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    valid: FxHashSet<String>,
}

impl WordList {
    /// Build from an answer pool and a list of acceptable guesses
    ///
    /// Every answer is accepted as a guess even if `allowed` omits it.
    #[must_use]
    pub fn new(answers: Vec<Word>, allowed: &[Word]) -> Self {
        let valid = allowed
            .iter()
            .chain(answers.iter())
            .map(Word::lowercase)
            .collect();

        Self { answers, valid }
    }

    /// The lists compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use wordle_plus::wordlists::{Dictionary, WordList};
    ///
    /// let dictionary = WordList::embedded();
    /// assert!(dictionary.is_valid_guess("CRANE"));
    /// assert!(!dictionary.is_valid_guess("zzzzz"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), &words_from_slice(ALLOWED))
    }

    /// Number of distinct acceptable guesses
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }
}

impl Dictionary for WordList {
    fn is_valid_guess(&self, word: &str) -> bool {
        self.valid.contains(&word.to_ascii_lowercase())
    }

    fn random_answer(&self, rng: &mut dyn RngCore) -> Option<Word> {
        self.answers.choose(rng).cloned()
    }

    fn all_answers(&self) -> &[Word] {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_list() -> WordList {
        WordList::new(
            words_from_slice(&["crane", "slate"]),
            &words_from_slice(&["crate", "trace"]),
        )
    }

    #[test]
    fn answers_are_valid_guesses() {
        let list = small_list();
        assert!(list.is_valid_guess("crane"));
        assert!(list.is_valid_guess("crate"));
        assert_eq!(list.valid_count(), 4);
    }

    #[test]
    fn validity_is_case_insensitive() {
        let list = small_list();
        assert!(list.is_valid_guess("CRATE"));
        assert!(list.is_valid_guess("TrAcE"));
        assert!(!list.is_valid_guess("zzzzz"));
    }

    #[test]
    fn random_answer_comes_from_pool() {
        let list = small_list();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let answer = list.random_answer(&mut rng).unwrap();
            assert!(list.all_answers().contains(&answer));
            assert_eq!(answer.text(), answer.text().to_uppercase());
        }
    }

    #[test]
    fn random_answer_from_empty_pool() {
        let list = WordList::new(Vec::new(), &[]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(list.random_answer(&mut rng).is_none());
    }

    #[test]
    fn all_answers_keeps_order() {
        let list = small_list();
        let texts: Vec<&str> = list.all_answers().iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE"]);
    }
}
