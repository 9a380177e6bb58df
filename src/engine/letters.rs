//! Per-letter knowledge accumulated over a game
//!
//! Two monotone facts are tracked for each of the 26 letters: the best
//! classification seen so far, and whether the letter is locked out of input.
//! Neither ever moves backwards within a game.

use crate::core::{ALPHABET_LEN, Classification, Letter};

/// Best known classification of a letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    #[default]
    Unset,
    Present,
    Correct,
}

/// What the keyboard shows for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyView {
    pub letter: Letter,
    /// `None` until the letter has been classified
    pub classification: Option<Classification>,
    pub locked: bool,
}

/// Aggregated letter feedback and the locked-letter set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStateTracker {
    states: [LetterState; ALPHABET_LEN],
    locked: [bool; ALPHABET_LEN],
}

impl LetterStateTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn state(&self, letter: Letter) -> LetterState {
        self.states[letter.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_locked(&self, letter: Letter) -> bool {
        self.locked[letter.index()]
    }

    /// A letter counts as classified once it is present, correct or locked out
    #[must_use]
    pub fn is_classified(&self, letter: Letter) -> bool {
        self.is_locked(letter) || self.state(letter) != LetterState::Unset
    }

    /// Raise a letter's state; lower states are ignored
    ///
    /// Returns true if the state changed.
    pub fn upgrade(&mut self, letter: Letter, state: LetterState) -> bool {
        let slot = &mut self.states[letter.index()];
        if state > *slot {
            *slot = state;
            true
        } else {
            false
        }
    }

    /// Lock a letter out of further input
    ///
    /// Returns true if the letter was not locked before.
    pub fn lock(&mut self, letter: Letter) -> bool {
        !std::mem::replace(&mut self.locked[letter.index()], true)
    }

    /// Fold one tile's feedback into the tracker
    pub fn record(&mut self, letter: Letter, classification: Classification) {
        match classification {
            Classification::Correct => {
                self.upgrade(letter, LetterState::Correct);
            }
            Classification::Present => {
                self.upgrade(letter, LetterState::Present);
            }
            Classification::Absent => {
                self.lock(letter);
            }
        }
    }

    /// Locked letters in alphabetical order
    pub fn locked_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::alphabet().filter(|&l| self.is_locked(l))
    }

    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.locked.iter().filter(|&&locked| locked).count()
    }

    /// Keyboard view of a single letter
    #[must_use]
    pub fn key(&self, letter: Letter) -> KeyView {
        let classification = if self.is_locked(letter) {
            Some(Classification::Absent)
        } else {
            match self.state(letter) {
                LetterState::Unset => None,
                LetterState::Present => Some(Classification::Present),
                LetterState::Correct => Some(Classification::Correct),
            }
        };

        KeyView {
            letter,
            classification,
            locked: self.is_locked(letter),
        }
    }

    /// Keyboard view of all 26 letters in alphabetical order
    #[must_use]
    pub fn keyboard(&self) -> [KeyView; ALPHABET_LEN] {
        Letter::ALL.map(|letter| self.key(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn new_tracker_is_blank() {
        let tracker = LetterStateTracker::new();
        for l in Letter::alphabet() {
            assert_eq!(tracker.state(l), LetterState::Unset);
            assert!(!tracker.is_locked(l));
            assert!(!tracker.is_classified(l));
        }
    }

    #[test]
    fn upgrade_never_regresses() {
        let mut tracker = LetterStateTracker::new();
        let a = letter('A');

        assert!(tracker.upgrade(a, LetterState::Present));
        assert!(tracker.upgrade(a, LetterState::Correct));
        assert!(!tracker.upgrade(a, LetterState::Present));
        assert!(!tracker.upgrade(a, LetterState::Unset));
        assert_eq!(tracker.state(a), LetterState::Correct);
    }

    #[test]
    fn lock_is_monotone() {
        let mut tracker = LetterStateTracker::new();
        assert!(tracker.lock(letter('T')));
        assert!(!tracker.lock(letter('T')));
        assert_eq!(tracker.locked_count(), 1);
        assert!(tracker.is_classified(letter('T')));
    }

    #[test]
    fn record_routes_absent_to_lock() {
        let mut tracker = LetterStateTracker::new();
        tracker.record(letter('T'), Classification::Absent);
        tracker.record(letter('R'), Classification::Present);

        assert!(tracker.is_locked(letter('T')));
        assert_eq!(tracker.state(letter('T')), LetterState::Unset);
        assert_eq!(tracker.state(letter('R')), LetterState::Present);
    }

    #[test]
    fn keyboard_shows_locked_as_absent() {
        let mut tracker = LetterStateTracker::new();
        tracker.lock(letter('Q'));
        tracker.upgrade(letter('E'), LetterState::Correct);

        let keys = tracker.keyboard();
        let q = keys[letter('Q').index()];
        assert_eq!(q.classification, Some(Classification::Absent));
        assert!(q.locked);

        let e = keys[letter('E').index()];
        assert_eq!(e.classification, Some(Classification::Correct));
        assert!(!e.locked);

        assert_eq!(keys[letter('Z').index()].classification, None);
    }

    #[test]
    fn locked_letters_are_alphabetical() {
        let mut tracker = LetterStateTracker::new();
        for c in ['Z', 'B', 'M'] {
            tracker.lock(letter(c));
        }
        let locked: String = tracker.locked_letters().map(Letter::as_char).collect();
        assert_eq!(locked, "BMZ");
    }
}
