//! Five-letter word representation
//!
//! A `Word` is a validated 5-letter word kept uppercase, the form the board and
//! solution use. Dictionary lookups go through [`Word::lowercase`].

use super::Letter;
use std::fmt;

/// Length of every guess and solution
pub const WORD_LEN: usize = 5;

/// A validated 5-letter word, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_plus::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        let letters = text
            .bytes()
            .map(|b| Letter::from_byte(b).ok_or(WordError::InvalidCharacters))
            .collect::<Result<Vec<_>, _>>()?;

        let letters: [Letter; WORD_LEN] = letters
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self::from_letters(letters))
    }

    /// Build a word from five letters
    #[must_use]
    pub fn from_letters(letters: [Letter; WORD_LEN]) -> Self {
        let text = letters.iter().map(|l| l.as_char()).collect();
        Self { text, letters }
    }

    /// The word in uppercase
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word in lowercase, the form word lists store
    #[must_use]
    pub fn lowercase(&self) -> String {
        self.text.to_ascii_lowercase()
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LEN] {
        &self.letters
    }

    /// Letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters in order of first appearance
    #[must_use]
    pub fn unique_letters(&self) -> Vec<Letter> {
        let mut seen = Vec::with_capacity(WORD_LEN);
        for &letter in &self.letters {
            if !seen.contains(&letter) {
                seen.push(letter);
            }
        }
        seen
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
