//! A single uppercase letter of the game alphabet

use std::fmt;

/// Number of letters in the game alphabet
pub const ALPHABET_LEN: usize = 26;

/// One of the 26 letters `A`–`Z`
///
/// Stored as its uppercase ASCII byte so it can index per-letter tables
/// through [`Letter::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// `A` through `Z`
    pub const ALL: [Self; ALPHABET_LEN] = {
        let mut all = [Self(b'A'); ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Build a letter from any ASCII alphabetic char, normalizing case
    ///
    /// # Examples
    /// ```
    /// use wordle_plus::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q'), Letter::from_char('Q'));
    /// assert!(Letter::from_char('1').is_none());
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self(c.to_ascii_uppercase() as u8))
    }

    /// Build a letter from a byte, normalizing case
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii_alphabetic() {
            Some(Self(b.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Letter at alphabet position `index` (0 = `A`)
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Alphabet position, 0 for `A` through 25 for `Z`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_case() {
        let lower = Letter::from_char('c').unwrap();
        let upper = Letter::from_char('C').unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.as_char(), 'C');
    }

    #[test]
    fn letter_rejects_non_alphabetic() {
        assert!(Letter::from_char('3').is_none());
        assert!(Letter::from_char(' ').is_none());
        assert!(Letter::from_char('é').is_none());
        assert!(Letter::from_byte(b'!').is_none());
    }

    #[test]
    fn letter_index_round_trips() {
        for (i, letter) in Letter::alphabet().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), Some(letter));
        }
        assert!(Letter::from_index(ALPHABET_LEN).is_none());
    }

    #[test]
    fn alphabet_is_ordered() {
        let letters: String = Letter::alphabet().map(Letter::as_char).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
