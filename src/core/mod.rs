//! Core domain types for the game
//!
//! Pure value types with no I/O: letters, words and per-tile feedback.

mod feedback;
mod letter;
mod word;

pub use feedback::{Classification, Feedback};
pub use letter::{ALPHABET_LEN, Letter};
pub use word::{WORD_LEN, Word, WordError};
