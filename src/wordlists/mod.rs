//! Word lists for the game
//!
//! Embedded lists compiled into the binary, a loader for custom lists, and the
//! [`Dictionary`] the engine reads from.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, WordList};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn lists_are_lowercase_five_letter_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn answer_pool_is_not_empty() {
        const { assert!(ANSWERS_COUNT > 0 && ALLOWED_COUNT >= ANSWERS_COUNT) };
        assert!(!WordList::embedded().all_answers().is_empty());
    }
}
