//! Validating and scoring a submitted guess
//!
//! Everything here is a pure function of its inputs; `GameState` decides when
//! to commit the results.

use super::config::{MAX_GUESSES, POWER_UP_TRIGGER_ROW, WORD_LEN};
use super::error::GuessError;
use super::input::InputEditor;
use super::letters::LetterStateTracker;
use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;

/// What an accepted guess does to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Won,
    Lost,
    /// Move to the next row; `offer_power_up` is set when this row unlocks it
    Advance { offer_power_up: bool },
}

/// A guess that passed validation, with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Check the assembled guess and classify it against the solution
///
/// Validation runs in order: the guess (locked letter merged in) must be
/// exactly five letters, then its lowercase form must be an acceptable guess.
///
/// # Errors
///
/// Returns `GuessError::InvalidLength` or `GuessError::NotInDictionary`.
///
/// # Examples
/// ```
/// use wordle_plus::engine::{InputEditor, LetterStateTracker, processor};
/// use wordle_plus::core::{Letter, Word};
/// use wordle_plus::wordlists::{WordList, loader::words_from_slice};
///
/// let dictionary = WordList::new(words_from_slice(&["crane", "crate"]), &[]);
/// let solution = Word::new("crane").unwrap();
/// let letters = LetterStateTracker::new();
///
/// let mut editor = InputEditor::default();
/// for c in "CRATE".chars() {
///     editor.append(Letter::from_char(c).unwrap(), &letters);
/// }
///
/// let evaluation = processor::evaluate(&editor, &solution, &dictionary).unwrap();
/// assert_eq!(evaluation.feedback.to_emoji(), "🟩🟩🟩⬜🟩");
/// ```
pub fn evaluate<D: Dictionary + ?Sized>(
    editor: &InputEditor,
    solution: &Word,
    dictionary: &D,
) -> Result<Evaluation, GuessError> {
    let candidate = editor.assemble();
    let length = candidate.chars().count();

    if length != WORD_LEN {
        return Err(GuessError::InvalidLength(length));
    }

    if !dictionary.is_valid_guess(&candidate.to_ascii_lowercase()) {
        return Err(GuessError::NotInDictionary(candidate));
    }

    let Ok(guess) = Word::new(&candidate) else {
        return Err(GuessError::NotInDictionary(candidate));
    };
    let feedback = Feedback::calculate(&guess, solution);

    Ok(Evaluation { guess, feedback })
}

/// Tracker state after folding in one evaluated guess
///
/// Works on a copy so the caller's tracker is untouched until it commits.
#[must_use]
pub fn fold_feedback(letters: &LetterStateTracker, evaluation: &Evaluation) -> LetterStateTracker {
    let mut next = letters.clone();
    for (letter, &classification) in evaluation
        .guess
        .letters()
        .iter()
        .zip(evaluation.feedback.tiles())
    {
        next.record(*letter, classification);
    }
    next
}

/// Decide where the game goes after accepting a guess on `row`
#[must_use]
pub fn row_outcome(guess: &Word, solution: &Word, row: usize, power_up_used: bool) -> RowOutcome {
    if guess.text().eq_ignore_ascii_case(solution.text()) {
        RowOutcome::Won
    } else if row + 1 >= MAX_GUESSES {
        RowOutcome::Lost
    } else {
        RowOutcome::Advance {
            offer_power_up: row == POWER_UP_TRIGGER_ROW && !power_up_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::engine::input::LockedPosition;
    use crate::engine::letters::LetterState;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn dictionary() -> WordList {
        WordList::new(
            words_from_slice(&["crane"]),
            &words_from_slice(&["crate", "eerie", "slate"]),
        )
    }

    fn editor_with(word: &str) -> InputEditor {
        let letters = LetterStateTracker::new();
        let mut editor = InputEditor::default();
        for c in word.chars() {
            editor.append(letter(c), &letters);
        }
        editor
    }

    fn crane() -> Word {
        Word::new("crane").unwrap()
    }

    #[test]
    fn short_guess_is_invalid_length() {
        let result = evaluate(&editor_with("AB"), &crane(), &dictionary());
        assert_eq!(result, Err(GuessError::InvalidLength(2)));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let result = evaluate(&editor_with("ZZZZZ"), &crane(), &dictionary());
        assert_eq!(
            result,
            Err(GuessError::NotInDictionary("ZZZZZ".to_string()))
        );
    }

    #[test]
    fn length_is_checked_before_dictionary() {
        let result = evaluate(&editor_with("ZZZ"), &crane(), &dictionary());
        assert!(matches!(result, Err(GuessError::InvalidLength(3))));
    }

    #[test]
    fn locked_letter_is_merged_before_validation() {
        let letters = LetterStateTracker::new();
        let mut editor = InputEditor::new(Some(LockedPosition {
            index: 0,
            letter: letter('C'),
        }));
        for c in "RATE".chars() {
            editor.append(letter(c), &letters);
        }

        let evaluation = evaluate(&editor, &crane(), &dictionary()).unwrap();
        assert_eq!(evaluation.guess.text(), "CRATE");
    }

    #[test]
    fn fold_feedback_locks_absent_letters() {
        let evaluation = evaluate(&editor_with("CRATE"), &crane(), &dictionary()).unwrap();
        let before = LetterStateTracker::new();
        let after = fold_feedback(&before, &evaluation);

        for c in ['C', 'R', 'A', 'E'] {
            assert_eq!(after.state(letter(c)), LetterState::Correct);
        }
        assert!(after.is_locked(letter('T')));
        assert_eq!(after.locked_count(), 1);

        // The input tracker is not touched
        assert_eq!(before, LetterStateTracker::new());
    }

    #[test]
    fn fold_feedback_keeps_correct_over_present() {
        let mut letters = LetterStateTracker::new();
        letters.upgrade(letter('E'), LetterState::Correct);

        // EERIE vs CRANE: the leading E tiles are present
        let evaluation = evaluate(&editor_with("EERIE"), &crane(), &dictionary()).unwrap();
        let after = fold_feedback(&letters, &evaluation);

        assert_eq!(after.state(letter('E')), LetterState::Correct);
        assert_eq!(after.state(letter('R')), LetterState::Present);
        assert!(after.is_locked(letter('I')));
    }

    #[test]
    fn outcome_won_on_any_row() {
        for row in 0..MAX_GUESSES {
            assert_eq!(row_outcome(&crane(), &crane(), row, false), RowOutcome::Won);
        }
    }

    #[test]
    fn outcome_lost_on_last_row() {
        let guess = Word::new("slate").unwrap();
        assert_eq!(row_outcome(&guess, &crane(), 5, false), RowOutcome::Lost);
    }

    #[test]
    fn outcome_offers_power_up_after_third_guess() {
        let guess = Word::new("slate").unwrap();
        assert_eq!(
            row_outcome(&guess, &crane(), 2, false),
            RowOutcome::Advance {
                offer_power_up: true
            }
        );
        assert_eq!(
            row_outcome(&guess, &crane(), 2, true),
            RowOutcome::Advance {
                offer_power_up: false
            }
        );
        assert_eq!(
            row_outcome(&guess, &crane(), 1, false),
            RowOutcome::Advance {
                offer_power_up: false
            }
        );
    }
}
