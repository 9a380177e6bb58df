//! Formatting utilities for terminal output

use crate::core::{Classification, Letter};
use crate::engine::{GuessRow, Tile};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Letters of a keyboard row
pub fn keyboard_row(row: &str) -> impl Iterator<Item = Letter> + '_ {
    row.chars().filter_map(Letter::from_char)
}

/// Color a board tile or key by its classification
#[must_use]
pub fn colored_cell(text: &str, classification: Option<Classification>) -> ColoredString {
    match classification {
        Some(Classification::Correct) => text.black().on_green().bold(),
        Some(Classification::Present) => text.black().on_yellow().bold(),
        Some(Classification::Absent) => text.white().on_bright_black(),
        None => text.bright_white().bold(),
    }
}

/// One tile padded to three columns, `·` for an empty cell
#[must_use]
pub fn tile_text(tile: &Tile) -> String {
    match tile.letter {
        Some(letter) => format!(" {letter} "),
        None => " · ".to_string(),
    }
}

/// Emoji grid of the committed rows, one line per row
#[must_use]
pub fn share_grid(rows: &[Option<GuessRow>]) -> String {
    rows.iter()
        .flatten()
        .map(|row| row.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "try" or "tries"
#[must_use]
pub const fn tries(count: usize) -> &'static str {
    if count == 1 { "try" } else { "tries" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    #[test]
    fn keyboard_covers_alphabet_once() {
        let mut letters: Vec<Letter> = KEYBOARD_ROWS.iter().flat_map(|r| keyboard_row(r)).collect();
        letters.sort();
        assert_eq!(letters, Letter::ALL.to_vec());
    }

    #[test]
    fn tile_text_pads_letters() {
        let tile = Tile {
            letter: Letter::from_char('c'),
            classification: None,
        };
        assert_eq!(tile_text(&tile), " C ");
        assert_eq!(tile_text(&Tile::default()), " · ");
    }

    #[test]
    fn share_grid_skips_empty_rows() {
        let solution = Word::new("crane").unwrap();
        let guess = Word::new("crate").unwrap();
        let rows = [
            Some(GuessRow {
                feedback: Feedback::calculate(&guess, &solution),
                guess,
            }),
            Some(GuessRow {
                guess: solution.clone(),
                feedback: Feedback::PERFECT,
            }),
            None,
        ];
        assert_eq!(share_grid(&rows), "🟩🟩🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn tries_pluralizes() {
        assert_eq!(tries(1), "try");
        assert_eq!(tries(4), "tries");
    }
}
