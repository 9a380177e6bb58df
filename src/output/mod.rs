//! Terminal output formatting
//!
//! Colored rendering of the board and keyboard for the line-mode front end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_counter, print_game_over, print_keyboard, print_power_ups};
