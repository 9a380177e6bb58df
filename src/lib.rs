//! Wordle+
//!
//! A Wordle game engine with a one-shot power-up, locked-out letters and a
//! live count of the answers still possible.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_plus::core::{Letter, Word};
//! use wordle_plus::engine::{Event, GameState, Transition};
//! use wordle_plus::wordlists::WordList;
//!
//! let mut game = GameState::with_solution(WordList::embedded(), Word::new("crane").unwrap());
//!
//! for c in "slate".chars() {
//!     game.apply(Event::Letter(Letter::from_char(c).unwrap()));
//! }
//! let transition = game.apply(Event::Submit);
//!
//! assert!(matches!(transition, Transition::Accepted { row: 0, .. }));
//! println!("{}", game.rows()[0].as_ref().unwrap().feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
