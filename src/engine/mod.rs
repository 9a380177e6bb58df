//! The game-state engine
//!
//! Guess editing and submission, per-letter feedback tracking, the one-shot
//! power-up and the remaining-candidate counter, tied together by
//! [`GameState`]. Front ends feed it [`Event`]s and read its state back.

mod candidates;
pub mod config;
mod error;
mod game;
mod input;
mod letters;
pub mod powerup;
pub mod processor;
mod signals;

pub use candidates::{CandidateCounter, count_candidates};
pub use config::Timings;
pub use error::{EngineError, GuessError};
pub use game::{Event, GameState, GameStatus, GuessRow, Tile, Transition};
pub use input::{InputEditor, LockedPosition};
pub use letters::{KeyView, LetterState, LetterStateTracker};
pub use powerup::{PowerUp, PowerUpState};
pub use processor::RowOutcome;
pub use signals::{SignalSlot, SignalToken, Signals};
