//! Interactive TUI
//!
//! Maps key presses to engine events and draws the game with ratatui.

pub mod app;
mod rendering;

pub use app::{App, Statistics, run_tui};
