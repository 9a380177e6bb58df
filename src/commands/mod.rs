//! Command implementations

pub mod simple;

pub use simple::{Command, guess_events, parse_command, run_simple};
