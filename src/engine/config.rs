//! Rule constants and signal timings

use std::time::Duration;

pub use crate::core::WORD_LEN;

/// Number of rows on the board
pub const MAX_GUESSES: usize = 6;

/// Accepting the guess on this row offers the power-up
pub const POWER_UP_TRIGGER_ROW: usize = 2;

/// Board row the power-up offer is shown beside
pub const POWER_UP_ROW: usize = POWER_UP_TRIGGER_ROW + 1;

/// How long transient signals stay visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub shake: Duration,
    pub toast: Duration,
}

impl Timings {
    #[must_use]
    pub const fn new(shake: Duration, toast: Duration) -> Self {
        Self { shake, toast }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            shake: Duration::from_millis(500),
            toast: Duration::from_secs(3),
        }
    }
}
