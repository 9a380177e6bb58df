//! Engine error taxonomy

/// Why a submitted guess was rejected
///
/// Rejection never changes game state; the row only shakes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Guess must be 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),
}

/// Failures setting up a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("answer pool is empty, no solution can be drawn")]
    EmptyAnswerPool,
}
