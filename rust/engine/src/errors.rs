use thiserror::Error;

use crate::player::Side;

#[derive(Debug, Error)]
pub enum WarError {
    #[error("Failed to open input deck {path}: {reason}")]
    File { path: String, reason: String },
    #[error("Empty or invalid CSV deck: no cards found")]
    EmptyInput,
    #[error("Malformed CSV input at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
    #[error("Invalid card {token:?}: rank must be an integer from 1 to 13 or the suit must be Joker")]
    Parse { token: String },
    #[error("Player {side} has no cards to play")]
    InsufficientCards { side: Side },
    #[error("Failed to write narration: {0}")]
    Io(#[from] std::io::Error),
}

impl WarError {
    /// True for errors caused by the input file rather than by the engine or its sinks.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            WarError::File { .. }
                | WarError::EmptyInput
                | WarError::MalformedRow { .. }
                | WarError::Parse { .. }
        )
    }
}
