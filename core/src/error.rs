use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Network failure: {0}")]
    NetworkFailure(String),
    #[error("Request timed out after {millis} ms")]
    Timeout { millis: u32 },
    #[error("Unexpected response from trivia service: {0}")]
    InvalidResponse(String),
    #[error("Not enough categories: {available} available, {required} required")]
    InsufficientCategories { available: usize, required: usize },
    #[error("Not enough clues in {category:?}: {available} available, {required} required")]
    InsufficientClues {
        category: String,
        available: usize,
        required: usize,
    },
    #[error("Board already holds every category")]
    BoardFull,
    #[error("Category has {actual} clues, board expects {expected}")]
    CategoryShape { expected: usize, actual: usize },
}

impl GameError {
    /// Fetch rejected, timed out or answered with garbage.
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::NetworkFailure(_) | Self::Timeout { .. } | Self::InvalidResponse(_)
        )
    }

    /// The service answered, but with too little to fill the board.
    pub const fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            Self::InsufficientCategories { .. } | Self::InsufficientClues { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
