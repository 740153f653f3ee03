use crate::types::Color;

/// Errors returned by the rules engine.
///
/// Every variant is recoverable: the caller decides whether to re-prompt,
/// pass, or end the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OthelloError {
    #[error("board dimensions {rows}x{cols} are invalid: rows and cols must be even integers between 4 and 16")]
    Dimension { rows: usize, cols: usize },

    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    #[error("position ({row}, {col}) is already occupied")]
    NotEmpty { row: u8, col: u8 },

    #[error("placing at ({row}, {col}) captures nothing")]
    NoCapture { row: u8, col: u8 },

    #[error("{color} has no legal move")]
    NoLegalMove { color: Color },

    #[error("{color} has a legal move and cannot pass")]
    PassNotAllowed { color: Color },

    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, OthelloError>;
