use thiserror::Error;

use crate::square::Square;

/// Errors returned by board operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Linear piece identifier outside 1-12.
    #[error("invalid piece identifier: {0}")]
    InvalidPiece(u8),

    /// Square with a file or rank outside 1-8.
    #[error("invalid square: {0}")]
    InvalidSquare(Square),

    /// Move attempted from an out-of-range origin square.
    #[error("invalid origin square: {0}")]
    InvalidOrigin(Square),

    /// Move attempted to an out-of-range target square.
    #[error("invalid target square: {0}")]
    InvalidTarget(Square),

    /// Move attempted from a square with no piece on it.
    #[error("origin square {0} is empty")]
    EmptyOrigin(Square),
}
