//! Error types for the decision core.

use std::fmt;

/// Errors surfaced to callers of the crate.
///
/// Running out of time is not one of them: the searcher absorbs it and
/// still produces a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// FEN string rejected by the rules engine
    InvalidFen { fen: String },
    /// Move string that is not a legal move in the current position
    IllegalMove { notation: String },
    /// A move was requested for a position with no legal moves
    NoLegalMoves,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFen { fen } => write!(f, "Invalid FEN '{fen}'"),
            Error::IllegalMove { notation } => write!(f, "Illegal move '{notation}'"),
            Error::NoLegalMoves => write!(f, "Position has no legal moves"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
