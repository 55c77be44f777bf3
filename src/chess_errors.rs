//! Errors used throughout the chess engine.
//!
//! `EngineError` is the single error type of the crate. Its variants fall into
//! two groups:
//! - contract violations (wrong piece handed to a generator, an empty start
//!   square, a king capture or removal, out-of-range coordinates). These are
//!   bugs in the caller and must never be papered over with an empty move list,
//!   which would look like a legitimate "no legal moves" terminal position.
//! - input errors from the parsing helpers (algebraic strings, FEN), which a
//!   front end may present to a user.
//!
//! Having no legal moves is not an error; search reports it as `None`.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinates outside `0..8` were supplied.
    #[error("square ({row}, {col}) is outside the board")]
    SquareOutOfBounds { row: u8, col: u8 },

    /// A move was applied from a square holding no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// A piece-specific generator was invoked on the wrong piece.
    #[error("expected a {expected:?} on {square}, found {found:?}")]
    WrongPieceKind {
        square: Square,
        expected: PieceKind,
        found: Option<PieceKind>,
    },

    /// Kings never leave the board, neither by capture nor by setup edits.
    #[error("the king on {0} cannot be captured or removed")]
    KingNotRemovable(Square),

    /// Setup tried to place a piece on an occupied square.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// Setup tried to place a second king of one color.
    #[error("{0:?} already has a king on the board")]
    DuplicateKing(Color),

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A parallel search worker panicked before reporting.
    #[error("search worker thread panicked")]
    WorkerPanicked,
}

pub type EngineResult<T> = Result<T, EngineError>;
