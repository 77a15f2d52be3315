use thiserror::Error;

use crate::moves::Move;

/// Reasons a [`Board`](crate::Board) may refuse to be built or prepared.
///
/// Both are detected before the board is touched.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum BoardError {
    /// Fewer than [`MIN_ROWS`](crate::board::MIN_ROWS) rows were requested, or too many to count the positions.
    #[error("cannot build a triangular board of {rows} rows, expected at least 3")]
    InvalidConfiguration {
        /// The rejected row count.
        rows: usize,
    },
    /// A starting hole outside `1..=total` was requested.
    #[error("position {position} is out of range, expected 1-{total}")]
    OutOfRange {
        /// The rejected 1-based position.
        position: usize,
        /// Number of positions on the board.
        total: usize,
    },
}

/// Reasons a move sequence fails [`Board::replay`](crate::Board::replay).
///
/// `step` is 1-based, matching how solutions are printed.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReplayError {
    /// A move names a position that is not on the board.
    #[error("step {step}: {mv} leaves the board")]
    PositionOutOfRange {
        /// Step number.
        step: usize,
        /// The offending move.
        mv: Move,
    },
    /// A move is not a straight jump over an adjacent cell.
    #[error("step {step}: {mv} is not a jump")]
    NotAJump {
        /// Step number.
        step: usize,
        /// The offending move.
        mv: Move,
    },
    /// A move's pegs and hole were not in place when it was played.
    #[error("step {step}: {mv} is not legal here")]
    Illegal {
        /// Step number.
        step: usize,
        /// The offending move.
        mv: Move,
    },
    /// Every move was legal but more than one peg is left.
    #[error("{remaining} pegs remain after the last move")]
    NotReduced {
        /// Pegs left on the board.
        remaining: usize,
    },
}

