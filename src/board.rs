use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::ops::{Deref, DerefMut};

use crate::error::{BoardError, ReplayError};
use crate::location::{checked_total, Dimension, Position};
use crate::moves::{Move, MoveCatalog};
use crate::shape::{Step, TriangleStep};
use crate::solution::Outcome;
use crate::solver::SearchEngine;

/// The smallest board on which any jump exists.
pub const MIN_ROWS: usize = 3;

/// A triangular peg solitaire board.
///
/// The shape (number of rows) is fixed at construction; only which positions hold a peg changes.
/// Boards start full; clear the starting hole with [`Self::remove_start`] before searching.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    rows: Dimension,
    occupied: Vec<bool>,
}

impl Board {
    /// Create a board of `rows` rows with a peg in every position.
    ///
    /// Fails for fewer than [`MIN_ROWS`] rows, or for so many that the positions cannot be counted.
    pub fn create(rows: usize) -> Result<Self, BoardError> {
        let (dims, total) = match (NonZero::new(rows), checked_total(rows)) {
            (Some(dims), Some(total)) if rows >= MIN_ROWS => (dims, total),
            _ => return Err(BoardError::InvalidConfiguration { rows }),
        };

        Ok(Self {
            rows: dims,
            occupied: vec![true; total],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.get()
    }

    pub(crate) fn dims(&self) -> Dimension {
        self.rows
    }

    /// Number of positions on this board, occupied or not.
    pub fn total(&self) -> usize {
        self.occupied.len()
    }

    /// Clear the peg at the 1-based `position`, making the puzzle's starting hole.
    pub fn remove_start(&mut self, position: usize) -> Result<(), BoardError> {
        if !(1..=self.total()).contains(&position) {
            return Err(BoardError::OutOfRange { position, total: self.total() });
        }

        self.occupied[position - 1] = false;
        Ok(())
    }

    /// Number of pegs left on the board.
    pub fn active_count(&self) -> usize {
        self.occupied.iter().filter(|peg| **peg).count()
    }

    /// Whether the 0-based `position` holds a peg. Positions off the board are never occupied.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupied.get(position).copied().unwrap_or(false)
    }

    /// Occupancy of every position, indexed by 0-based [`Position`].
    pub fn occupancy(&self) -> &[bool] {
        &self.occupied
    }

    /// Whether `mv` can be played now: pegs at `from` and `over`, a hole at `to`.
    pub fn can_apply(&self, mv: &Move) -> bool {
        matches!(
            (self.occupied.get(mv.from), self.occupied.get(mv.over), self.occupied.get(mv.to)),
            (Some(true), Some(true), Some(false))
        )
    }

    /// Play `mv`, which must satisfy [`Self::can_apply`].
    pub fn apply(&mut self, mv: &Move) {
        debug_assert!(self.can_apply(mv));
        self.occupied[mv.from] = false;
        self.occupied[mv.over] = false;
        self.occupied[mv.to] = true;
    }

    /// Take back `mv`, which must have been the last move applied.
    pub fn undo(&mut self, mv: &Move) {
        self.occupied[mv.from] = true;
        self.occupied[mv.over] = true;
        self.occupied[mv.to] = false;
    }

    /// Play `mv` if it is legal, returning a guard which takes the move back when dropped.
    ///
    /// Call [`Jump::keep`] to leave the move on the board instead.
    pub fn play(&mut self, mv: Move) -> Option<Jump<'_>> {
        if !self.can_apply(&mv) {
            return None;
        }

        self.apply(&mv);
        Some(Jump { board: self, mv, kept: false })
    }

    /// Play `moves` in order on a copy of this board, checking that each one is a legal jump and that a single peg remains.
    ///
    /// Returns the final board.
    pub fn replay<'a>(&self, moves: impl IntoIterator<Item = &'a Move>) -> Result<Board, ReplayError> {
        let catalog = MoveCatalog::for_board(self);
        let mut board = self.clone();

        for (index, mv) in moves.into_iter().enumerate() {
            let step = index + 1;
            if [mv.from, mv.over, mv.to].iter().any(|position| *position >= board.total()) {
                return Err(ReplayError::PositionOutOfRange { step, mv: *mv });
            }

            if catalog.jump(mv.from, mv.to) != Some(*mv) {
                return Err(ReplayError::NotAJump { step, mv: *mv });
            }

            if !board.can_apply(mv) {
                return Err(ReplayError::Illegal { step, mv: *mv });
            }
            board.apply(mv);
        }

        match board.active_count() {
            1 => Ok(board),
            remaining => Err(ReplayError::NotReduced { remaining }),
        }
    }

    /// Solve this board in place, deferring to a [`SearchEngine`] over a freshly generated [`MoveCatalog`].
    ///
    /// See [`SearchEngine::solve`] for what happens to the board.
    pub fn solve(&mut self) -> Outcome {
        let catalog = MoveCatalog::for_board(self);
        SearchEngine::new(&catalog).solve(self)
    }

    /// Draw the board with the 1-based number of each position in place of its peg.
    pub fn numbered(&self) -> String {
        TriangleStep::print(TriangleStep::layout(self.rows).map(|slot| match slot {
            Some(position) => (position + 1).to_string(),
            None => String::new(),
        }))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", TriangleStep::print(TriangleStep::layout(self.rows).map(|slot| match slot {
            Some(position) if self.occupied[*position] => String::from('●'),
            Some(_) => String::from('○'),
            None => String::new(),
        })))
    }
}

/// A move held on a [`Board`] for as long as this guard lives.
///
/// Dropping the guard undoes the move; [`keep`](Self::keep) leaves it played.
/// The board stays reachable through [`Deref`] and [`DerefMut`] so the search can continue beneath the move.
pub struct Jump<'b> {
    board: &'b mut Board,
    mv: Move,
    kept: bool,
}

impl Jump<'_> {
    /// The move being held.
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Leave the move on the board.
    pub fn keep(mut self) {
        self.kept = true;
    }
}

impl Deref for Jump<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}

impl DerefMut for Jump<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.board
    }
}

impl Drop for Jump<'_> {
    fn drop(&mut self) {
        if !self.kept {
            self.board.undo(&self.mv);
        }
    }
}
