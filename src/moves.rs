use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::location::{Dimension, Location, Position};
use crate::shape::{Step, TriangleStep};

/// A jump: the peg at `from` leaps over the peg at `over` into the hole at `to`, removing the peg at `over`.
///
/// Moves are geometric facts about a board shape and carry no occupancy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Move {
    /// Position the jumping peg starts from.
    pub from: Position,
    /// Position of the peg that is jumped and removed.
    pub over: Position,
    /// Position the jumping peg lands in.
    pub to: Position,
}

impl Move {
    /// Construct a move from its three positions.
    pub const fn new(from: Position, over: Position, to: Position) -> Self {
        Self { from, over, to }
    }

    /// The same line played in the opposite direction.
    pub const fn reverse(&self) -> Self {
        Self { from: self.to, over: self.over, to: self.from }
    }

    /// The endpoints of this move regardless of direction.
    pub fn line(&self) -> UnorderedPair<Position> {
        UnorderedPair::from((self.from, self.to))
    }
}

// 1-based, as positions are numbered for players
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} -> {}", self.from + 1, self.over + 1, self.to + 1)
    }
}

/// Every geometrically possible forward jump on a board of a given number of rows.
///
/// Only jumps in the [`FORWARD_VARIANTS`](Step::FORWARD_VARIANTS) directions are stored;
/// the backward jump along the same line is its [`reverse`](Move::reverse) and is produced on the fly by [`Self::candidates`].
/// A catalog never changes after [`generate`](Self::generate) and may be shared freely between searches.
#[derive(Clone, Debug)]
pub struct MoveCatalog {
    rows: Dimension,
    moves: Vec<Move>,
    // endpoints -> jumped position
    lines: HashMap<UnorderedPair<Position>, Position>,
}

impl MoveCatalog {
    /// Build the catalog for a board of `rows` rows.
    ///
    /// Cells are scanned row-major; for each cell the forward directions are tried in order, i.e. rightward, then straight down, then down-right.
    /// This order decides which solution a search reports first.
    pub fn generate(rows: Dimension) -> Self {
        let moves = (0..rows.get())
            .flat_map(|row| (0..=row).map(move |col| Location(row, col)))
            .cartesian_product(TriangleStep::FORWARD_VARIANTS)
            .filter_map(|(origin, direction)| {
                let over = direction.attempt_from(origin);
                let to = direction.attempt_from(over);
                to.is_within(rows).then(|| Move::new(origin.position(), over.position(), to.position()))
            })
            .collect_vec();

        let lines = moves.iter().map(|mv| (mv.line(), mv.over)).collect();

        Self { rows, moves, lines }
    }

    /// Build the catalog matching the shape of `board`.
    pub fn for_board(board: &Board) -> Self {
        Self::generate(board.dims())
    }

    /// Number of rows of the board shape this catalog was generated for.
    pub fn rows(&self) -> usize {
        self.rows.get()
    }

    /// The stored forward moves, in catalog order.
    pub fn forward(&self) -> &[Move] {
        &self.moves
    }

    /// Number of stored forward moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the shape admits no jumps at all.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Every jump shape in search order: each forward move immediately followed by its reverse.
    pub fn candidates(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().flat_map(|mv| [*mv, mv.reverse()])
    }

    /// The candidates currently legal on `board`, in search order.
    pub fn legal_moves<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = Move> + 'a {
        self.candidates().filter(|mv| board.can_apply(mv))
    }

    /// The position jumped when travelling between `a` and `b` in either direction, if they lie on a common jump line.
    pub fn over_between(&self, a: Position, b: Position) -> Option<Position> {
        self.lines.get(&UnorderedPair::from((a, b))).copied()
    }

    /// The move landing on `to` from `from`, if the two are two steps apart along a line.
    pub fn jump(&self, from: Position, to: Position) -> Option<Move> {
        self.over_between(from, to).map(|over| Move::new(from, over, to))
    }
}
