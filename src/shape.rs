use std::hash::Hash;

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::location::{Dimension, Location, Position};

/// Functionality that must be implemented for the directions of a board shape.
///
/// [`TriangleStep`] is the only built-in implementation.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may be off the board; check it with [`Location::is_within`].
    fn attempt_from(&self, location: Location) -> Location;
    /// The static array of all "forward" directions.
    ///
    /// Forward directions should be those which, upon stepping from one location to another, cause the destination location to be indexed higher than the origin location.
    /// Their order here is the order in which jumps are catalogued for each cell.
    const FORWARD_VARIANTS: &'static [Self];
    /// Embed a board of `rows` rows in an [`ndarray::Array2`], holding the [`Position`] found at each slot, if any.
    fn layout(rows: Dimension) -> Array2<Option<Position>>;
    /// Dump the specified [`ndarray::Array2`] as produced by [`Self::layout`], one line per row.
    fn print(board: Array2<String>) -> String;
}

/// Directions on a triangular board, where row `r` holds `r + 1` cells.
///
/// Moving [`Down`](TriangleStep::Down) keeps the column, so the board reads as a lower-left triangle in `(row, col)` terms.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum TriangleStep {
    /// Along the row, to the next column.
    Right,
    /// Along the row, to the previous column.
    Left,
    /// To the next row, same column.
    Down,
    /// To the previous row, same column.
    Up,
    /// To the next row and column.
    DownRight,
    /// To the previous row and column.
    UpLeft,
}

impl Step for TriangleStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Right => location.offset_by((0, 1)),
            Self::Left => location.offset_by((0, -1)),
            Self::Down => location.offset_by((1, 0)),
            Self::Up => location.offset_by((-1, 0)),
            Self::DownRight => location.offset_by((1, 1)),
            Self::UpLeft => location.offset_by((-1, -1)),
        }
    }

    const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down, Self::DownRight];


    // NB: rows are staggered so that each cell sits between its two parents:
    //    0
    //   1 2
    //  3 4 5
    fn layout(rows: Dimension) -> Array2<Option<Position>> {
        let rows = rows.get();
        let mut ret = Array2::from_elem((rows, 2 * rows - 1), None);

        for row in 0..rows {
            for col in 0..=row {
                ret[(row, rows - 1 - row + 2 * col)] = Some(Location(row, col).position());
            }
        }

        ret
    }

    fn print(board: Array2<String>) -> String {
        let width = board.iter().map(|cell| cell.chars().count()).max().unwrap_or(0);
        let mut out = String::with_capacity(board.nrows() * (board.ncols() * width + 1));

        for row in board.rows() {
            let line = row.iter().map(|cell| format!("{:>width$}", cell)).join("");
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

/// Functionality on top of [`Step`] with identical implementation across all shapes.
pub trait BoardShape: Step {
    /// Get all neighbors of a [`Location`] on a board of `rows` rows, by attempting every step direction in `Self::VARIANTS`.
    fn neighbors_of(location: Location, rows: Dimension) -> Vec<(Self, Location)>;
}

impl<Sh> BoardShape for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location, rows: Dimension) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .filter(|(_, neighbor)| neighbor.is_within(rows))
            .collect_vec()
    }
}
