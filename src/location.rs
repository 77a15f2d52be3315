use std::num::NonZero;

/// Flat index of a cell, counted row-major from the apex starting at 0.
pub type Position = usize;
type Coord = usize;
pub(crate) type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(row, col)` on a triangular board, with `col <= row`. The apex is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies on a board of `rows` rows.
    pub fn is_within(&self, rows: Dimension) -> bool {
        self.0 < rows.get() && self.1 <= self.0
    }

    /// The flat [`Position`] of this location.
    pub fn position(&self) -> Position {
        self.0 * (self.0 + 1) / 2 + self.1
    }
}

impl From<Position> for Location {
    fn from(position: Position) -> Self {
        // the largest row whose first index does not exceed `position`
        let mut row = 0;
        while (row + 1) * (row + 2) / 2 <= position {
            row += 1;
        }

        Self(row, position - row * (row + 1) / 2)
    }
}

/// Number of cells on a triangular board of `rows` rows.
///
/// Panics on overflow; [`Board::create`](crate::Board::create) refuses such boards first.
pub fn total(rows: usize) -> usize {
    rows * (rows + 1) / 2
}

// also refuses counts too large to allocate
pub(crate) fn checked_total(rows: usize) -> Option<usize> {
    rows.checked_add(1)
        .and_then(|next| next.checked_mul(rows))
        .map(|doubled| doubled / 2)
        .filter(|total| *total <= isize::MAX as usize)
}
