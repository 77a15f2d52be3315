use std::cmp::Reverse;

use crate::board::Board;
use crate::location::Location;
use crate::moves::Move;
use crate::shape::{BoardShape, TriangleStep};

/// Decides the order in which a [`HeuristicSearchEngine`](crate::HeuristicSearchEngine) tries the legal moves of a board state.
///
/// `legal` arrives in catalog order, each forward move before its reverse.
/// Implementations may only reorder it; the search still tries every move given.
pub trait MoveOrdering: Sync {
    /// Reorder `legal`, the moves playable on `board`.
    fn arrange(&self, board: &Board, legal: &mut [Move]);
}

/// Leaves moves in catalog order, so the search behaves exactly as a [`SearchEngine`](crate::SearchEngine).
#[derive(Copy, Clone, Debug, Default)]
pub struct CatalogOrder;

impl MoveOrdering for CatalogOrder {
    fn arrange(&self, _board: &Board, _legal: &mut [Move]) {}
}

/// Tries first the moves landing nearest the middle of the board.
///
/// Centrality is measured by how many on-board neighbours the landing cell has: six inside, four along an edge, two in a corner.
/// The sort is stable, so ties keep catalog order.
#[derive(Copy, Clone, Debug, Default)]
pub struct CenterFirst;

impl MoveOrdering for CenterFirst {
    fn arrange(&self, board: &Board, legal: &mut [Move]) {
        legal.sort_by_key(|mv| Reverse(TriangleStep::neighbors_of(Location::from(mv.to), board.dims()).len()));
    }
}

/// Orders moves by a priority function, highest priority first; ties keep catalog order.
#[derive(Copy, Clone, Debug)]
pub struct ByPriority<F>(pub F);

impl<F> MoveOrdering for ByPriority<F>
where
    F: Fn(&Board, &Move) -> i64 + Sync,
{
    fn arrange(&self, board: &Board, legal: &mut [Move]) {
        legal.sort_by_key(|mv| Reverse((self.0)(board, mv)));
    }
}
