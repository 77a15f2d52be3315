use std::fmt::{Display, Formatter};

use crate::moves::Move;

/// Moves in play order which take a board down to a single peg.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Solution(pub(crate) Vec<Move>);

impl Solution {
    /// The moves, first move first.
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no move is needed, i.e. the board already held a single peg.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the moves out of this solution.
    pub fn into_moves(self) -> Vec<Move> {
        self.0
    }
}

impl From<Vec<Move>> for Solution {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, mv) in self.0.iter().enumerate() {
            writeln!(f, "Step {}: {}", index + 1, mv)?;
        }

        Ok(())
    }
}

/// The result of a single-solution search.
///
/// Not finding a solution is an ordinary result, not an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// A solution was found; the board was left in its final state.
    Solved(Solution),
    /// Every line of play was tried and none leaves a single peg.
    Unsolvable,
    /// The node budget ran out first; the board was restored to where it started.
    BudgetExhausted,
}

impl Outcome {
    /// Whether a solution was found.
    pub fn found(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The solution, if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    /// The moves of the solution, or none.
    pub fn moves(&self) -> &[Move] {
        match self {
            Self::Solved(solution) => solution.moves(),
            _ => &[],
        }
    }
}

/// Solutions gathered by an [`ExhaustiveSearchEngine`](crate::ExhaustiveSearchEngine).
#[derive(Clone, Debug, Default)]
pub struct Solutions {
    pub(crate) solutions: Vec<Solution>,
    pub(crate) budget_exhausted: bool,
    pub(crate) nodes: u64,
}

impl Solutions {
    /// Number of solutions collected.
    pub fn count(&self) -> usize {
        self.solutions.len()
    }

    /// Whether nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// The solution with the fewest moves; the earliest collected wins ties.
    pub fn shortest(&self) -> Option<&Solution> {
        // min_by_key keeps the first of equal keys
        self.solutions.iter().min_by_key(|solution| solution.len())
    }

    /// All collected solutions, in the order they were found.
    pub fn all(&self) -> &[Solution] {
        &self.solutions
    }

    /// Whether the node budget stopped the search before it finished.
    pub fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    /// Number of board states visited.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Take the solutions out.
    pub fn into_vec(self) -> Vec<Solution> {
        self.solutions
    }
}

impl Display for Solutions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, solution) in self.solutions.iter().enumerate() {
            writeln!(f, "Solution {} ({} moves):", index + 1, solution.len())?;
            write!(f, "{}", solution)?;
        }

        Ok(())
    }
}
