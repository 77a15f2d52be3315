#![warn(missing_docs)]

//! # `trisolitaire`
//!
//! A solver for [peg solitaire](https://en.wikipedia.org/wiki/Peg_solitaire) on triangular boards, such as the 15-hole "cracker barrel" game.
//! Begin by creating a [`Board`] with [`Board::create`] and clearing its starting hole with [`Board::remove_start`].
//! Then call [`solve()`](crate::Board::solve), or build one of the engines in this crate over a shared [`MoveCatalog`].
//!
//! Positions are numbered from 1 at the apex, left to right along each row, when talking to players (see [`Board::numbered`]),
//! and from 0 everywhere else.
//!
//! # Internals
//! The search is a plain depth-first backtracking over jumps.
//!
//! Every jump a board shape permits is known before any peg is placed: for each cell, rightward along its row,
//! straight down, and down to the right, whenever the landing cell exists. These "forward" jumps form the [`MoveCatalog`];
//! the jump back along the same line is the [`reverse`](Move::reverse) of a catalogued one and is never stored.
//!
//! From a given state the search tries each catalogued jump, then its reverse, in catalog order.
//! A jump is legal when pegs sit at its origin and at the position jumped and its landing cell is empty.
//! Every jump removes one peg, so the depth of the search is bounded by the number of pegs.
//! Moves are held on the board by a [`Jump`](board::Jump) guard which takes them back when dropped,
//! so a single board is shared by the whole recursion.
//!
//! All three engines run the same recursion and differ in two places only:
//! 1. What happens at a board with one peg left. [`SearchEngine`] and [`HeuristicSearchEngine`] stop and keep the path;
//! [`ExhaustiveSearchEngine`] copies the path into a shared, capped collection and keeps going.
//! 2. The order moves are tried in. [`HeuristicSearchEngine`] hands the legal moves of each state to a [`MoveOrdering`](ordering::MoveOrdering).
//!
//! Searches log through [`tracing`]; this crate never installs a subscriber.

pub use board::Board;
pub use error::{BoardError, ReplayError};
pub use location::{total, Location, Position};
pub use moves::{Move, MoveCatalog};
pub use solution::{Outcome, Solution, Solutions};
pub use solver::{ExhaustiveSearchEngine, HeuristicSearchEngine, SearchEngine, SearchLimits};

/// The board, its moves held under guard, and replay.
pub mod board;
pub(crate) mod error;
pub(crate) mod location;
pub(crate) mod moves;
/// Orders in which [`HeuristicSearchEngine`] tries legal moves.
pub mod ordering;
/// Directions and drawing for the triangular board shape.
pub mod shape;
pub(crate) mod solution;
pub(crate) mod solver;
