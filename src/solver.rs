use std::num::NonZero;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, info_span, trace};

use crate::board::Board;
use crate::moves::{Move, MoveCatalog};
use crate::ordering::{CatalogOrder, MoveOrdering};
use crate::solution::{Outcome, Solution, Solutions};

/// Bounds on the work a search may do.
///
/// The default is unbounded and single-threaded.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchLimits {
    /// Maximum number of board states to visit, if any.
    pub node_budget: Option<NonZero<u64>>,
    /// Explore the branches below each first move on the rayon thread pool.
    ///
    /// Only the [`ExhaustiveSearchEngine`] honours this.
    pub parallel: bool,
}

impl SearchLimits {
    /// Stop after visiting `nodes` board states.
    pub fn with_node_budget(mut self, nodes: NonZero<u64>) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    /// Enable or disable parallel exploration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Node counter shared by every branch of one search.
pub(crate) struct NodeBudget {
    limit: Option<u64>,
    spent: AtomicU64,
}

impl NodeBudget {
    pub(crate) fn new(limit: Option<NonZero<u64>>) -> Self {
        Self { limit: limit.map(NonZero::get), spent: AtomicU64::new(0) }
    }

    /// Count one more node, returning whether it is still within the limit.
    fn spend(&self) -> bool {
        let spent = self.spent.fetch_add(1, Ordering::Relaxed) + 1;
        self.limit.map_or(true, |limit| spent <= limit)
    }

    pub(crate) fn spent(&self) -> u64 {
        self.spent.load(Ordering::Relaxed)
    }
}

/// Why a search stopped before trying every line of play.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Halt {
    /// The goal was reached and the path should be kept.
    Solved,
    /// The sink wants nothing more.
    Full,
    OutOfBudget,
}

/// What a search does on reaching a board with one peg.
pub(crate) trait SolutionSink {
    /// Checked on entry to every node; stops the search once true.
    fn is_full(&self) -> bool {
        false
    }

    /// Handle the path to a goal state. [`Continue`](ControlFlow::Continue) backtracks and keeps searching.
    fn found(&mut self, path: &[Move]) -> ControlFlow<Halt>;
}

/// Stop at the first solution, leaving it on the board and in the path.
pub(crate) struct FirstSolution;

impl SolutionSink for FirstSolution {
    fn found(&mut self, _path: &[Move]) -> ControlFlow<Halt> {
        ControlFlow::Break(Halt::Solved)
    }
}

/// Append copies of solutions to a collection shared between branches, up to `cap` of them.
///
/// The lock is taken only to check the size or to append, never across recursion.
pub(crate) struct Collector<'a> {
    shared: &'a Mutex<Vec<Solution>>,
    cap: usize,
}

impl<'a> Collector<'a> {
    pub(crate) fn new(shared: &'a Mutex<Vec<Solution>>, cap: usize) -> Self {
        Self { shared, cap }
    }
}

impl SolutionSink for Collector<'_> {
    fn is_full(&self) -> bool {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner).len() >= self.cap
    }

    fn found(&mut self, path: &[Move]) -> ControlFlow<Halt> {
        let mut solutions = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        if solutions.len() < self.cap {
            trace!(moves = path.len(), collected = solutions.len() + 1, "solution recorded");
            solutions.push(Solution::from(path.to_vec()));
        }

        ControlFlow::Continue(())
    }
}

/// The backtracking recursion shared by every engine.
///
/// With no `ordering`, candidates are tried straight from the catalog, each forward move before its reverse, skipping those not legal.
/// With an ordering, the legal moves of each node are gathered first and handed to it for rearranging.
pub(crate) struct Search<'a, S> {
    catalog: &'a MoveCatalog,
    ordering: Option<&'a dyn MoveOrdering>,
    budget: &'a NodeBudget,
    sink: S,
}

impl<'a, S: SolutionSink> Search<'a, S> {
    pub(crate) fn new(catalog: &'a MoveCatalog, ordering: Option<&'a dyn MoveOrdering>, budget: &'a NodeBudget, sink: S) -> Self {
        Self { catalog, ordering, budget, sink }
    }

    /// Explore every line of play from `board`, whose moves so far are `path`.
    ///
    /// Returns [`Continue`](ControlFlow::Continue) once all lines are exhausted, with `board` and `path` as they were.
    /// On [`Halt::Solved`] the winning moves stay applied to `board` and appended to `path`; on any other halt both are restored.
    pub(crate) fn descend(&mut self, board: &mut Board, path: &mut Vec<Move>) -> ControlFlow<Halt> {
        if self.sink.is_full() {
            return ControlFlow::Break(Halt::Full);
        }
        if !self.budget.spend() {
            return ControlFlow::Break(Halt::OutOfBudget);
        }

        if board.active_count() == 1 {
            return self.sink.found(path);
        }

        match self.ordering {
            None => {
                let catalog = self.catalog;
                for mv in catalog.candidates() {
                    self.attempt(board, path, mv)?;
                }
            }
            Some(ordering) => {
                let mut legal = self.catalog.legal_moves(board).collect_vec();
                ordering.arrange(board, &mut legal);
                for mv in legal {
                    self.attempt(board, path, mv)?;
                }
            }
        }

        ControlFlow::Continue(())
    }

    fn attempt(&mut self, board: &mut Board, path: &mut Vec<Move>, mv: Move) -> ControlFlow<Halt> {
        let Some(mut jump) = board.play(mv) else {
            return ControlFlow::Continue(());
        };

        path.push(mv);
        match self.descend(&mut jump, path) {
            ControlFlow::Break(Halt::Solved) => {
                jump.keep();
                ControlFlow::Break(Halt::Solved)
            }
            flow => {
                // dropping the jump takes the move back
                path.pop();
                flow
            }
        }
    }
}

fn outcome_of(flow: ControlFlow<Halt>, path: Vec<Move>) -> Outcome {
    match flow {
        ControlFlow::Break(Halt::Solved) => Outcome::Solved(Solution::from(path)),
        ControlFlow::Break(Halt::OutOfBudget) => Outcome::BudgetExhausted,
        ControlFlow::Break(Halt::Full) | ControlFlow::Continue(()) => Outcome::Unsolvable,
    }
}

/// Finds the first solution by depth-first backtracking in catalog order.
///
/// Which solution is "first" is fixed by [`MoveCatalog::generate`]: the same board always yields the same solution.
#[derive(Clone, Debug)]
pub struct SearchEngine<'c> {
    catalog: &'c MoveCatalog,
    limits: SearchLimits,
}

impl<'c> SearchEngine<'c> {
    /// An unbounded engine over `catalog`, which must match the boards to be solved.
    pub fn new(catalog: &'c MoveCatalog) -> Self {
        Self { catalog, limits: SearchLimits::default() }
    }

    /// Use `limits` for subsequent searches.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Search `board` for a line of play leaving one peg.
    ///
    /// On success the board is left in its solved state; otherwise it is returned to where it started.
    pub fn solve(&self, board: &mut Board) -> Outcome {
        debug_assert_eq!(self.catalog.rows(), board.rows());
        debug!(rows = board.rows(), pegs = board.active_count(), "searching for a solution");

        let budget = NodeBudget::new(self.limits.node_budget);
        let mut path = Vec::with_capacity(board.active_count());
        let flow = Search::new(self.catalog, None, &budget, FirstSolution).descend(board, &mut path);
        let outcome = outcome_of(flow, path);

        debug!(nodes = budget.spent(), found = outcome.found(), moves = outcome.moves().len(), "search finished");
        outcome
    }
}

/// Like [`SearchEngine`], but hands the legal moves of every board state to a [`MoveOrdering`] before trying them.
///
/// With the default [`CatalogOrder`] it finds exactly what a [`SearchEngine`] does.
#[derive(Clone, Debug)]
pub struct HeuristicSearchEngine<'c, O = CatalogOrder> {
    catalog: &'c MoveCatalog,
    ordering: O,
    limits: SearchLimits,
}

impl<'c> HeuristicSearchEngine<'c> {
    /// An engine over `catalog` keeping catalog order.
    pub fn new(catalog: &'c MoveCatalog) -> Self {
        Self::with_ordering(catalog, CatalogOrder)
    }
}

impl<'c, O: MoveOrdering> HeuristicSearchEngine<'c, O> {
    /// An engine over `catalog` trying moves in the order given by `ordering`.
    pub fn with_ordering(catalog: &'c MoveCatalog, ordering: O) -> Self {
        Self { catalog, ordering, limits: SearchLimits::default() }
    }

    /// Use `limits` for subsequent searches.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Search `board` for a line of play leaving one peg, under the same contract as [`SearchEngine::solve`].
    pub fn solve(&self, board: &mut Board) -> Outcome {
        debug_assert_eq!(self.catalog.rows(), board.rows());
        debug!(rows = board.rows(), pegs = board.active_count(), "searching for a solution with move ordering");

        let budget = NodeBudget::new(self.limits.node_budget);
        let mut path = Vec::with_capacity(board.active_count());
        let flow = Search::new(self.catalog, Some(&self.ordering), &budget, FirstSolution).descend(board, &mut path);
        let outcome = outcome_of(flow, path);

        debug!(nodes = budget.spent(), found = outcome.found(), moves = outcome.moves().len(), "search finished");
        outcome
    }
}

/// Collects many solutions rather than stopping at the first.
///
/// Solutions go into one collection behind a mutex; every branch of the search otherwise works on its own board and path.
/// With [`SearchLimits::parallel`] set, the subtrees below each legal first move are searched concurrently,
/// and which solutions fill the cap then depends on scheduling.
#[derive(Clone, Debug)]
pub struct ExhaustiveSearchEngine<'c> {
    catalog: &'c MoveCatalog,
    limits: SearchLimits,
}

impl<'c> ExhaustiveSearchEngine<'c> {
    /// An unbounded, sequential engine over `catalog`.
    pub fn new(catalog: &'c MoveCatalog) -> Self {
        Self { catalog, limits: SearchLimits::default() }
    }

    /// Use `limits` for subsequent searches.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Collect up to `max_solutions` solutions for `board`, which is left untouched.
    pub fn solve(&self, board: &Board, max_solutions: usize) -> Solutions {
        debug_assert_eq!(self.catalog.rows(), board.rows());
        debug!(rows = board.rows(), pegs = board.active_count(), max_solutions, parallel = self.limits.parallel, "collecting solutions");

        let shared = Mutex::new(Vec::new());
        let budget = NodeBudget::new(self.limits.node_budget);

        let budget_exhausted = if self.limits.parallel && board.active_count() > 1 {
            let first_moves = self.catalog.legal_moves(board).collect_vec();
            first_moves.par_iter()
                .map(|mv| {
                    let _span = info_span!("branch", first = %mv).entered();
                    let mut board = board.clone();
                    board.apply(mv);
                    let mut path = vec![*mv];
                    Search::new(self.catalog, None, &budget, Collector::new(&shared, max_solutions))
                        .descend(&mut board, &mut path)
                })
                .collect::<Vec<_>>()
                .contains(&ControlFlow::Break(Halt::OutOfBudget))
        } else {
            let mut board = board.clone();
            let mut path = Vec::with_capacity(board.active_count());
            Search::new(self.catalog, None, &budget, Collector::new(&shared, max_solutions))
                .descend(&mut board, &mut path) == ControlFlow::Break(Halt::OutOfBudget)
        };

        let solutions = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
        debug!(nodes = budget.spent(), collected = solutions.len(), budget_exhausted, "collection finished");

        Solutions { solutions, budget_exhausted, nodes: budget.spent() }
    }
}
