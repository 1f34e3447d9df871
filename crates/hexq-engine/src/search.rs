//! Depth-first backtracking over an explicit stack of [`BoardState`]s.
//!
//! Each iteration inspects the top of the stack:
//!
//! 1. Cursor exhausted: pop it, then advance the new top's cursor past the
//!    cell whose subtree just failed.
//! 2. Otherwise: clone the top, place a queen on the clone's cursor cell.
//!    A clone holding `lattice_width` queens is a solution and ends the
//!    search; any other clone is pushed.
//!
//! An empty stack means the space is exhausted. Backtracking discards whole
//! states, so there is no undo log.

use hexq_core::{CaptureSet, CellIndex};
use hexq_space::BoardGeometry;
use tracing::{debug, trace};

use crate::metrics::SearchMetrics;
use crate::state::BoardState;

/// Where a [`Solver`] is in its run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Stack non-empty, no solution yet.
    Exploring,
    /// A full placement was found. Terminal.
    Solved,
    /// The stack emptied without a full placement. Terminal.
    Exhausted,
}

impl SearchStatus {
    /// Whether no further transitions can happen.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Exploring)
    }
}

/// A complete placement of `lattice_width` mutually non-attacking queens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    queens: Vec<CellIndex>,
    captured: CaptureSet,
}

impl Solution {
    /// Queen cells in placement order (ascending, since the cursor only
    /// moves forward).
    pub fn queens(&self) -> &[CellIndex] {
        &self.queens
    }

    /// Cells occupied or attacked by the placement.
    pub fn captured(&self) -> &CaptureSet {
        &self.captured
    }

    /// Consume the solution, returning the queen list.
    pub fn into_queens(self) -> Vec<CellIndex> {
        self.queens
    }
}

/// Result of a finished search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The first solution found in index order.
    Solved(Solution),
    /// No placement of `lattice_width` queens exists.
    NoSolution,
}

impl SearchOutcome {
    /// Whether a solution was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The solution, if any.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(s) => Some(s),
            Self::NoSolution => None,
        }
    }
}

/// Outcome plus the work it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// How the search ended.
    pub outcome: SearchOutcome,
    /// Counters collected while searching.
    pub metrics: SearchMetrics,
}

/// Backtracking solver for one board geometry.
///
/// # Examples
///
/// ```
/// use hexq_engine::{SearchOutcome, Solver};
/// use hexq_space::BoardGeometry;
///
/// let geometry = BoardGeometry::new(4).unwrap();
/// let report = Solver::new(&geometry).run();
/// let SearchOutcome::Solved(solution) = report.outcome else {
///     panic!("size 4 is solvable");
/// };
/// assert_eq!(solution.queens().len(), 7);
/// ```
pub struct Solver<'g> {
    geometry: &'g BoardGeometry,
    stack: Vec<BoardState>,
    status: SearchStatus,
    solution: Option<BoardState>,
    metrics: SearchMetrics,
}

impl<'g> Solver<'g> {
    /// A solver whose stack holds only the empty root state.
    pub fn new(geometry: &'g BoardGeometry) -> Self {
        let mut stack = Vec::with_capacity(geometry.lattice_width() as usize);
        stack.push(BoardState::empty(geometry));
        Self {
            geometry,
            stack,
            status: SearchStatus::Exploring,
            solution: None,
            metrics: SearchMetrics {
                peak_depth: 1,
                ..SearchMetrics::default()
            },
        }
    }

    /// Current status.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Number of states on the stack, root included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The frontier state, if the stack is non-empty.
    pub fn top(&self) -> Option<&BoardState> {
        self.stack.last()
    }

    /// Counters so far.
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Perform one transition. Calls after a terminal status are no-ops.
    pub fn step(&mut self) -> SearchStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        let Some(top) = self.stack.last() else {
            self.status = SearchStatus::Exhausted;
            return self.status;
        };

        if top.is_exhausted() {
            self.stack.pop();
            self.metrics.backtracks += 1;
            trace!(depth = self.stack.len(), "backtrack");
            match self.stack.last_mut() {
                Some(parent) => parent.advance_index(),
                None => self.status = SearchStatus::Exhausted,
            }
        } else {
            let mut child = top.clone();
            child.place_queen(self.geometry);
            self.metrics.placements += 1;
            trace!(
                depth = self.stack.len(),
                queens = child.queen_count(),
                "placed queen"
            );
            if child.queen_count() == self.geometry.lattice_width() as usize {
                self.solution = Some(child);
                self.status = SearchStatus::Solved;
            } else {
                self.stack.push(child);
                self.metrics.peak_depth = self.metrics.peak_depth.max(self.stack.len());
            }
        }
        self.status
    }

    /// Step until the search is solved or exhausted.
    pub fn run(mut self) -> SearchReport {
        debug!(
            size = self.geometry.size(),
            cells = self.geometry.cell_count(),
            "search started"
        );
        while !self.step().is_terminal() {}
        debug!(
            status = ?self.status,
            placements = self.metrics.placements,
            backtracks = self.metrics.backtracks,
            peak_depth = self.metrics.peak_depth,
            "search finished"
        );

        let outcome = match self.solution {
            Some(state) => SearchOutcome::Solved(Solution {
                queens: state.queens().to_vec(),
                captured: state.cells().clone(),
            }),
            None => SearchOutcome::NoSolution,
        };
        SearchReport {
            outcome,
            metrics: self.metrics,
        }
    }
}
