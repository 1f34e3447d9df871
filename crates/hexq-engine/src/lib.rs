//! Backtracking search engine for hexq.
//!
//! Finds the first placement, in cell-index order, of `2·size−1` mutually
//! non-attacking queens on a hexagonal board. The search is single-threaded
//! depth-first backtracking over an explicit stack of owned
//! [`BoardState`]s; each child is a full copy of its parent with one more
//! queen placed.
//!
//! The one-call entry point is [`solve`]:
//!
//! ```
//! use hexq_engine::{solve, SearchOutcome};
//!
//! assert!(matches!(solve(2).unwrap(), SearchOutcome::NoSolution));
//! assert!(solve(4).unwrap().is_solved());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod search;
pub mod state;

pub use config::{ConfigError, SolverConfig};
pub use metrics::SearchMetrics;
pub use search::{SearchOutcome, SearchReport, SearchStatus, Solution, Solver};
pub use state::{BoardState, QueenList};

/// Search a board of `size` cells per edge.
///
/// Returns the first solution found, or [`SearchOutcome::NoSolution`]
/// once the search space is exhausted. Fails only if `size` does not
/// describe a representable board.
pub fn solve(size: u32) -> Result<SearchOutcome, ConfigError> {
    Ok(solve_with_metrics(size)?.outcome)
}

/// [`solve`], also returning the search counters.
pub fn solve_with_metrics(size: u32) -> Result<SearchReport, ConfigError> {
    let geometry = SolverConfig::new(size).validate()?;
    Ok(Solver::new(&geometry).run())
}
