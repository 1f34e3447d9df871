//! Search counters.
//!
//! [`SearchMetrics`] records how much work a search did. The counters are
//! deterministic for a given board size, so they double as regression
//! fixtures.

/// Work counters collected over one search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Child states created by placing a queen, including the solving one.
    pub placements: u64,
    /// States popped off the stack after their cursor ran out.
    pub backtracks: u64,
    /// Deepest the stack grew, counting the root state.
    pub peak_depth: usize,
}
