//! Solver configuration, validation, and error types.
//!
//! [`SolverConfig`] is the input to a solve. [`validate()`](SolverConfig::validate)
//! derives the board geometry, which is the only thing that can fail
//! before the search starts.

use std::error::Error;
use std::fmt;

use hexq_core::GeometryError;
use hexq_space::BoardGeometry;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SolverConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The board size does not describe a representable board.
    Geometry(GeometryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "geometry: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
        }
    }
}

impl From<GeometryError> for ConfigError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

// ── SolverConfig ───────────────────────────────────────────────────

/// Complete configuration for one solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Cells per edge of the hexagonal board.
    pub size: u32,
}

impl SolverConfig {
    /// Smallest size for which full placements are expected to be common.
    ///
    /// Smaller boards are accepted; most of them have no solution.
    pub const RECOMMENDED_MIN_SIZE: u32 = 16;

    /// Configuration for a board of `size` cells per edge.
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Whether the size is below [`RECOMMENDED_MIN_SIZE`](Self::RECOMMENDED_MIN_SIZE).
    pub fn is_below_recommended(&self) -> bool {
        self.size < Self::RECOMMENDED_MIN_SIZE
    }

    /// Validate the configuration and derive the board geometry.
    pub fn validate(&self) -> Result<BoardGeometry, ConfigError> {
        Ok(BoardGeometry::new(self.size)?)
    }
}
