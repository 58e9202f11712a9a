//! Error types for the search engine
//!
//! Provides the crate-wide error enum covering the cooperative timeout
//! signal raised inside the search recursion as well as configuration
//! validation and parsing failures.

use thiserror::Error;

/// Errors that can occur in the search engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Remaining time fell below the abort threshold during search.
    ///
    /// This is the cooperative cancellation signal, not a caller-visible
    /// failure: the iterative-deepening driver catches it at its outermost
    /// frame and salvages the best result completed so far.
    #[error("search out of time: {remaining_ms:.2}ms remaining, abort threshold {threshold_ms:.2}ms")]
    OutOfTime { remaining_ms: f64, threshold_ms: f64 },

    /// Search depth must be strictly positive
    #[error("invalid search depth {depth}: must be at least 1")]
    InvalidDepth { depth: usize },

    /// Unrecognized search method name
    #[error("unknown search method \"{name}\": expected \"minimax\" or \"alphabeta\"")]
    UnknownMethod { name: String },
}

/// Result type alias for search engine operations
pub type EngineResult<T> = Result<T, EngineError>;
