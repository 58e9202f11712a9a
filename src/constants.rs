//! Engine tuning constants
//!
//! Default values for agent configuration and the supplied evaluation
//! heuristics. Embeddings override these through [`AgentConfig`] fields or
//! heuristic struct fields rather than editing this module.
//!
//! [`AgentConfig`]: crate::agent::AgentConfig

/// Default number of plies searched when iterative deepening is disabled.
pub const DEFAULT_SEARCH_DEPTH: usize = 3;

/// Default abort threshold: the search gives up once the per-move clock
/// reports fewer than this many milliseconds remaining. Large enough for
/// the recursion to unwind and the driver to return before the clock hits
/// zero.
pub const DEFAULT_TIMEOUT_MS: f64 = 10.0;

/// Default multiplier applied to the opponent's move count by
/// `WeightedMobility`.
pub const DEFAULT_OPPONENT_WEIGHT: f64 = 7.0;

/// Stand-in factor for missing history entries: a player with no recorded
/// mobility count is treated as if they previously had this many times
/// their current count.
pub const HISTORY_FALLBACK_FACTOR: f64 = 2.0;
