//! Time-bounded move selection
//!
//! [`SearchAgent`] wraps the fixed-depth searchers in an iterative
//! deepening loop driven by a wall clock. Before any search starts it
//! draws a random legal move as a fallback answer, so even a clock that
//! expires immediately still yields a usable move. Each finished depth may
//! then replace that answer, and a timeout mid-depth simply keeps whatever
//! the last finished depth produced.

use instant::Instant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

use crate::clock::{Deadline, MoveClock};
use crate::constants::{DEFAULT_SEARCH_DEPTH, DEFAULT_TIMEOUT_MS};
use crate::error::{EngineError, EngineResult};
use crate::eval::Evaluator;
use crate::position::GameState;
use crate::search::{alphabeta, minimax};
use crate::types::{Score, SearchMethod, SearchResult, SearchStats};

/// Tunable parameters for a [`SearchAgent`].
///
/// Every field has a default, and deserialization fills missing fields
/// from those defaults, so a partial config file is enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Depth searched when `iterative` is off. Must be at least 1, even
    /// when `iterative` makes this field unused.
    pub search_depth: usize,
    /// Deepen one ply at a time until the clock runs out, instead of
    /// searching `search_depth` once.
    pub iterative: bool,
    /// Which searcher explores the tree.
    pub method: SearchMethod,
    /// Remaining milliseconds below which the search aborts.
    pub timeout_ms: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            iterative: true,
            method: SearchMethod::Minimax,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AgentConfig {
    /// Rejects configurations no search can satisfy.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidDepth`] when `search_depth` is zero.
    pub fn validate(&self) -> EngineResult<()> {
        if self.search_depth == 0 {
            return Err(EngineError::InvalidDepth {
                depth: self.search_depth,
            });
        }
        Ok(())
    }
}

/// Everything a [`SearchAgent`] learned while picking one move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision<M> {
    /// The move to play, or `None` when the position offered none.
    pub best_move: Option<M>,
    /// Score of the adopted line, from the deciding player's view.
    pub score: Score,
    /// Deepest fully finished search depth. Zero when the clock expired
    /// before depth one completed.
    pub depth_completed: usize,
    /// Whether the clock cut a search short.
    pub timed_out: bool,
    /// Node and evaluation counters summed over all finished and
    /// aborted depths.
    pub stats: SearchStats,
    /// Wall time spent inside the call.
    pub elapsed: Duration,
}

/// Iterative deepening driver around [`minimax`] and [`alphabeta`].
///
/// The agent owns its evaluator and its RNG. Seed the RNG with
/// [`with_seed`](SearchAgent::with_seed) when reproducible fallback
/// choices matter, in tests for instance.
#[derive(Debug)]
pub struct SearchAgent<E> {
    config: AgentConfig,
    evaluator: E,
    rng: StdRng,
}

impl<E> SearchAgent<E> {
    /// Builds an agent with an OS-seeded RNG.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidDepth`] when the config fails validation.
    pub fn new(config: AgentConfig, evaluator: E) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            evaluator,
            rng: StdRng::from_rng(&mut rand::rng()),
        })
    }

    /// Builds an agent whose fallback choices are reproducible.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidDepth`] when the config fails validation.
    pub fn with_seed(config: AgentConfig, evaluator: E, seed: u64) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            evaluator,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// The configuration the agent was built with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Picks a move for the active player of `state` before the clock
    /// runs out.
    ///
    /// Returns `None` only when `legal_moves` is empty. Any other
    /// outcome, including an immediate timeout, returns one of the
    /// given moves.
    pub fn select_move<S>(
        &mut self,
        state: &S,
        legal_moves: &[S::Move],
        clock: &dyn MoveClock,
    ) -> Option<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.decide(state, legal_moves, clock).best_move
    }

    /// Like [`select_move`](SearchAgent::select_move), but reports how
    /// the choice was reached.
    pub fn decide<S>(
        &mut self,
        state: &S,
        legal_moves: &[S::Move],
        clock: &dyn MoveClock,
    ) -> Decision<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let started = Instant::now();
        if legal_moves.is_empty() {
            trace!("no legal moves to choose from");
            return Decision {
                best_move: None,
                score: Score::NEG_INFINITY,
                depth_completed: 0,
                timed_out: false,
                stats: SearchStats::default(),
                elapsed: started.elapsed(),
            };
        }

        let fallback = legal_moves[self.rng.random_range(0..legal_moves.len())];
        trace!(fallback = ?fallback, "drew random fallback move");

        let deadline = Deadline::new(clock, self.config.timeout_ms);
        let mut best_move = Some(fallback);
        let mut best_score = Score::NEG_INFINITY;
        let mut depth_completed = 0;
        let mut timed_out = false;
        let mut stats = SearchStats::default();

        let mut depth = if self.config.iterative {
            1
        } else {
            self.config.search_depth
        };
        loop {
            match self.search_at(state, depth, &deadline, &mut stats) {
                Ok(result) => {
                    // The first finished depth is adopted unconditionally;
                    // deeper ones only on a strictly better score. A
                    // moveless result keeps the fallback in place.
                    if depth_completed == 0 || result.score > best_score {
                        best_score = result.score;
                        if let Some(mv) = result.best_move {
                            best_move = Some(mv);
                        }
                    }
                    depth_completed = depth;
                    debug!(depth, score = best_score, "finished search depth");
                    if !self.config.iterative {
                        break;
                    }
                    depth += 1;
                }
                Err(err) => {
                    debug!(depth, %err, "search aborted, keeping last finished depth");
                    timed_out = true;
                    break;
                }
            }
        }

        Decision {
            best_move,
            score: best_score,
            depth_completed,
            timed_out,
            stats,
            elapsed: started.elapsed(),
        }
    }

    fn search_at<S>(
        &self,
        state: &S,
        depth: usize,
        deadline: &Deadline<'_>,
        stats: &mut SearchStats,
    ) -> EngineResult<SearchResult<S::Move>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        match self.config.method {
            SearchMethod::Minimax => minimax(state, depth, &self.evaluator, deadline, stats),
            SearchMethod::AlphaBeta => alphabeta(state, depth, &self.evaluator, deadline, stats),
        }
    }
}
