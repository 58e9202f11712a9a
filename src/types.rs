//! Core types shared across the engine
//!
//! The engine is generic over the embedding game's move representation, so
//! the types here carry everything that is game-independent: player
//! identities, scores, the per-layer search result, the method selector and
//! the counters accumulated during a search.
//!
//! # Score Convention
//!
//! Every score is taken from the perspective of the *fixed player*, the
//! player active at the top-level search call, no matter whose turn the
//! evaluated node represents. Scores are extended reals: decisive terminal
//! states use `f64::INFINITY` / `f64::NEG_INFINITY`, heuristic evaluations
//! are finite. `NaN` is outside the evaluator contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Evaluation score from the fixed player's perspective.
pub type Score = f64;

/// One of the two role identities in an alternating-move game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Stable 0/1 index for per-player tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

/// Search algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    /// Full-width depth-limited minimax
    Minimax,
    /// Depth-limited minimax with alpha-beta pruning
    AlphaBeta,
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMethod::Minimax => "minimax",
            SearchMethod::AlphaBeta => "alphabeta",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SearchMethod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchMethod::Minimax),
            "alphabeta" | "alpha-beta" => Ok(SearchMethod::AlphaBeta),
            _ => Err(EngineError::UnknownMethod { name: s.to_string() }),
        }
    }
}

/// Score and originating move produced by one search layer.
///
/// `best_move` is the sentinel `None` when the layer evaluated a leaf or
/// had no legal moves. Invariant: a `Some` move is always legal at the
/// position the result originated from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<M> {
    pub score: Score,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    /// Result for a layer that produced a score but no move.
    pub(crate) fn leaf(score: Score) -> Self {
        SearchResult {
            score,
            best_move: None,
        }
    }
}

/// Counters accumulated over one search call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive layer entries
    pub nodes: u64,
    /// Evaluator invocations
    pub evals: u64,
    /// Sibling scans stopped by the pruning window
    pub cutoffs: u64,
}
