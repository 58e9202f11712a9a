//! History-aware mobility heuristics
//!
//! These heuristics read the [`MoveHistory`] recorded along the search path
//! and compare each side's current mobility against its most recent
//! recorded count. A side with no recorded count yet is treated as if it
//! previously had [`HISTORY_FALLBACK_FACTOR`] times its current mobility.

use super::{decisive_utility, mobility, Evaluator, MoveHistory};
use crate::constants::HISTORY_FALLBACK_FACTOR;
use crate::position::GameState;
use crate::types::{Player, Score};

fn side_counts<S: GameState>(state: &S, player: Player) -> (f64, f64) {
    (
        mobility(state, player),
        mobility(state, player.opponent()),
    )
}

fn recorded_or_default(history: &MoveHistory, player: Player, current: f64) -> f64 {
    match history.latest(player) {
        Some(count) => count as f64,
        None => HISTORY_FALLBACK_FACTOR * current,
    }
}

/// Difference of per-side mobility drops:
/// `(prev_own - own) - (prev_opp - opp)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobilityDrop;

impl<S: GameState> Evaluator<S> for MobilityDrop {
    fn score(&self, state: &S, player: Player, history: &MoveHistory) -> Score {
        if let Some(utility) = decisive_utility(state, player) {
            return utility;
        }
        let (own, opp) = side_counts(state, player);
        let prev_own = recorded_or_default(history, player, own);
        let prev_opp = recorded_or_default(history, player.opponent(), opp);
        (prev_own - own) - (prev_opp - opp)
    }
}

/// Difference of mobility decay ratios:
/// `prev_own / own - prev_opp / opp`.
///
/// A side with zero mobility short-circuits: own zero scores `-inf`,
/// opponent zero scores `+inf`, checked in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayMargin;

impl<S: GameState> Evaluator<S> for DecayMargin {
    fn score(&self, state: &S, player: Player, history: &MoveHistory) -> Score {
        if let Some(utility) = decisive_utility(state, player) {
            return utility;
        }
        let (own, opp) = side_counts(state, player);
        let prev_own = recorded_or_default(history, player, own);
        let prev_opp = recorded_or_default(history, player.opponent(), opp);
        if own == 0.0 {
            return Score::NEG_INFINITY;
        }
        if opp == 0.0 {
            return Score::INFINITY;
        }
        prev_own / own - prev_opp / opp
    }
}

/// Quotient of mobility decay ratios:
/// `(prev_own / own) / (prev_opp / opp)`.
///
/// Same zero-mobility short-circuits as [`DecayMargin`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayRatio;

impl<S: GameState> Evaluator<S> for DecayRatio {
    fn score(&self, state: &S, player: Player, history: &MoveHistory) -> Score {
        if let Some(utility) = decisive_utility(state, player) {
            return utility;
        }
        let (own, opp) = side_counts(state, player);
        let prev_own = recorded_or_default(history, player, own);
        let prev_opp = recorded_or_default(history, player.opponent(), opp);
        if own == 0.0 {
            return Score::NEG_INFINITY;
        }
        if opp == 0.0 {
            return Score::INFINITY;
        }
        (prev_own / own) / (prev_opp / opp)
    }
}

/// Mobility dominance ratio plus the opponent's squeeze:
/// `own / opp + (prev_opp - opp)` while ahead on mobility,
/// `-(opp / own) + (prev_opp - opp)` while behind.
///
/// Same zero-mobility short-circuits as [`DecayMargin`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobilityPressure;

impl<S: GameState> Evaluator<S> for MobilityPressure {
    fn score(&self, state: &S, player: Player, history: &MoveHistory) -> Score {
        if let Some(utility) = decisive_utility(state, player) {
            return utility;
        }
        let (own, opp) = side_counts(state, player);
        let prev_opp = recorded_or_default(history, player.opponent(), opp);
        if own == 0.0 {
            return Score::NEG_INFINITY;
        }
        if opp == 0.0 {
            return Score::INFINITY;
        }
        if own >= opp {
            own / opp + (prev_opp - opp)
        } else {
            -(opp / own) + (prev_opp - opp)
        }
    }
}
