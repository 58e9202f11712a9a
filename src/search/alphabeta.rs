//! Alpha-beta pruned minimax
//!
//! Same contract and fixed-player convention as
//! [`minimax`](super::minimax()), with a pruning window threaded through
//! the layers. Each layer folds a child's score into its running best
//! first, then stops scanning siblings once the best crosses the opposing
//! bound, then tightens its own bound.
//!
//! The root loop hands each child's minimizing layer the window
//! `(running best, +inf)`: the best score found so far plays the alpha
//! role from the first sibling on, and the root's beta never narrows, so
//! the root itself never cuts.

use crate::clock::Deadline;
use crate::error::EngineResult;
use crate::eval::{Evaluator, MoveHistory};
use crate::position::GameState;
use crate::types::{Player, Score, SearchResult, SearchStats};

/// Alpha-beta pruned minimax from the active player's perspective.
///
/// Equivalent to [`minimax`](super::minimax()) in returned score for the
/// same position and depth, visiting at most as many positions. The move is
/// the sentinel `None` under the same conditions: a decisive position, zero
/// depth, or no legal moves.
///
/// # Errors
///
/// [`EngineError::OutOfTime`](crate::error::EngineError::OutOfTime) when
/// the deadline trips at any layer entry.
pub fn alphabeta<S, E>(
    state: &S,
    depth: usize,
    evaluator: &E,
    deadline: &Deadline<'_>,
    stats: &mut SearchStats,
) -> EngineResult<SearchResult<S::Move>>
where
    S: GameState,
    E: Evaluator<S>,
{
    deadline.check()?;

    let fixed = state.active_player();
    let mut history = MoveHistory::new();

    if state.is_winner(fixed) || state.is_loser(fixed) || depth == 0 {
        stats.evals += 1;
        return Ok(SearchResult::leaf(evaluator.score(state, fixed, &history)));
    }

    let moves = state.legal_moves(fixed);
    if moves.is_empty() {
        stats.evals += 1;
        return Ok(SearchResult::leaf(evaluator.score(state, fixed, &history)));
    }

    let mut best = SearchResult::leaf(Score::NEG_INFINITY);
    for mv in moves {
        let reply = min_value(
            &state.forecast(mv),
            depth - 1,
            best.score,
            Score::INFINITY,
            fixed,
            evaluator,
            deadline,
            &mut history,
            stats,
        )?;
        if reply.score > best.score {
            best = SearchResult {
                score: reply.score,
                best_move: Some(mv),
            };
        }
    }
    Ok(best)
}

/// Maximizing layer with a live `(alpha, beta)` window.
#[allow(clippy::too_many_arguments)]
fn max_value<S, E>(
    state: &S,
    depth: usize,
    mut alpha: Score,
    beta: Score,
    fixed: Player,
    evaluator: &E,
    deadline: &Deadline<'_>,
    history: &mut MoveHistory,
    stats: &mut SearchStats,
) -> EngineResult<SearchResult<S::Move>>
where
    S: GameState,
    E: Evaluator<S>,
{
    deadline.check()?;
    stats.nodes += 1;

    if state.is_winner(fixed) || state.is_loser(fixed) || depth == 0 {
        stats.evals += 1;
        return Ok(SearchResult::leaf(evaluator.score(state, fixed, history)));
    }

    let active = state.active_player();
    let moves = state.legal_moves(active);
    if moves.is_empty() {
        stats.evals += 1;
        return Ok(SearchResult::leaf(evaluator.score(state, fixed, history)));
    }

    history.push(active, moves.len());
    let mut best = SearchResult::leaf(Score::NEG_INFINITY);
    for mv in moves {
        let reply = min_value(
            &state.forecast(mv),
            depth - 1,
            alpha,
            beta,
            fixed,
            evaluator,
            deadline,
            history,
            stats,
        )?;
        if reply.score > best.score {
            best = SearchResult {
                score: reply.score,
                best_move: Some(mv),
            };
        }
        if best.score >= beta {
            stats.cutoffs += 1;
            break;
        }
        alpha = alpha.max(best.score);
    }
    history.pop(active);
    Ok(best)
}

/// Minimizing layer with a live `(alpha, beta)` window.
#[allow(clippy::too_many_arguments)]
fn min_value<S, E>(
    state: &S,
    depth: usize,
    alpha: Score,
    mut beta: Score,
    fixed: Player,
    evaluator: &E,
    deadline: &Deadline<'_>,
    history: &mut MoveHistory,
    stats: &mut SearchStats,
) -> EngineResult<SearchResult<S::Move>>
where
    S: GameState,
    E: Evaluator<S>,
{
    deadline.check()?;
    stats.nodes += 1;

    if state.is_winner(fixed) || state.is_loser(fixed) || depth == 0 {
        stats.evals += 1;
        return Ok(SearchResult::leaf(evaluator.score(state, fixed, history)));
    }

    let active = state.active_player();
    let moves = state.legal_moves(active);
    if moves.is_empty() {
        stats.evals += 1;
        return Ok(SearchResult::leaf(evaluator.score(state, fixed, history)));
    }

    history.push(active, moves.len());
    let mut best = SearchResult::leaf(Score::INFINITY);
    for mv in moves {
        let reply = max_value(
            &state.forecast(mv),
            depth - 1,
            alpha,
            beta,
            fixed,
            evaluator,
            deadline,
            history,
            stats,
        )?;
        if reply.score < best.score {
            best = SearchResult {
                score: reply.score,
                best_move: Some(mv),
            };
        }
        if best.score <= alpha {
            stats.cutoffs += 1;
            break;
        }
        beta = beta.min(best.score);
    }
    history.pop(active);
    Ok(best)
}
