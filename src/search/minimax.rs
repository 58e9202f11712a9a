//! Full-width depth-limited minimax
//!
//! Fixed-player convention: whoever is active at the top-level call is the
//! maximizing perspective for every layer below, no matter whose turn a
//! deeper node represents. The root runs its own move loop so the chosen
//! move comes back alongside its score; the recursive layers only need the
//! score of their best line.

use crate::clock::Deadline;
use crate::error::EngineResult;
use crate::eval::{Evaluator, MoveHistory};
use crate::position::GameState;
use crate::types::{Player, Score, SearchResult, SearchStats};

/// Depth-limited minimax from the active player's perspective.
///
/// Returns the best root move with its score. The move is the sentinel
/// `None` when the position is already decisive for the active player,
/// `depth` is zero, or there are no legal moves; in each case the score is
/// the evaluator's value of the position itself.
///
/// # Errors
///
/// [`EngineError::OutOfTime`](crate::error::EngineError::OutOfTime) when
/// the deadline trips at any layer entry; the search returns nothing
/// partial in that case.
pub fn minimax<S, E>(
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

/// Maximizing layer: best line for the fixed player.
fn max_value<S, E>(
    state: &S,
    depth: usize,
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
    }
    history.pop(active);
    Ok(best)
}

/// Minimizing layer: the opponent's strongest reply against the fixed
/// player.
fn min_value<S, E>(
    state: &S,
    depth: usize,
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
    }
    history.pop(active);
    Ok(best)
}
