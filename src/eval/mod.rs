//! Position evaluation
//!
//! Scores positions from the fixed player's perspective. All supplied
//! heuristics are mobility-based: they compare legal-move counts for the
//! two sides, some against counts recorded earlier on the search path.
//! Every heuristic returns the game's terminal utility on decisive
//! positions, as the [`Evaluator`] contract requires.
//!
//! ## Module Organization
//!
//! - `history` - Per-player mobility counts recorded along the search path
//! - `mobility` - Static mobility heuristic
//! - `trend` - History-aware heuristics tracking mobility change

mod history;
mod mobility;
mod trend;

pub use history::MoveHistory;
pub use mobility::WeightedMobility;
pub use trend::{DecayMargin, DecayRatio, MobilityDrop, MobilityPressure};

use crate::position::GameState;
use crate::types::{Player, Score};

/// Scores a position from `player`'s perspective.
///
/// Implementations must return [`GameState::utility`] on decisive terminal
/// positions and may return any finite score elsewhere. `history` carries
/// the per-player mobility counts recorded on the current search path;
/// history-free heuristics ignore it.
///
/// The trait is implemented for plain closures, so ad-hoc evaluators can be
/// passed without a named type:
///
/// ```rust,ignore
/// let flat = |_state: &MyGame, _player: Player, _history: &MoveHistory| 0.0;
/// let agent = SearchAgent::new(AgentConfig::default(), flat)?;
/// ```
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: Player, history: &MoveHistory) -> Score;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, Player, &MoveHistory) -> Score,
{
    fn score(&self, state: &S, player: Player, history: &MoveHistory) -> Score {
        self(state, player, history)
    }
}

/// Legal-move count for `player` as a score term.
pub(crate) fn mobility<S: GameState>(state: &S, player: Player) -> f64 {
    state.legal_moves(player).len() as f64
}

/// Terminal short-circuit shared by the supplied heuristics.
pub(crate) fn decisive_utility<S: GameState>(state: &S, player: Player) -> Option<Score> {
    if state.is_winner(player) || state.is_loser(player) {
        Some(state.utility(player))
    } else {
        None
    }
}
