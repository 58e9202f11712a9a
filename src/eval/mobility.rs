//! Static mobility evaluation

use super::{decisive_utility, mobility, Evaluator, MoveHistory};
use crate::constants::DEFAULT_OPPONENT_WEIGHT;
use crate::position::GameState;
use crate::types::{Player, Score};

/// Own mobility minus discounted opponent mobility: `own - weight * opp`.
///
/// Weights above one score restricting the opponent higher than keeping
/// options open. The default weight is [`DEFAULT_OPPONENT_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedMobility {
    /// Multiplier applied to the opponent's move count.
    pub opponent_weight: f64,
}

impl Default for WeightedMobility {
    fn default() -> Self {
        WeightedMobility {
            opponent_weight: DEFAULT_OPPONENT_WEIGHT,
        }
    }
}

impl<S: GameState> Evaluator<S> for WeightedMobility {
    fn score(&self, state: &S, player: Player, _history: &MoveHistory) -> Score {
        if let Some(utility) = decisive_utility(state, player) {
            return utility;
        }
        let own = mobility(state, player);
        let opp = mobility(state, player.opponent());
        own - self.opponent_weight * opp
    }
}
