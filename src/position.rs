//! External game-state interface
//!
//! The engine never owns a board. The embedding game exposes positions
//! through [`GameState`]; the engine only enumerates legal moves, forecasts
//! successors and asks terminal questions through this trait.

use std::fmt;

use crate::types::{Player, Score};

/// A position in a two-player, zero-sum, perfect-information,
/// alternating-move game.
///
/// `forecast` returns a fresh position with a move applied and the turn
/// passed, leaving the original untouched, so implementations should make
/// cloning cheap. Legal moves must come back in a stable, game-defined
/// order: the search breaks score ties by first strict improvement, which
/// makes enumeration order the tie-break.
pub trait GameState: Clone {
    /// Game-defined move representation.
    type Move: Copy + PartialEq + fmt::Debug;

    /// Player whose turn it is at this position.
    fn active_player(&self) -> Player;

    /// Player waiting for their turn.
    fn inactive_player(&self) -> Player {
        self.active_player().opponent()
    }

    /// Moves available to `player` at this position, in stable order.
    fn legal_moves(&self, player: Player) -> Vec<Self::Move>;

    /// A new position with `mv` applied and the turn passed.
    fn forecast(&self, mv: Self::Move) -> Self;

    /// Whether `player` has won at this position.
    fn is_winner(&self, player: Player) -> bool;

    /// Whether `player` has lost at this position.
    fn is_loser(&self, player: Player) -> bool;

    /// Value of this position for `player` once it is decisive; zero for
    /// undecided positions.
    fn utility(&self, player: Player) -> Score {
        if self.is_winner(player) {
            Score::INFINITY
        } else if self.is_loser(player) {
            Score::NEG_INFINITY
        } else {
            0.0
        }
    }
}
