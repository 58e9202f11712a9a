//! Shared fixtures for unit tests
//!
//! Search tests run against [`ScriptedGame`], a hand-written game tree
//! addressed by node index, with per-player move edges and optional
//! decided winners. Evaluator tests use [`FixedCounts`], a position that
//! reports fixed mobility numbers without any tree behind them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clock::MoveClock;
use crate::eval::{Evaluator, MoveHistory};
use crate::position::GameState;
use crate::types::{Player, Score};

/// A game tree spelled out node by node.
pub(crate) struct ScriptedGame {
    pub(crate) nodes: Vec<ScriptedNode>,
}

/// One tree node: outgoing `(move id, target node)` edges per player,
/// plus an optional decided winner.
pub(crate) struct ScriptedNode {
    pub(crate) edges: [Vec<(u32, usize)>; 2],
    pub(crate) winner: Option<Player>,
}

/// Undecided node with the given edges for each player.
pub(crate) fn branch(first: &[(u32, usize)], second: &[(u32, usize)]) -> ScriptedNode {
    ScriptedNode {
        edges: [first.to_vec(), second.to_vec()],
        winner: None,
    }
}

/// Undecided node with no moves for either player.
pub(crate) fn leaf() -> ScriptedNode {
    branch(&[], &[])
}

/// Decided node; neither player has moves here.
pub(crate) fn win_node(winner: Player) -> ScriptedNode {
    ScriptedNode {
        edges: [Vec::new(), Vec::new()],
        winner: Some(winner),
    }
}

impl ScriptedGame {
    /// Position handle at `node` with `active` to move.
    ///
    /// Consumes the shared handle; clone the `Rc` first when a test
    /// needs more than one root.
    pub(crate) fn state(self: Rc<Self>, node: usize, active: Player) -> ScriptedState {
        ScriptedState {
            game: self,
            node,
            active,
        }
    }
}

#[derive(Clone)]
pub(crate) struct ScriptedState {
    game: Rc<ScriptedGame>,
    pub(crate) node: usize,
    active: Player,
}

impl ScriptedState {
    fn winner(&self) -> Option<Player> {
        self.game.nodes[self.node].winner
    }
}

impl GameState for ScriptedState {
    type Move = u32;

    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self, player: Player) -> Vec<u32> {
        if self.winner().is_some() {
            return Vec::new();
        }
        self.game.nodes[self.node].edges[player.index()]
            .iter()
            .map(|&(mv, _)| mv)
            .collect()
    }

    fn forecast(&self, mv: u32) -> Self {
        let edges = &self.game.nodes[self.node].edges[self.active.index()];
        let &(_, target) = edges
            .iter()
            .find(|(id, _)| *id == mv)
            .expect("forecast move is not scripted at this node");
        ScriptedState {
            game: Rc::clone(&self.game),
            node: target,
            active: self.active.opponent(),
        }
    }

    fn is_winner(&self, player: Player) -> bool {
        self.winner() == Some(player)
    }

    fn is_loser(&self, player: Player) -> bool {
        matches!(self.winner(), Some(w) if w != player)
    }
}

/// Evaluator reading scores from a per-node table.
///
/// Table entries are from First's perspective and negated for Second;
/// decided nodes fall back to the position's utility.
#[derive(Debug)]
pub(crate) struct NodeScores(pub(crate) Vec<Score>);

impl Evaluator<ScriptedState> for NodeScores {
    fn score(&self, state: &ScriptedState, player: Player, _history: &MoveHistory) -> Score {
        if state.is_winner(player) || state.is_loser(player) {
            return state.utility(player);
        }
        match player {
            Player::First => self.0[state.node],
            Player::Second => -self.0[state.node],
        }
    }
}

/// Evaluator that only counts how often it is consulted.
#[derive(Default)]
pub(crate) struct CountingEval {
    pub(crate) calls: Rc<Cell<u64>>,
}

impl<S: GameState> Evaluator<S> for CountingEval {
    fn score(&self, _state: &S, _player: Player, _history: &MoveHistory) -> Score {
        self.calls.set(self.calls.get() + 1);
        0.0
    }
}

/// Evaluator recording each side's latest history entry at every call.
#[derive(Default)]
pub(crate) struct HistoryProbe {
    pub(crate) seen: Rc<RefCell<Vec<(Option<usize>, Option<usize>)>>>,
}

impl<S: GameState> Evaluator<S> for HistoryProbe {
    fn score(&self, _state: &S, _player: Player, history: &MoveHistory) -> Score {
        self.seen.borrow_mut().push((
            history.latest(Player::First),
            history.latest(Player::Second),
        ));
        0.0
    }
}

/// Clock with ample time for a fixed number of reads and none after,
/// for steering exactly how many deadline checks a search survives.
pub(crate) struct FuseClock {
    reads_left: Cell<u64>,
}

impl FuseClock {
    pub(crate) fn new(reads: u64) -> Self {
        FuseClock {
            reads_left: Cell::new(reads),
        }
    }
}

impl MoveClock for FuseClock {
    fn remaining_ms(&self) -> f64 {
        let left = self.reads_left.get();
        if left == 0 {
            return 0.0;
        }
        self.reads_left.set(left - 1);
        1000.0
    }
}

/// Position reporting fixed mobility counts, never meant to be expanded.
#[derive(Clone)]
pub(crate) struct FixedCounts {
    counts: [usize; 2],
    winner: Option<Player>,
}

impl FixedCounts {
    /// Undecided position where First, the active player, has `own`
    /// moves and Second has `opp`.
    pub(crate) fn open(own: usize, opp: usize) -> Self {
        FixedCounts {
            counts: [own, opp],
            winner: None,
        }
    }
}

/// Decided position, moveless for both sides.
pub(crate) fn won_by(winner: Player) -> FixedCounts {
    FixedCounts {
        counts: [0, 0],
        winner: Some(winner),
    }
}

impl GameState for FixedCounts {
    type Move = u32;

    fn active_player(&self) -> Player {
        Player::First
    }

    fn legal_moves(&self, player: Player) -> Vec<u32> {
        if self.winner.is_some() {
            return Vec::new();
        }
        (0..self.counts[player.index()] as u32).collect()
    }

    fn forecast(&self, _mv: u32) -> Self {
        unreachable!("fixed-count positions are never expanded")
    }

    fn is_winner(&self, player: Player) -> bool {
        self.winner == Some(player)
    }

    fn is_loser(&self, player: Player) -> bool {
        matches!(self.winner, Some(w) if w != player)
    }
}
