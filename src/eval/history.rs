//! Per-player mobility history
//!
//! Trend heuristics compare a side's current mobility against counts
//! recorded higher up the active search path. The search pushes a player's
//! legal-move count before descending into that ply's children and pops it
//! on the way back out, so an evaluator at a leaf can peek at each side's
//! most recent count.

use crate::types::Player;

/// Stack of observed legal-move counts per player, scoped to one top-level
/// search call.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    counts: [Vec<usize>; 2],
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` moves for `player` before descending a ply.
    pub fn push(&mut self, player: Player, count: usize) {
        self.counts[player.index()].push(count);
    }

    /// Discard the most recent count for `player` when its ply returns.
    pub fn pop(&mut self, player: Player) -> Option<usize> {
        self.counts[player.index()].pop()
    }

    /// Most recent recorded count for `player`, if any.
    pub fn latest(&self, player: Player) -> Option<usize> {
        self.counts[player.index()].last().copied()
    }

    /// Number of counts currently recorded for `player`.
    pub fn recorded(&self, player: Player) -> usize {
        self.counts[player.index()].len()
    }
}
