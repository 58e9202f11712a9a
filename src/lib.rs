//! Time-bounded adversarial search for two-player games
//!
//! This crate picks moves for two-player, zero-sum, perfect-information
//! games under a hard wall-clock deadline. The embedding game implements
//! [`GameState`]; the engine supplies depth-limited [`minimax`] and
//! [`alphabeta`] searchers, a family of mobility-based evaluators, and
//! [`SearchAgent`], an iterative deepening driver that always has a legal
//! answer ready when the clock runs out.
//!
//! ## Module Organization
//!
//! - `agent` - Iterative deepening driver and its configuration
//! - `clock` - Move clocks and the cooperative search deadline
//! - `constants` - Default depths, weights and time budgets
//! - `error` - Engine error type and result alias
//! - `eval` - Evaluator trait, mobility history and the built-in heuristics
//! - `position` - The [`GameState`] interface games implement
//! - `search` - Fixed-depth minimax and alpha-beta searchers
//! - `types` - Players, scores, search results and counters
//!
//! ## Example
//!
//! A miniature Nim: players alternate taking one or two tokens from a
//! shared pool, and whoever takes the last token wins. Five tokens is a
//! won position, and the agent finds the winning reply well inside a
//! 50ms budget:
//!
//! ```
//! use minimax_engine::{
//!     AgentConfig, CountdownClock, GameState, Player, SearchAgent, WeightedMobility,
//! };
//! use std::time::Duration;
//!
//! #[derive(Clone)]
//! struct Nim {
//!     tokens: u32,
//!     active: Player,
//! }
//!
//! impl GameState for Nim {
//!     type Move = u32;
//!
//!     fn active_player(&self) -> Player {
//!         self.active
//!     }
//!
//!     fn legal_moves(&self, _player: Player) -> Vec<u32> {
//!         (1..=2).filter(|&take| take <= self.tokens).collect()
//!     }
//!
//!     fn forecast(&self, take: u32) -> Self {
//!         Nim {
//!             tokens: self.tokens - take,
//!             active: self.active.opponent(),
//!         }
//!     }
//!
//!     fn is_winner(&self, player: Player) -> bool {
//!         self.tokens == 0 && player != self.active
//!     }
//!
//!     fn is_loser(&self, player: Player) -> bool {
//!         self.tokens == 0 && player == self.active
//!     }
//! }
//!
//! # fn main() -> minimax_engine::EngineResult<()> {
//! let game = Nim { tokens: 5, active: Player::First };
//! let moves = game.legal_moves(Player::First);
//!
//! let mut agent = SearchAgent::new(AgentConfig::default(), WeightedMobility::default())?;
//! let clock = CountdownClock::new(Duration::from_millis(50));
//!
//! let best = agent.select_move(&game, &moves, &clock);
//! assert_eq!(best, Some(2), "taking two leaves a losing pile of three");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod clock;
pub mod constants;
pub mod error;
pub mod eval;
pub mod position;
pub mod search;
pub mod types;

#[cfg(test)]
mod testutil;

pub use agent::{AgentConfig, Decision, SearchAgent};
pub use clock::{CountdownClock, Deadline, MoveClock};
pub use error::{EngineError, EngineResult};
pub use eval::{
    DecayMargin, DecayRatio, Evaluator, MobilityDrop, MobilityPressure, MoveHistory,
    WeightedMobility,
};
pub use position::GameState;
pub use search::{alphabeta, minimax};
pub use types::{Player, Score, SearchMethod, SearchResult, SearchStats};
