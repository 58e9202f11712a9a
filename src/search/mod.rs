//! Fixed-depth adversarial tree search
//!
//! Both searchers score every position from the perspective of the player
//! who was active at the top-level call, no matter whose turn it is at the
//! node being expanded. They share one timeout discipline: the deadline is
//! polled at the entry of the top-level call and of every recursive layer,
//! and an expired clock unwinds the whole search as an error so the caller
//! can salvage the best finished result.
//!
//! ## Module Organization
//!
//! - `minimax` - Full-width depth-limited minimax
//! - `alphabeta` - The same search with an alpha-beta pruning window

mod alphabeta;
mod minimax;

pub use alphabeta::alphabeta;
pub use minimax::minimax;
