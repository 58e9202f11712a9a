//! Move clocks and the search deadline
//!
//! Time control is cooperative: the embedding supplies a remaining-time
//! accessor for each move, the search polls it at the entry of the
//! top-level call and of every recursive layer, and aborts through the
//! error channel once the configured threshold is crossed. No timers,
//! threads or signals are involved.

use std::time::Duration;

use instant::Instant;

use crate::error::{EngineError, EngineResult};

/// Remaining-time accessor supplied per move by the embedding.
///
/// Implemented for closures, so a tournament harness callback can be
/// passed straight through:
/// `agent.select_move(&game, &moves, &|| harness.time_left())`.
pub trait MoveClock {
    /// Milliseconds left on this move's clock. May go negative once the
    /// budget is overrun.
    fn remaining_ms(&self) -> f64;
}

impl<F> MoveClock for F
where
    F: Fn() -> f64,
{
    fn remaining_ms(&self) -> f64 {
        self()
    }
}

/// Fixed per-move budget counting down from construction.
#[derive(Debug, Clone)]
pub struct CountdownClock {
    started: Instant,
    budget_ms: f64,
}

impl CountdownClock {
    /// Start a clock with the given budget.
    pub fn new(budget: Duration) -> Self {
        CountdownClock {
            started: Instant::now(),
            budget_ms: budget.as_secs_f64() * 1_000.0,
        }
    }
}

impl MoveClock for CountdownClock {
    fn remaining_ms(&self) -> f64 {
        self.budget_ms - self.started.elapsed().as_secs_f64() * 1_000.0
    }
}

/// A move clock paired with the abort threshold.
///
/// `check` raises [`EngineError::OutOfTime`] once remaining time drops
/// strictly below the threshold; the recursion unwinds it with `?` and the
/// driver catches it at its outermost frame.
pub struct Deadline<'a> {
    clock: &'a dyn MoveClock,
    threshold_ms: f64,
}

impl<'a> Deadline<'a> {
    pub fn new(clock: &'a dyn MoveClock, threshold_ms: f64) -> Self {
        Deadline {
            clock,
            threshold_ms,
        }
    }

    /// Abort signal if the clock crossed the threshold, `Ok` otherwise.
    pub fn check(&self) -> EngineResult<()> {
        let remaining_ms = self.clock.remaining_ms();
        if remaining_ms < self.threshold_ms {
            return Err(EngineError::OutOfTime {
                remaining_ms,
                threshold_ms: self.threshold_ms,
            });
        }
        Ok(())
    }
}
