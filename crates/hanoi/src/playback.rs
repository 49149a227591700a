//! Auto-solve playback plan.
//!
//! The plan is a FIFO queue of precomputed moves. The core never
//! sleeps: an external driver (the TUI's timer task) waits
//! [`STEP_DELAY_MS`] between calls to [`Game::playback_step`], so the
//! cancellation and single-pending-step semantics stay deterministic
//! and clock-free in tests.
//!
//! [`Game::playback_step`]: crate::Game::playback_step

use crate::types::Move;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fixed delay between auto-solve moves, in milliseconds.
pub const STEP_DELAY_MS: u64 = 800;

/// A precomputed move plan consumed one move at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playback {
    plan: VecDeque<Move>,
}

impl Playback {
    /// Creates a playback over a generated move plan.
    pub fn new(plan: Vec<Move>) -> Self {
        Self { plan: plan.into() }
    }

    /// Pops the next planned move, front first.
    pub fn next(&mut self) -> Option<Move> {
        self.plan.pop_front()
    }

    /// Returns the number of moves still queued.
    pub fn remaining(&self) -> usize {
        self.plan.len()
    }

    /// Checks whether the plan is exhausted.
    pub fn is_done(&self) -> bool {
        self.plan.is_empty()
    }
}
