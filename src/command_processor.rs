//! Command processing module
//!
//! Drains validated requests from the queue and applies them to the engine.
//! Runs on the task that owns the engine, so no other context ever touches
//! the effect state directly.

use crate::engine::EffectEngine;
use crate::queue::RequestQueue;

/// Applies queued requests to the engine
pub struct CommandProcessor<'a, const SIZE: usize> {
    queue: &'a RequestQueue<SIZE>,
}

impl<'a, const SIZE: usize> CommandProcessor<'a, SIZE> {
    /// Create a processor draining `queue`
    pub const fn new(queue: &'a RequestQueue<SIZE>) -> Self {
        Self { queue }
    }

    /// Apply all pending requests (non-blocking).
    ///
    /// Returns the number of requests applied.
    pub fn process_pending(&mut self, engine: &mut EffectEngine) -> usize {
        let mut applied = 0;
        while let Some(request) = self.queue.take() {
            engine.apply(&request);
            applied += 1;
        }
        applied
    }
}
