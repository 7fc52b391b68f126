//! Debounce primitive
//!
//! A re-armable scheduled value: every `push` replaces the pending value and
//! restarts the quiet period; `poll` hands the value out once the period has
//! elapsed with no further input. Time is passed in explicitly so the UI loop
//! can drive it from its own clock and tests never need to sleep.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    last_emitted: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_emitted: None,
        }
    }

    /// Create a debouncer that treats `value` as already published, so a
    /// settle on the same value does not fire again.
    pub fn with_initial(delay: Duration, value: T) -> Self {
        Self {
            delay,
            pending: None,
            last_emitted: Some(value),
        }
    }

    /// Replace the pending value and restart the timer
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Publish the pending value if it has been stable for the full delay.
    ///
    /// A settled value equal to the last published one is consumed silently.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = match &self.pending {
            Some((_, armed_at)) => now.saturating_duration_since(*armed_at) >= self.delay,
            None => false,
        };
        if !ready {
            return None;
        }

        let (value, _) = self.pending.take()?;
        if self.last_emitted.as_ref() == Some(&value) {
            return None;
        }

        self.last_emitted = Some(value.clone());
        Some(value)
    }

    /// When the pending value will settle, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, armed_at)| *armed_at + self.delay)
    }
}
