//! Debounced desk-activity derivation
//!
//! Turns the raw near/far signal into a hysteresis flag: the desk stays
//! "active" for a grace period after the last near reading.

use embassy_time::{Duration, Instant};

/// Tracks whether someone is at the desk.
///
/// `last_near` starts as `None`, so the desk is inactive until the
/// first near reading arrives. This replaces the zero-valued timestamp
/// the cold-start path would otherwise rely on.
#[derive(Debug, Clone)]
pub struct PresenceTracker {
    grace_period: Duration,
    last_near: Option<Instant>,
}

impl PresenceTracker {
    pub const fn new(grace_period: Duration) -> Self {
        Self {
            grace_period,
            last_near: None,
        }
    }

    /// Feed one near/far observation and return the debounced state.
    ///
    /// `now` must be monotonically non-decreasing across calls.
    pub fn observe(&mut self, near: bool, now: Instant) -> bool {
        if near {
            self.last_near = Some(now);
        }
        match self.last_near {
            Some(at) => now.duration_since(at) <= self.grace_period,
            None => false,
        }
    }

    /// Time since the last near reading, if one was ever seen.
    pub fn inactive_for(&self, now: Instant) -> Option<Duration> {
        self.last_near.map(|at| now.duration_since(at))
    }
}
