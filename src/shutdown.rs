//! Signal-safe shutdown request flag
//!
//! An interrupt handler only calls [`ShutdownFlag::request`]; the loop
//! observes the flag at the top of each tick and performs hardware
//! cleanup synchronously on its own thread. No driver I/O ever runs in
//! signal context.

use core::sync::atomic::{AtomicBool, Ordering};

/// Cancellation flag shared between a signal handler and the loop.
///
/// `const`-constructible so it can live in a `static`.
#[derive(Debug)]
pub struct ShutdownFlag {
    requested: AtomicBool,
}

impl ShutdownFlag {
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Request shutdown. Safe to call from signal context.
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

impl Default for ShutdownFlag {
    fn default() -> Self {
        Self::new()
    }
}
