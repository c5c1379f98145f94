//! Lighting effects rendered into a staged frame
//!
//! Effects are pure over the injected timestamp, so a frame sampled
//! twice at the same instant is identical.

mod sweep;

use embassy_time::Instant;
pub use sweep::RainbowSweep;

use crate::frame::Frame;

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, now: Instant, frame: &mut Frame);
}
