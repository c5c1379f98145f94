//! Rotating-hue gaming sweep
//!
//! A rainbow that rotates at a fixed angular rate from wall-clock time,
//! offset per channel and per pixel. Because the hue is derived from the
//! timestamp rather than an internal counter, cadence changes alter the
//! sampling rate but never the apparent rotation speed.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::color::{Hsv, hsv2rgb};
use crate::frame::{CHANNEL_COUNT, Frame, PIXELS_PER_CHANNEL};

/// One full trip around the hue wheel (15 degrees per second).
const DEFAULT_CYCLE_MS: u64 = 24_000;
/// Per-channel hue offset: 64 degrees, quantized to the 0-255 wheel.
const CHANNEL_HUE_STEP: u8 = 45;
/// Per-pixel hue offset: 4 degrees, quantized to the 0-255 wheel.
const PIXEL_HUE_STEP: u8 = 3;

/// Gaming sweep effect
///
/// Hue arithmetic runs on the 8-bit hue wheel, so the degree offsets of
/// the original animation are quantized to 256 steps.
#[derive(Debug, Clone)]
pub struct RainbowSweep {
    /// Duration of one complete hue rotation
    cycle_duration: Duration,
    /// Brightness value (0-255)
    value: u8,
    /// Saturation (0-255)
    saturation: u8,
}

impl Default for RainbowSweep {
    fn default() -> Self {
        Self {
            cycle_duration: Duration::from_millis(DEFAULT_CYCLE_MS),
            value: 255,
            saturation: 255,
        }
    }
}

impl RainbowSweep {
    /// Set the cycle duration
    #[must_use]
    pub fn with_cycle_duration(mut self, duration: Duration) -> Self {
        self.cycle_duration = duration;
        self
    }

    /// Set the brightness value
    #[must_use]
    pub fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    /// Set the saturation
    #[must_use]
    pub fn with_saturation(mut self, saturation: u8) -> Self {
        self.saturation = saturation;
        self
    }
}

impl Effect for RainbowSweep {
    fn render(&mut self, now: Instant, frame: &mut Frame) {
        let cycle_ms = self.cycle_duration.as_millis().max(1);
        let progress_ms = now.as_millis() % cycle_ms;
        #[allow(clippy::cast_possible_truncation)]
        let base_hue = ((progress_ms * 255) / cycle_ms) as u8;

        for channel in 0..CHANNEL_COUNT {
            #[allow(clippy::cast_possible_truncation)]
            let channel_hue = base_hue.wrapping_add(CHANNEL_HUE_STEP * channel as u8);
            for pixel in 0..PIXELS_PER_CHANNEL {
                #[allow(clippy::cast_possible_truncation)]
                let hue = channel_hue.wrapping_add(PIXEL_HUE_STEP * pixel as u8);
                let color = hsv2rgb(Hsv {
                    hue,
                    sat: self.saturation,
                    val: self.value,
                });
                frame.set(channel, pixel, color);
            }
        }
    }
}
