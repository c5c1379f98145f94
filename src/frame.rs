//! Staged pixel state for the multi-channel strip

use crate::{LedStrip, Rgb};

/// Number of output channels on the strip.
pub const CHANNEL_COUNT: usize = 4;

/// Addressable pixels per channel.
pub const PIXELS_PER_CHANNEL: usize = 16;

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// In-memory pixel grid, flushed to the hardware in one `show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: [[Rgb; PIXELS_PER_CHANNEL]; CHANNEL_COUNT],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            pixels: [[BLACK; PIXELS_PER_CHANNEL]; CHANNEL_COUNT],
        }
    }

    /// Stage one pixel. Panics if `channel` or `pixel` is out of range.
    pub fn set(&mut self, channel: usize, pixel: usize, color: Rgb) {
        self.pixels[channel][pixel] = color;
    }

    pub fn get(&self, channel: usize, pixel: usize) -> Rgb {
        self.pixels[channel][pixel]
    }

    /// Stage every pixel on every channel to one color.
    pub fn fill(&mut self, color: Rgb) {
        for channel in &mut self.pixels {
            channel.fill(color);
        }
    }

    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Pixels of one channel.
    pub fn channel(&self, channel: usize) -> &[Rgb] {
        &self.pixels[channel]
    }

    /// Push the staged grid to the strip and flush once.
    pub fn flush_to<L: LedStrip>(&self, strip: &mut L) -> Result<(), L::Error> {
        for (channel, pixels) in self.pixels.iter().enumerate() {
            for (index, color) in pixels.iter().enumerate() {
                strip.set_pixel(channel, index, *color)?;
            }
        }
        strip.show()
    }
}
