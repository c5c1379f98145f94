#![no_std]

pub mod color;
pub mod config;
pub mod controller;
pub mod display;
pub mod effect;
pub mod frame;
pub mod presence;
pub mod runner;
pub mod shutdown;

pub use config::{DeskLightConfig, WARM_WHITE};
pub use controller::{Controller, Mode, Render, TickPlan};
pub use display::{FALLBACK_DISPLAY_ADDR, PRIMARY_DISPLAY_ADDR, open_with_fallback};
pub use effect::{Effect, RainbowSweep};
pub use frame::{CHANNEL_COUNT, Frame, PIXELS_PER_CHANNEL};
pub use presence::PresenceTracker;
pub use runner::{DeskLight, DeskLightError, TickResult, mm_to_cm};
pub use shutdown::ShutdownFlag;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Ranging mode of the time-of-flight sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    Short,
    Medium,
    Long,
}

impl RangeMode {
    /// Vendor register value selecting this mode.
    pub const fn register_value(self) -> u8 {
        match self {
            Self::Short => 1,
            Self::Medium => 2,
            Self::Long => 3,
        }
    }
}

/// Abstract time-of-flight distance sensor
///
/// Implement this trait to support different sensor hardware.
/// The controller loop is generic over this trait and treats any
/// error as fatal.
pub trait DistanceSensor {
    type Error;

    /// Begin continuous ranging in the given mode
    fn start_ranging(&mut self, mode: RangeMode) -> Result<(), Self::Error>;

    /// Latest range reading, in millimeters
    fn distance_mm(&mut self) -> Result<u16, Self::Error>;

    /// Stop continuous ranging
    fn stop_ranging(&mut self) -> Result<(), Self::Error>;
}

/// Abstract addressable LED strip with multiple output channels
///
/// Pixel state is staged by `set_pixel`/`set_all`/`clear` and pushed to
/// the hardware by `show`. The controller loop never reads pixel state
/// back.
pub trait LedStrip {
    type Error;

    /// Declare the pixel count (and gamma correction) of one channel
    fn configure_channel(
        &mut self,
        channel: usize,
        pixel_count: usize,
        gamma_correction: bool,
    ) -> Result<(), Self::Error>;

    /// Set global brightness
    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error>;

    /// Stage one pixel
    fn set_pixel(&mut self, channel: usize, index: usize, color: Rgb) -> Result<(), Self::Error>;

    /// Stage every pixel on every channel to one color
    fn set_all(&mut self, color: Rgb) -> Result<(), Self::Error>;

    /// Stage every pixel to black
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Flush staged pixel state to the hardware
    fn show(&mut self) -> Result<(), Self::Error>;
}
