//! The polling loop driver
//!
//! Owns the sensor, the strip and the classification state, and runs
//! one tick at a time: read distance, classify, render, report how long
//! to sleep. The caller is responsible for sleeping/waiting between
//! ticks and for wiring a [`ShutdownFlag`] to its platform's interrupt
//! signal.

use core::fmt;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::DeskLightConfig;
use crate::controller::{Controller, Mode, Render};
use crate::effect::{Effect, RainbowSweep};
use crate::frame::{CHANNEL_COUNT, Frame, PIXELS_PER_CHANNEL};
use crate::shutdown::ShutdownFlag;
use crate::{DistanceSensor, LedStrip};

/// Convert the sensor's native millimeter reading to whole centimeters.
///
/// Integer division: sub-centimeter precision is deliberately discarded,
/// so thresholds compare against whole centimeters only.
pub const fn mm_to_cm(mm: u16) -> u16 {
    mm / 10
}

/// Fatal hardware error raised from the loop.
///
/// There is no retry path; the loop propagates the first failure out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskLightError<SE, LE> {
    Sensor(SE),
    Strip(LE),
}

impl<SE: fmt::Display, LE: fmt::Display> fmt::Display for DeskLightError<SE, LE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(err) => write!(f, "distance sensor error: {err}"),
            Self::Strip(err) => write!(f, "led strip error: {err}"),
        }
    }
}

impl<SE: fmt::Debug + fmt::Display, LE: fmt::Debug + fmt::Display> core::error::Error
    for DeskLightError<SE, LE>
{
}

/// Result of one loop tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Mode that fired this tick
    pub mode: Mode,
    /// Distance sample the decision was based on
    pub distance_cm: u16,
    /// How long to wait before the next tick (cadence plus any
    /// toggle hold)
    pub sleep: Duration,
}

/// Desk light loop driver
///
/// # Usage
///
/// ```ignore
/// let mut desk = DeskLight::new(sensor, strip, DeskLightConfig::default());
/// desk.start()?;
/// while !shutdown.is_requested() {
///     let result = desk.tick(Instant::now())?;
///     sleep(result.sleep);
/// }
/// desk.shutdown()?;
/// ```
pub struct DeskLight<S: DistanceSensor, L: LedStrip> {
    sensor: S,
    strip: L,
    controller: Controller,
    sweep: RainbowSweep,
    frame: Frame,
    config: DeskLightConfig,
}

impl<S: DistanceSensor, L: LedStrip> DeskLight<S, L> {
    pub fn new(sensor: S, strip: L, config: DeskLightConfig) -> Self {
        Self {
            sensor,
            strip,
            controller: Controller::new(config.clone()),
            sweep: RainbowSweep::default(),
            frame: Frame::new(),
            config,
        }
    }

    /// Bring up the hardware: configure channels, set brightness and
    /// start continuous ranging.
    pub fn start(&mut self) -> Result<(), DeskLightError<S::Error, L::Error>> {
        for channel in 0..CHANNEL_COUNT {
            self.strip
                .configure_channel(channel, PIXELS_PER_CHANNEL, false)
                .map_err(DeskLightError::Strip)?;
        }
        self.strip
            .set_brightness(self.config.brightness)
            .map_err(DeskLightError::Strip)?;
        self.sensor
            .start_ranging(self.config.range_mode)
            .map_err(DeskLightError::Sensor)?;
        Ok(())
    }

    /// Run one tick: read distance, classify, render the chosen mode.
    ///
    /// Within a tick the sensor read always precedes mode selection,
    /// which precedes rendering. The caller sleeps for
    /// `TickResult::sleep` before the next call.
    pub fn tick(
        &mut self,
        now: Instant,
    ) -> Result<TickResult, DeskLightError<S::Error, L::Error>> {
        let distance_mm = self.sensor.distance_mm().map_err(DeskLightError::Sensor)?;
        let distance_cm = mm_to_cm(distance_mm);

        let plan = self.controller.observe(distance_cm, now);

        #[cfg(feature = "esp32-log")]
        {
            let inactive_ms = self
                .controller
                .presence()
                .inactive_for(now)
                .map_or(u64::MAX, |d| d.as_millis());
            println!(
                "distance: {}cm, inactive: {}ms, active desk: {}, mode: {}",
                distance_cm,
                inactive_ms,
                self.controller.active_desk(),
                plan.mode.as_str()
            );
        }

        match plan.render {
            Render::Gaming => {
                self.sweep.render(now, &mut self.frame);
                self.frame
                    .flush_to(&mut self.strip)
                    .map_err(DeskLightError::Strip)?;
            }
            Render::Lamp => {
                self.strip
                    .set_all(self.config.lamp_color)
                    .map_err(DeskLightError::Strip)?;
                self.strip.show().map_err(DeskLightError::Strip)?;
            }
            Render::Clear => {
                self.strip.clear().map_err(DeskLightError::Strip)?;
                self.strip.show().map_err(DeskLightError::Strip)?;
            }
        }

        Ok(TickResult {
            mode: plan.mode,
            distance_cm,
            sleep: plan.sleep_duration(),
        })
    }

    /// Stop ranging and darken the strip.
    ///
    /// Runs on the loop thread, never in signal context.
    pub fn shutdown(&mut self) -> Result<(), DeskLightError<S::Error, L::Error>> {
        self.sensor.stop_ranging().map_err(DeskLightError::Sensor)?;
        self.strip.clear().map_err(DeskLightError::Strip)?;
        self.strip.show().map_err(DeskLightError::Strip)
    }

    /// Drive the loop until `flag` is raised, then clean up.
    ///
    /// The flag is observed at the top of each tick, so a signal
    /// delivered mid-sleep stops the loop before the next sensor read.
    pub fn run<NowFn, SleepFn>(
        &mut self,
        flag: &ShutdownFlag,
        mut now_fn: NowFn,
        mut sleep_fn: SleepFn,
    ) -> Result<(), DeskLightError<S::Error, L::Error>>
    where
        NowFn: FnMut() -> Instant,
        SleepFn: FnMut(Duration),
    {
        while !flag.is_requested() {
            let result = self.tick(now_fn())?;
            sleep_fn(result.sleep);
        }
        self.shutdown()
    }

    /// Classification state, for observation.
    pub const fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Get a reference to the sensor.
    pub const fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get a reference to the strip.
    pub const fn strip(&self) -> &L {
        &self.strip
    }
}
