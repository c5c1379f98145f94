//! Per-tick mode selection
//!
//! Maps one distance sample onto exactly one output mode per tick,
//! in strict priority order: toggle gesture, gaming, lamp, off.

use embassy_time::{Duration, Instant};

use crate::config::DeskLightConfig;
use crate::presence::PresenceTracker;

const MODE_NAME_TOGGLED_ON: &str = "gaming_toggle_on";
const MODE_NAME_TOGGLED_OFF: &str = "gaming_toggle_off";
const MODE_NAME_GAMING: &str = "gaming";
const MODE_NAME_LAMP: &str = "lamp";
const MODE_NAME_OFF: &str = "off";

/// Mode chosen for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Near-range gesture latched gaming mode on
    ToggledOn,
    /// Near-range gesture latched gaming mode off
    ToggledOff,
    /// Gaming latch set and desk active
    Gaming,
    /// Static warm lamp
    Lamp,
    /// Strip dark
    Off,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToggledOn => MODE_NAME_TOGGLED_ON,
            Self::ToggledOff => MODE_NAME_TOGGLED_OFF,
            Self::Gaming => MODE_NAME_GAMING,
            Self::Lamp => MODE_NAME_LAMP,
            Self::Off => MODE_NAME_OFF,
        }
    }
}

/// What the loop should put on the strip this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// One frame of the rotating-hue sweep
    Gaming,
    /// The static lamp color on every pixel
    Lamp,
    /// All pixels dark
    Clear,
}

/// Outcome of classifying one distance sample.
#[derive(Debug, Clone, Copy)]
pub struct TickPlan {
    pub mode: Mode,
    pub render: Render,
    /// Cadence until the next tick
    pub cadence: Duration,
    /// Extra hold after a toggle gesture, zero otherwise
    pub toggle_hold: Duration,
}

impl TickPlan {
    /// Total time to sleep before the next tick.
    pub fn sleep_duration(&self) -> Duration {
        self.toggle_hold + self.cadence
    }
}

/// Presence classification state machine
///
/// Owns the gaming latch, the debounced activity flag and the current
/// cadence. Pure over `(distance_cm, now)`; rendering and sleeping are
/// the caller's job.
#[derive(Debug, Clone)]
pub struct Controller {
    config: DeskLightConfig,
    presence: PresenceTracker,
    gaming_enabled: bool,
    active_desk: bool,
    cadence: Duration,
}

impl Controller {
    pub fn new(config: DeskLightConfig) -> Self {
        Self {
            presence: PresenceTracker::new(config.grace_period),
            gaming_enabled: false,
            active_desk: false,
            cadence: config.slow_cadence,
            config,
        }
    }

    /// Classify one distance sample.
    ///
    /// Exactly one branch fires per call, in priority order. The first
    /// branch wins even when later conditions would also hold.
    pub fn observe(&mut self, distance_cm: u16, now: Instant) -> TickPlan {
        let near = distance_cm < self.config.far_threshold_cm;
        self.active_desk = self.presence.observe(near, now);

        if distance_cm < self.config.gaming_threshold_cm {
            self.gaming_enabled = !self.gaming_enabled;
            return if self.gaming_enabled {
                self.cadence = self.config.fast_cadence;
                self.plan(Mode::ToggledOn, Render::Gaming, self.config.toggle_hold)
            } else {
                self.cadence = self.config.slow_cadence;
                self.plan(Mode::ToggledOff, Render::Clear, self.config.toggle_hold)
            };
        }

        if self.gaming_enabled && self.active_desk {
            self.cadence = self.config.fast_cadence;
            return self.plan(Mode::Gaming, Render::Gaming, Duration::from_millis(0));
        }

        if (near && !self.gaming_enabled) || self.active_desk {
            self.cadence = self.config.slow_cadence;
            return self.plan(Mode::Lamp, Render::Lamp, Duration::from_millis(0));
        }

        // Cadence keeps its previous value in the off branch.
        self.plan(Mode::Off, Render::Clear, Duration::from_millis(0))
    }

    fn plan(&self, mode: Mode, render: Render, toggle_hold: Duration) -> TickPlan {
        TickPlan {
            mode,
            render,
            cadence: self.cadence,
            toggle_hold,
        }
    }

    /// Current state of the gaming latch.
    pub const fn gaming_enabled(&self) -> bool {
        self.gaming_enabled
    }

    /// Debounced desk-activity flag as of the last observation.
    pub const fn active_desk(&self) -> bool {
        self.active_desk
    }

    /// Current tick cadence.
    pub const fn cadence(&self) -> Duration {
        self.cadence
    }

    pub const fn presence(&self) -> &PresenceTracker {
        &self.presence
    }
}
