use embassy_time::Duration;

use crate::{RangeMode, Rgb};

/// Warm white-orange tone used by the normal lamp mode.
pub const WARM_WHITE: Rgb = Rgb {
    r: 255,
    g: 141,
    b: 41,
};

/// Configuration for the desk light controller
///
/// All tunables are startup constants; there is no runtime
/// reconfiguration path.
#[derive(Debug, Clone)]
pub struct DeskLightConfig {
    /// Readings below this count as "someone is near the desk" (cm)
    pub far_threshold_cm: u16,
    /// Readings below this count as a "wave to toggle" gesture (cm)
    pub gaming_threshold_cm: u16,
    /// How long `active_desk` stays true after the last near reading
    pub grace_period: Duration,
    /// Tick cadence while the gaming sweep is animating
    pub fast_cadence: Duration,
    /// Tick cadence for the static lamp and after a toggle-off
    pub slow_cadence: Duration,
    /// Extra hold after a toggle gesture, so a lingering hand does not
    /// flip the latch again on the very next tick
    pub toggle_hold: Duration,
    /// Color of the normal lamp mode
    pub lamp_color: Rgb,
    /// Global strip brightness
    pub brightness: u8,
    /// Sensor ranging mode
    pub range_mode: RangeMode,
}

impl Default for DeskLightConfig {
    fn default() -> Self {
        Self {
            far_threshold_cm: 140,
            gaming_threshold_cm: 10,
            grace_period: Duration::from_secs(5),
            fast_cadence: Duration::from_millis(100),
            slow_cadence: Duration::from_secs(1),
            toggle_hold: Duration::from_secs(1),
            lamp_color: WARM_WHITE,
            brightness: 1,
            range_mode: RangeMode::Long,
        }
    }
}
