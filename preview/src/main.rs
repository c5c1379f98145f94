//! Terminal preview for the desk light controller
//!
//! Drives the real loop against a scripted distance profile and renders
//! the strip as ANSI-colored blocks, one line per tick. No hardware
//! required; the loop shuts itself down when the script runs out.

use std::convert::Infallible;
use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration as StdDuration;

use desk_presence_light::display::DisplayOpenError;
use desk_presence_light::{
    CHANNEL_COUNT, DeskLight, DeskLightConfig, DistanceSensor, FALLBACK_DISPLAY_ADDR, Instant,
    LedStrip, PIXELS_PER_CHANNEL, PRIMARY_DISPLAY_ADDR, RangeMode, Rgb, ShutdownFlag,
    open_with_fallback,
};

static SHUTDOWN: ShutdownFlag = ShutdownFlag::new();

/// Scripted scenario: (time spent at this reading in ms, distance in mm).
const SCRIPT: &[(u64, u16)] = &[
    (3_000, 2_000), // empty room
    (6_000, 900),   // sit down at the desk
    (500, 50),      // wave at the sensor: gaming on
    (8_000, 900),   // game for a while
    (500, 50),      // wave again: gaming off
    (4_000, 900),   // keep sitting, back to the lamp
    (8_000, 2_000), // walk away; lamp lingers for the grace period
];

/// Sensor that replays [`SCRIPT`] against wall-clock time.
struct ScriptedSensor {
    started: Instant,
}

impl DistanceSensor for ScriptedSensor {
    type Error = Infallible;

    fn start_ranging(&mut self, _mode: RangeMode) -> Result<(), Infallible> {
        Ok(())
    }

    fn distance_mm(&mut self) -> Result<u16, Infallible> {
        let elapsed = Instant::now().duration_since(self.started).as_millis();
        let mut end = 0;
        for (span, mm) in SCRIPT {
            end += span;
            if elapsed < end {
                return Ok(*mm);
            }
        }
        Ok(2_000)
    }

    fn stop_ranging(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Strip that stages pixels like the real driver and "shows" them by
/// keeping a live copy for the terminal renderer.
struct TerminalStrip {
    staged: [[Rgb; PIXELS_PER_CHANNEL]; CHANNEL_COUNT],
    live: [[Rgb; PIXELS_PER_CHANNEL]; CHANNEL_COUNT],
}

impl TerminalStrip {
    fn new() -> Self {
        Self {
            staged: [[BLACK; PIXELS_PER_CHANNEL]; CHANNEL_COUNT],
            live: [[BLACK; PIXELS_PER_CHANNEL]; CHANNEL_COUNT],
        }
    }

    /// Last shown state as one row of colored blocks per channel.
    fn ansi_row(&self) -> String {
        use fmt::Write as _;

        let mut out = String::new();
        for (channel, pixels) in self.live.iter().enumerate() {
            if channel > 0 {
                out.push(' ');
            }
            for pixel in pixels {
                let _ = write!(out, "\x1b[48;2;{};{};{}m ", pixel.r, pixel.g, pixel.b);
            }
            out.push_str("\x1b[0m");
        }
        out
    }
}

impl LedStrip for TerminalStrip {
    type Error = Infallible;

    fn configure_channel(
        &mut self,
        _channel: usize,
        _pixel_count: usize,
        _gamma_correction: bool,
    ) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_brightness(&mut self, _brightness: u8) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_pixel(&mut self, channel: usize, index: usize, color: Rgb) -> Result<(), Infallible> {
        self.staged[channel][index] = color;
        Ok(())
    }

    fn set_all(&mut self, color: Rgb) -> Result<(), Infallible> {
        for channel in &mut self.staged {
            channel.fill(color);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        for channel in &mut self.staged {
            channel.fill(BLACK);
        }
        Ok(())
    }

    fn show(&mut self) -> Result<(), Infallible> {
        self.live = self.staged;
        Ok(())
    }
}

#[derive(Debug)]
struct DisplayNotFound(u8);

impl fmt::Display for DisplayNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no display found at 0x{:02X}", self.0)
    }
}

impl Error for DisplayNotFound {}

impl DisplayOpenError for DisplayNotFound {
    fn is_not_found(&self) -> bool {
        true
    }
}

struct SimulatedOled {
    addr: u8,
}

/// The simulated rig has its address jumper on the secondary address,
/// so the primary probe fails and the fallback path gets exercised.
fn open_display(addr: u8) -> Result<SimulatedOled, DisplayNotFound> {
    if addr == FALLBACK_DISPLAY_ADDR {
        Ok(SimulatedOled { addr })
    } else {
        println!("no display at 0x{addr:02X}, trying 0x{FALLBACK_DISPLAY_ADDR:02X}...");
        Err(DisplayNotFound(addr))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("desk-light-preview: scripted run, exits when the script ends\n");

    let display = open_with_fallback(open_display, PRIMARY_DISPLAY_ADDR, FALLBACK_DISPLAY_ADDR)?;
    println!("status display ready at 0x{:02X}\n", display.addr);

    let started = Instant::now();
    let mut desk = DeskLight::new(
        ScriptedSensor { started },
        TerminalStrip::new(),
        DeskLightConfig::default(),
    );
    desk.start()?;

    let script_end: u64 = SCRIPT.iter().map(|(span, _)| span).sum();
    loop {
        if SHUTDOWN.is_requested() {
            break;
        }
        let now = Instant::now();
        if now.duration_since(started).as_millis() >= script_end {
            SHUTDOWN.request();
            continue;
        }

        let result = desk.tick(now)?;
        println!(
            "{:6}ms {:>17} {:>4}cm  {}",
            now.duration_since(started).as_millis(),
            result.mode.as_str(),
            result.distance_cm,
            desk.strip().ansi_row()
        );
        thread::sleep(StdDuration::from_millis(result.sleep.as_millis()));
    }

    desk.shutdown()?;
    println!("\nstrip cleared, sensor stopped");
    Ok(())
}
