//! Status display bring-up
//!
//! The OLED sits at one of two bus addresses depending on the solder
//! jumper, so startup probes the primary address and falls back to the
//! secondary on a not-found error. This is a one-time startup concern;
//! the loop never writes to the display afterwards.

/// Primary bus address of the status display.
pub const PRIMARY_DISPLAY_ADDR: u8 = 0x3C;

/// Fallback bus address tried when the primary is not populated.
pub const FALLBACK_DISPLAY_ADDR: u8 = 0x3D;

/// Error contract for opening a display.
///
/// Only a not-found condition triggers the fallback probe; every other
/// error aborts startup.
pub trait DisplayOpenError {
    fn is_not_found(&self) -> bool;
}

/// Open a display at `primary`, retrying once at `fallback` when the
/// device is not found there.
pub fn open_with_fallback<D, E, F>(mut open: F, primary: u8, fallback: u8) -> Result<D, E>
where
    E: DisplayOpenError,
    F: FnMut(u8) -> Result<D, E>,
{
    match open(primary) {
        Ok(display) => Ok(display),
        Err(err) if err.is_not_found() => open(fallback),
        Err(err) => Err(err),
    }
}
