//! Hardware Seams
//!
//! The four capabilities the navigation core consumes. Every call is blocking
//! and assumed to succeed; drivers that can fail report it themselves and carry
//! on. Timed holds go through `embedded_hal::delay::DelayNs` instead of a trait
//! of our own.

use crate::system::distance::DistanceSample;
use crate::system::drive_command::Direction;
use crate::system::indicator::Rgb;

/// Distance sensor
pub trait RangeFinder {
    /// Takes one reading. May block for the sensor's own settling time.
    fn read_distance(&mut self) -> DistanceSample;
}

/// Operator stop request, e.g. a button
pub trait ExitSignal {
    /// True when termination is requested. Debouncing is up to the implementor.
    fn read_exit_signal(&mut self) -> bool;
}

/// Track drive
///
/// Commands are fire-and-forget: the last one wins until superseded.
pub trait Drive {
    /// Drives in `direction` at a normalized `speed` (0.0-1.0)
    fn drive(&mut self, direction: Direction, speed: f64);

    /// Stops both tracks
    fn stop(&mut self);
}

/// Underlighting, all positions set at once
pub trait Underlighting {
    /// Shows `color` on every position
    fn set_underlighting(&mut self, color: Rgb);

    /// Turns every position off
    fn clear_underlighting(&mut self);
}
