//! Drive Command Module
//!
//! Directions the navigation core can ask the drive for. Speeds travel alongside
//! as a normalized magnitude (0.0-1.0); the drive maps them to its own duty range.

/// Direction of a drive command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum Direction {
    /// Both tracks forward
    Forward,
    /// Both tracks backward
    Backward,
    /// Turn right in place
    TurnRight,
}
