//! Underlighting status colors
//!
//! The underlighting shows the current phase of travel:
//! - Green: cruising forward
//! - Red: obstacle detected or invalid reading, stopped and backing off
//! - Yellow: turning away

/// An RGB triple, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub struct Rgb {
    /// Red channel level
    pub red: u8,
    /// Green channel level
    pub green: u8,
    /// Blue channel level
    pub blue: u8,
}

impl Rgb {
    /// All channels off
    pub const OFF: Rgb = Rgb::new(0, 0, 0);

    /// Creates a color from its channel levels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Phase colors shown on the underlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
}

impl StatusColor {
    /// Returns the RGB triple for this status
    pub const fn rgb(self) -> Rgb {
        match self {
            StatusColor::Green => Rgb::new(0, 255, 0),
            StatusColor::Yellow => Rgb::new(255, 255, 0),
            StatusColor::Red => Rgb::new(255, 0, 0),
        }
    }
}

impl From<StatusColor> for Rgb {
    fn from(color: StatusColor) -> Self {
        color.rgb()
    }
}
