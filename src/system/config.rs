//! Navigation Configuration
//!
//! Calibrated constants for obstacle detection and the escape maneuver, gathered
//! into a [`NavigationConfig`] that is handed to the controller at construction.
//!
//! # Calibration
//! The reverse and turn holds are open-loop: they are timed, not measured.
//! - `REVERSE_TIME` at `REVERSE_SPEED` backs the robot off roughly 1cm
//! - `TURN_TIME` at `TURN_SPEED` turns the robot roughly 90° to the right
//!
//! Both depend on motors, gearing and battery charge, so expect to retune them
//! per robot.

use core::fmt;
use embassy_time::Duration;

/// Distance at or below which an object blocks travel (cm)
pub const OBSTACLE_THRESHOLD: f64 = 30.0;

/// Cruising speed (normalized 0.0-1.0)
pub const FORWARD_SPEED: f64 = 0.6;

/// Speed while backing off an obstacle (normalized 0.0-1.0)
pub const REVERSE_SPEED: f64 = 0.4;

/// Speed while turning away from an obstacle (normalized 0.0-1.0)
pub const TURN_SPEED: f64 = 0.5;

/// How long red is shown after stopping, before backing off
pub const DISPLAY_DELAY: Duration = Duration::from_millis(500);

/// Time to reverse ~1cm at `REVERSE_SPEED`
pub const REVERSE_TIME: Duration = Duration::from_millis(150);

/// Time to turn ~90 degrees at `TURN_SPEED`
pub const TURN_TIME: Duration = Duration::from_millis(650);

/// Pause at the end of each control cycle. Zero disables it; the rangefinder
/// already takes its own settling time per reading.
pub const IDLE_DELAY: Duration = Duration::from_millis(0);

/// Thresholds and timings for one navigation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationConfig {
    /// Obstacle distance threshold in cm, inclusive
    pub obstacle_threshold: f64,
    /// Speed while cruising
    pub forward_speed: f64,
    /// Speed while backing off
    pub reverse_speed: f64,
    /// Speed while turning
    pub turn_speed: f64,
    /// Red hold after stopping
    pub display_delay: Duration,
    /// Reverse hold
    pub reverse_time: Duration,
    /// Turn hold
    pub turn_time: Duration,
    /// Optional pause after each cycle
    pub idle_delay: Duration,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            obstacle_threshold: OBSTACLE_THRESHOLD,
            forward_speed: FORWARD_SPEED,
            reverse_speed: REVERSE_SPEED,
            turn_speed: TURN_SPEED,
            display_delay: DISPLAY_DELAY,
            reverse_time: REVERSE_TIME,
            turn_time: TURN_TIME,
            idle_delay: IDLE_DELAY,
        }
    }
}

impl NavigationConfig {
    /// Checks that the threshold is a usable distance and every speed is a
    /// normalized magnitude
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.obstacle_threshold.is_finite() || self.obstacle_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.obstacle_threshold));
        }

        let speeds = [
            ("forward", self.forward_speed),
            ("reverse", self.reverse_speed),
            ("turn", self.turn_speed),
        ];
        for (name, value) in speeds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::SpeedOutOfRange { name, value });
            }
        }

        Ok(())
    }
}

/// Rejected navigation configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum ConfigError {
    /// Obstacle threshold is negative or not a number
    InvalidThreshold(f64),
    /// A speed lies outside 0.0-1.0
    SpeedOutOfRange { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold(value) => {
                write!(
                    f,
                    "obstacle threshold must be a non-negative distance, got {}",
                    value
                )
            }
            ConfigError::SpeedOutOfRange { name, value } => {
                write!(f, "{} speed must lie within 0.0..=1.0, got {}", name, value)
            }
        }
    }
}
