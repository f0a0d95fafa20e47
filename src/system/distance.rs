//! Distance samples and obstacle detection
//!
//! The rangefinder reports either a measured distance or that it could not
//! measure at all, which for an ultrasonic sensor usually means the target sits
//! inside its minimum range. Both an obstacle at or inside the threshold and an
//! unmeasurable reading send the robot into its escape maneuver.

/// One rangefinder reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum DistanceSample {
    /// Measured distance in centimeters, never negative
    Valid(f64),
    /// Target too close to measure, or no echo
    Invalid,
}

impl DistanceSample {
    /// Converts a raw reading that uses a negative sentinel for "no measurement"
    ///
    /// Non-finite values are treated like the sentinel.
    pub fn from_raw(raw_cm: f64) -> Self {
        if raw_cm.is_finite() && raw_cm >= 0.0 {
            DistanceSample::Valid(raw_cm)
        } else {
            DistanceSample::Invalid
        }
    }
}

/// Result of applying the obstacle threshold to a sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum Detection {
    /// Path is clear, distance in cm
    Clear(f64),
    /// Obstacle at or inside the threshold, distance in cm
    Obstacle(f64),
    /// Sensor could not measure
    InvalidReading,
}

impl Detection {
    /// Whether this detection triggers the escape maneuver
    pub fn requires_recovery(&self) -> bool {
        !matches!(self, Detection::Clear(_))
    }
}

/// Classifies a sample against the obstacle threshold
///
/// The threshold itself counts as an obstacle: "30cm or less" blocks travel.
/// A `Valid` distance that is negative or not finite cannot be trusted and is
/// classified like an `Invalid` sample.
pub fn classify(sample: DistanceSample, threshold_cm: f64) -> Detection {
    match sample {
        DistanceSample::Valid(distance) if !distance.is_finite() || distance < 0.0 => {
            Detection::InvalidReading
        }
        DistanceSample::Valid(distance) if distance <= threshold_cm => {
            Detection::Obstacle(distance)
        }
        DistanceSample::Valid(distance) => Detection::Clear(distance),
        DistanceSample::Invalid => Detection::InvalidReading,
    }
}
