//! Distance sensor handling
//!
//! Blocking HC-SR04 ultrasonic rangefinder behind the navigation `RangeFinder`
//! seam.
//!
//! # Sensor Operation
//! - A 10µs trigger pulse starts a ping
//! - The echo pin stays high for the sound's round trip
//! - Distance in cm is the pulse length times the speed of sound, halved
//! - Assumes fixed ambient temperature of 21.5°C
//!
//! # Signal Processing
//! Each reading fires `PINGS_PER_READING` pings and reports the median of the
//! ones that returned a usable echo. The sensor needs `PING_SETTLE` between
//! pings, so a reading takes roughly 180ms; the navigation loop relies on that
//! as its cadence.
//!
//! # Invalid Readings
//! A ping is unusable when the echo never starts (no answer) or is shorter than
//! the sensor's minimum range (target too close). If no ping is usable the
//! reading is `Invalid`. An echo that outlasts the maximum range means nothing
//! is in front, reported as `MAX_RANGE_CM`.

use crate::task::resources::DistanceSensorResources;
use defmt::debug;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{block_for, Duration, Instant};
use moving_median::MovingMedian;
use navigation_lights::system::distance::DistanceSample;
use navigation_lights::system::hardware::RangeFinder;

/// Pings per reading, also the median window
const PINGS_PER_READING: usize = 3;

/// Time the sensor needs between pings for stray echoes to die down
const PING_SETTLE: Duration = Duration::from_millis(60);

/// Trigger pulse width
const TRIGGER_PULSE: Duration = Duration::from_micros(10);

/// How long to wait for the echo to start
const ECHO_START_TIMEOUT: Duration = Duration::from_millis(5);

/// Longest echo worth timing, a little past the 400cm maximum range
const ECHO_MAX: Duration = Duration::from_millis(25);

/// Reported when the echo outlasts `ECHO_MAX`
const MAX_RANGE_CM: f64 = 400.0;

/// Echoes shorter than this come from inside the 2cm minimum range
const MIN_ECHO_US: u64 = 117;

/// Fixed ambient temperature for distance calculations
const TEMPERATURE: f64 = 21.5;

/// Speed of sound in cm/µs at the given temperature in °C
fn speed_of_sound_cm_per_us(temperature: f64) -> f64 {
    (331.3 + 0.606 * temperature) * 100.0 / 1_000_000.0
}

pub struct UltrasonicRangeFinder {
    trigger: Output<'static>,
    echo: Input<'static>,
}

impl UltrasonicRangeFinder {
    pub fn new(r: DistanceSensorResources) -> Self {
        Self {
            trigger: Output::new(r.trigger_pin, Level::Low),
            echo: Input::new(r.echo_pin, Pull::None),
        }
    }

    /// Fires one ping, returns the distance in cm if the echo was usable
    fn ping(&mut self) -> Option<f64> {
        self.trigger.set_high();
        block_for(TRIGGER_PULSE);
        self.trigger.set_low();

        let sent = Instant::now();
        while self.echo.is_low() {
            if sent.elapsed() > ECHO_START_TIMEOUT {
                debug!("no echo");
                return None;
            }
        }

        let rise = Instant::now();
        while self.echo.is_high() {
            if rise.elapsed() > ECHO_MAX {
                return Some(MAX_RANGE_CM);
            }
        }

        let echo_us = rise.elapsed().as_micros();
        if echo_us < MIN_ECHO_US {
            debug!("echo too short: {}us", echo_us);
            return None;
        }

        Some(echo_us as f64 * speed_of_sound_cm_per_us(TEMPERATURE) / 2.0)
    }
}

impl RangeFinder for UltrasonicRangeFinder {
    fn read_distance(&mut self) -> DistanceSample {
        let mut median_filter = MovingMedian::<f64, PINGS_PER_READING>::new();
        let mut usable = 0;

        for _ in 0..PINGS_PER_READING {
            if let Some(distance_cm) = self.ping() {
                median_filter.add_value(distance_cm);
                usable += 1;
            }
            block_for(PING_SETTLE);
        }

        if usable == 0 {
            DistanceSample::Invalid
        } else {
            DistanceSample::from_raw(median_filter.median())
        }
    }
}
