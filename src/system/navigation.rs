//! Navigation Controller
//!
//! Drives the robot forward until the rangefinder reports an obstacle at or
//! inside the threshold, or cannot measure at all. Either case triggers the
//! same escape maneuver:
//!
//! 1. Stop, show red, hold for the display delay
//! 2. Reverse at `reverse_speed` for `reverse_time`
//! 3. Show yellow, turn right at `turn_speed` for `turn_time`
//! 4. Show green, resume forward at `forward_speed`
//!
//! # Control Loop
//! Each cycle polls the exit signal first, then takes one distance sample. The
//! maneuver is open-loop and runs to completion inside the cycle: there is no
//! re-sensing mid-turn and an exit request is only seen at the top of the next
//! cycle. Nothing else runs while a hold is in progress.
//!
//! # Usage
//! ```rust,ignore
//! let mut controller = NavigationController::new(
//!     NavigationConfig::default(),
//!     range_finder,
//!     exit_button,
//!     drive,
//!     underlighting,
//!     Delay,
//! )?;
//! let summary = controller.run();
//! ```

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::system::config::{ConfigError, NavigationConfig};
use crate::system::distance::{classify, Detection};
use crate::system::drive_command::Direction;
use crate::system::hardware::{Drive, ExitSignal, RangeFinder, Underlighting};
use crate::system::indicator::StatusColor;
use crate::system::state::TravelState;

/// What a single control cycle did
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum CycleOutcome {
    /// Exit signal was set; nothing else happened this cycle
    ExitRequested,
    /// A sample was taken and acted upon
    Continued(Detection),
}

/// Counters for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub struct RunSummary {
    /// Cycles that took a distance sample
    pub cycles: u32,
    /// Escape maneuvers executed
    pub recoveries: u32,
}

/// Obstacle-avoiding navigation state machine
pub struct NavigationController<R, E, M, L, D> {
    config: NavigationConfig,
    state: TravelState,
    range_finder: R,
    exit_signal: E,
    drive: M,
    lights: L,
    delay: D,
    /// Travel state at the start of every hold, in order
    #[cfg(test)]
    hold_states: std::vec::Vec<TravelState>,
}

impl<R, E, M, L, D> NavigationController<R, E, M, L, D>
where
    R: RangeFinder,
    E: ExitSignal,
    M: Drive,
    L: Underlighting,
    D: DelayNs,
{
    /// Creates a controller, rejecting configurations it cannot drive with
    ///
    /// The hardware must be initialized and ready; nothing is commanded until
    /// [`start`](Self::start) or [`run`](Self::run).
    pub fn new(
        config: NavigationConfig,
        range_finder: R,
        exit_signal: E,
        drive: M,
        lights: L,
        delay: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: TravelState::default(),
            range_finder,
            exit_signal,
            drive,
            lights,
            delay,
            #[cfg(test)]
            hold_states: std::vec::Vec::new(),
        })
    }

    /// Current phase of travel
    pub fn state(&self) -> TravelState {
        self.state
    }

    /// Configuration the controller was built with
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Runs until the exit signal is set, then stops and clears the lights
    pub fn run(&mut self) -> RunSummary {
        self.start();

        let mut summary = RunSummary::default();
        while let CycleOutcome::Continued(detection) = self.cycle() {
            summary.cycles = summary.cycles.saturating_add(1);
            if detection.requires_recovery() {
                summary.recoveries = summary.recoveries.saturating_add(1);
            }
        }

        self.shutdown();
        crate::log_info!(
            "navigation stopped after {} cycles, {} maneuvers",
            summary.cycles,
            summary.recoveries
        );
        summary
    }

    /// Shows green and starts driving forward
    pub fn start(&mut self) {
        crate::log_info!("starting navigation, press the exit button to stop");
        self.cruise();
    }

    /// One pass of the control loop
    ///
    /// The exit signal is checked before the sensor; when it is set the cycle
    /// returns without polling the sensor or commanding anything.
    pub fn cycle(&mut self) -> CycleOutcome {
        if self.exit_signal.read_exit_signal() {
            return CycleOutcome::ExitRequested;
        }

        let sample = self.range_finder.read_distance();
        let detection = classify(sample, self.config.obstacle_threshold);

        match detection {
            Detection::Clear(distance) => {
                crate::log_debug!("distance: {} cm", distance);
            }
            Detection::Obstacle(distance) => {
                crate::log_warn!("obstacle detected at {} cm", distance);
                self.recover();
            }
            Detection::InvalidReading => {
                crate::log_warn!("invalid distance reading, object too close");
                self.recover();
            }
        }

        if self.config.idle_delay.as_ticks() > 0 {
            self.hold(self.config.idle_delay);
        }

        CycleOutcome::Continued(detection)
    }

    /// Stops the motors and clears the underlighting
    pub fn shutdown(&mut self) {
        self.drive.stop();
        self.lights.clear_underlighting();
        crate::log_info!("exiting");
    }

    /// Stop, back off, turn right, resume. Always runs to the end.
    fn recover(&mut self) {
        self.state.begin_recovery();

        self.drive.stop();
        self.lights.set_underlighting(StatusColor::Red.into());
        self.hold(self.config.display_delay);

        crate::log_info!("reversing");
        self.drive.drive(Direction::Backward, self.config.reverse_speed);
        self.hold(self.config.reverse_time);

        crate::log_info!("turning right");
        self.lights.set_underlighting(StatusColor::Yellow.into());
        self.drive.drive(Direction::TurnRight, self.config.turn_speed);
        self.hold(self.config.turn_time);

        self.cruise();
    }

    fn cruise(&mut self) {
        crate::log_info!("moving forward");
        self.lights.set_underlighting(StatusColor::Green.into());
        self.drive.drive(Direction::Forward, self.config.forward_speed);
        self.state.resume_cruising();
    }

    fn hold(&mut self, duration: Duration) {
        #[cfg(test)]
        self.hold_states.push(self.state);

        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(ms);
    }
}
