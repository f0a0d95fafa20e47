//! Recording fakes for the hardware seams
//!
//! Every fake writes into one shared, ordered [`ActionLog`], so a test can
//! assert the exact interleaving of sensor polls, motor commands, light
//! changes and holds.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::system::distance::DistanceSample;
use crate::system::drive_command::Direction;
use crate::system::hardware::{Drive, ExitSignal, RangeFinder, Underlighting};
use crate::system::indicator::Rgb;

/// Distance reported once a scripted sample stream runs dry
pub const FAR_CM: f64 = 200.0;

/// One observable interaction with the hardware
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    ReadExit,
    ReadDistance,
    Stop,
    Drive(Direction, f64),
    Light(Rgb),
    ClearLights,
    /// Blocking hold in milliseconds
    Hold(u64),
}

/// Shared action log
pub type ActionLog = Rc<RefCell<Vec<Action>>>;

pub fn action_log() -> ActionLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Rangefinder replaying a fixed list of samples
pub struct MockRangeFinder {
    log: ActionLog,
    samples: VecDeque<DistanceSample>,
}

impl MockRangeFinder {
    pub fn new(log: &ActionLog, samples: &[DistanceSample]) -> Self {
        Self {
            log: Rc::clone(log),
            samples: samples.iter().copied().collect(),
        }
    }
}

impl RangeFinder for MockRangeFinder {
    fn read_distance(&mut self) -> DistanceSample {
        self.log.borrow_mut().push(Action::ReadDistance);
        self.samples
            .pop_front()
            .unwrap_or(DistanceSample::Valid(FAR_CM))
    }
}

/// Exit button, either scripted per poll or pressed once a given action shows
/// up in the log
pub struct MockButton {
    log: ActionLog,
    presses: VecDeque<bool>,
    pressed_after: Option<fn(&Action) -> bool>,
}

impl MockButton {
    /// Reports `presses` in order, then stays pressed
    pub fn scripted(log: &ActionLog, presses: &[bool]) -> Self {
        Self {
            log: Rc::clone(log),
            presses: presses.iter().copied().collect(),
            pressed_after: None,
        }
    }

    /// Reports pressed from the moment any logged action matches `trigger`
    pub fn pressed_after(log: &ActionLog, trigger: fn(&Action) -> bool) -> Self {
        Self {
            log: Rc::clone(log),
            presses: VecDeque::new(),
            pressed_after: Some(trigger),
        }
    }
}

impl ExitSignal for MockButton {
    fn read_exit_signal(&mut self) -> bool {
        let pressed = match self.pressed_after {
            Some(trigger) => self.log.borrow().iter().any(trigger),
            None => self.presses.pop_front().unwrap_or(true),
        };
        self.log.borrow_mut().push(Action::ReadExit);
        pressed
    }
}

pub struct MockDrive {
    log: ActionLog,
}

impl MockDrive {
    pub fn new(log: &ActionLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl Drive for MockDrive {
    fn drive(&mut self, direction: Direction, speed: f64) {
        self.log.borrow_mut().push(Action::Drive(direction, speed));
    }

    fn stop(&mut self) {
        self.log.borrow_mut().push(Action::Stop);
    }
}

pub struct MockLights {
    log: ActionLog,
}

impl MockLights {
    pub fn new(log: &ActionLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl Underlighting for MockLights {
    fn set_underlighting(&mut self, color: Rgb) {
        self.log.borrow_mut().push(Action::Light(color));
    }

    fn clear_underlighting(&mut self) {
        self.log.borrow_mut().push(Action::ClearLights);
    }
}

/// Delay that returns immediately and records how long it was asked to wait
pub struct MockDelay {
    log: ActionLog,
}

impl MockDelay {
    pub fn new(log: &ActionLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log
            .borrow_mut()
            .push(Action::Hold(u64::from(ns) / 1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Action::Hold(u64::from(us) / 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Action::Hold(u64::from(ms)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_finder_falls_back_to_far() {
        let log = action_log();
        let mut sensor = MockRangeFinder::new(&log, &[DistanceSample::Invalid]);
        assert_eq!(sensor.read_distance(), DistanceSample::Invalid);
        assert_eq!(sensor.read_distance(), DistanceSample::Valid(FAR_CM));
        assert_eq!(
            *log.borrow(),
            vec![Action::ReadDistance, Action::ReadDistance]
        );
    }

    #[test]
    fn test_scripted_button_stays_pressed() {
        let log = action_log();
        let mut button = MockButton::scripted(&log, &[false]);
        assert!(!button.read_exit_signal());
        assert!(button.read_exit_signal());
        assert!(button.read_exit_signal());
    }

    #[test]
    fn test_button_pressed_after_trigger() {
        let log = action_log();
        let mut button = MockButton::pressed_after(&log, |a| *a == Action::Stop);
        let mut drive = MockDrive::new(&log);
        assert!(!button.read_exit_signal());
        drive.stop();
        assert!(button.read_exit_signal());
    }

    #[test]
    fn test_delay_records_millis() {
        let log = action_log();
        let mut delay = MockDelay::new(&log);
        delay.delay_ms(650);
        delay.delay_us(2_000);
        assert_eq!(*log.borrow(), vec![Action::Hold(650), Action::Hold(2)]);
    }
}
