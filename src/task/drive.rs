//! Track Drive
//!
//! Implements the navigation `Drive` seam on a TB6612FNG dual H-bridge. Motor A
//! is the left track, motor B the right one.
//!
//! # Command Mapping
//! - Forward / Backward: both tracks in the same direction
//! - TurnRight: left track forward, right track backward (turn in place)
//! - Stop: brake both tracks
//!
//! Normalized speeds (0.0-1.0) become a 0-100 duty percentage.

use crate::task::pwm::pwm_config;
use crate::task::resources::MotorDriverResources;
use defmt::{info, warn};
use embassy_rp::gpio::{self, Output};
use embassy_rp::pwm::{self, Pwm};
use navigation_lights::system::drive_command::Direction;
use navigation_lights::system::hardware::Drive;
use tb6612fng::{DriveCommand, Motor, Tb6612fng};

/// PWM frequency for the motors. Cheaper DC motors tend to behave better at
/// lower frequencies.
const PWM_FREQUENCY_HZ: u32 = 10_000;

type MotorDriver = Tb6612fng<
    Output<'static>,
    Output<'static>,
    Pwm<'static>,
    Output<'static>,
    Output<'static>,
    Pwm<'static>,
    Output<'static>,
>;

/// Maps a normalized speed to the driver's duty percentage
fn duty_percent(speed: f64) -> u8 {
    libm::round(speed.clamp(0.0, 1.0) * 100.0) as u8
}

/// Both tracks behind one TB6612FNG
pub struct TrackDrive {
    control: MotorDriver,
}

impl TrackDrive {
    /// Sets up PWM and direction pins and takes the driver out of standby
    pub fn new(r: MotorDriverResources) -> Self {
        let config = pwm_config(PWM_FREQUENCY_HZ);

        let stby = gpio::Output::new(r.standby_pin, gpio::Level::Low);

        let left_fwd = gpio::Output::new(r.left_forward_pin, gpio::Level::Low);
        let left_bckw = gpio::Output::new(r.left_backward_pin, gpio::Level::Low);
        let left_pwm = pwm::Pwm::new_output_a(r.left_slice, r.left_pwm_pin, config.clone());
        let Ok(left_motor) = Motor::new(left_fwd, left_bckw, left_pwm) else {
            defmt::panic!("left motor setup failed");
        };

        let right_fwd = gpio::Output::new(r.right_forward_pin, gpio::Level::Low);
        let right_bckw = gpio::Output::new(r.right_backward_pin, gpio::Level::Low);
        let right_pwm = pwm::Pwm::new_output_b(r.right_slice, r.right_pwm_pin, config);
        let Ok(right_motor) = Motor::new(right_fwd, right_bckw, right_pwm) else {
            defmt::panic!("right motor setup failed");
        };

        let Ok(mut control) = Tb6612fng::new(left_motor, right_motor, stby) else {
            defmt::panic!("motor driver setup failed");
        };
        if control.disable_standby().is_err() {
            warn!("could not take motor driver out of standby");
        }
        info!("motor driver ready");

        Self { control }
    }

    fn apply(&mut self, left: DriveCommand, right: DriveCommand) {
        if self.control.motor_a.drive(left).is_err() {
            warn!("left motor rejected command");
        }
        if self.control.motor_b.drive(right).is_err() {
            warn!("right motor rejected command");
        }
    }
}

impl Drive for TrackDrive {
    fn drive(&mut self, direction: Direction, speed: f64) {
        let duty = duty_percent(speed);
        info!("drive {} at {}%", direction, duty);
        match direction {
            Direction::Forward => {
                self.apply(DriveCommand::Forward(duty), DriveCommand::Forward(duty));
            }
            Direction::Backward => {
                self.apply(DriveCommand::Backward(duty), DriveCommand::Backward(duty));
            }
            Direction::TurnRight => {
                self.apply(DriveCommand::Forward(duty), DriveCommand::Backward(duty));
            }
        }
    }

    fn stop(&mut self) {
        info!("brake");
        self.apply(DriveCommand::Brake, DriveCommand::Brake);
    }
}
