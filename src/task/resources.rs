//! Hardware Resource Assignment
//!
//! Assigns the RP2350 pins and PWM slices to the adapters that own them. Each
//! group is moved into the navigation task whole; nothing is shared.
//!
//! # Resource Groups
//! - Motor Driver: TB6612FNG standby, direction pins and PWM slices
//! - Distance Sensor: HC-SR04 trigger and echo pins
//! - Underlighting: PWM-driven red, green and blue channels
//! - Exit Button: active-high push button

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// TB6612FNG dual motor driver pins and PWM channels
    motor_driver: MotorDriverResources {
        standby_pin: PIN_22,
        // Left track, motor A
        left_slice: PWM_SLICE6,
        left_pwm_pin: PIN_28,
        left_forward_pin: PIN_21,
        left_backward_pin: PIN_20,
        // Right track, motor B
        right_slice: PWM_SLICE5,
        right_pwm_pin: PIN_27,
        right_forward_pin: PIN_19,
        right_backward_pin: PIN_18,
    },
    /// HC-SR04 ultrasonic distance sensor pins
    distance_sensor: DistanceSensorResources {
        trigger_pin: PIN_15,
        echo_pin: PIN_14,
    },
    /// PWM-controlled underlighting channels, one slice per color
    underlighting: UnderlightingResources {
        pwm_red: PWM_SLICE1,
        red_pin: PIN_2,
        pwm_green: PWM_SLICE2,
        green_pin: PIN_4,
        pwm_blue: PWM_SLICE3,
        blue_pin: PIN_6,
    },
    /// Exit button
    exit_button: ExitButtonResources {
        btn: PIN_16,
    },
}
