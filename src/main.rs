//! Robot firmware entry point
//!
//! Initializes the RP2350 and hands every peripheral the robot uses to the
//! navigation task.

#![no_std]
#![no_main]

use crate::task::navigate::navigate;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use task::resources::{
    AssignedResources, DistanceSensorResources, ExitButtonResources, MotorDriverResources,
    UnderlightingResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Hardware adapters and the navigation task
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups, one per adapter
    let r = split_resources!(p);

    spawner
        .spawn(navigate(
            r.motor_driver,
            r.distance_sensor,
            r.underlighting,
            r.exit_button,
        ))
        .unwrap();
}
