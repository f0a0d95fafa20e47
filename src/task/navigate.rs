//! Navigation Task
//!
//! Owns every adapter and runs the navigation controller until the exit button
//! is pressed. The controller blocks for the whole run; this is the only task,
//! so nothing else is waiting on the executor.

use crate::task::distance_measure::UltrasonicRangeFinder;
use crate::task::drive::TrackDrive;
use crate::task::exit_button::ExitButton;
use crate::task::resources::{
    DistanceSensorResources, ExitButtonResources, MotorDriverResources, UnderlightingResources,
};
use crate::task::underlighting::PwmUnderlighting;
use defmt::{error, info};
use embassy_time::Delay;
use navigation_lights::system::config::NavigationConfig;
use navigation_lights::system::navigation::NavigationController;

#[embassy_executor::task]
pub async fn navigate(
    motor: MotorDriverResources,
    distance: DistanceSensorResources,
    lights: UnderlightingResources,
    button: ExitButtonResources,
) {
    info!("Navigate with obstacle avoidance");

    let config = NavigationConfig::default();
    let controller = NavigationController::new(
        config,
        UltrasonicRangeFinder::new(distance),
        ExitButton::new(button),
        TrackDrive::new(motor),
        PwmUnderlighting::new(lights),
        Delay,
    );

    let mut controller = match controller {
        Ok(controller) => controller,
        Err(e) => {
            error!("navigation config rejected: {}", e);
            return;
        }
    };

    let summary = controller.run();
    info!("navigation finished: {}", summary);
}
