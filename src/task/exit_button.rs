//! Exit Button
//!
//! Active-high push button with a pull-down. A press only counts if the pin is
//! still high after the debounce delay.

use crate::task::resources::ExitButtonResources;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{block_for, Duration};
use navigation_lights::system::hardware::ExitSignal;

/// Button debounce delay
const DEBOUNCE_DURATION: Duration = Duration::from_millis(30);

pub struct ExitButton {
    button: Input<'static>,
}

impl ExitButton {
    pub fn new(r: ExitButtonResources) -> Self {
        Self {
            button: Input::new(r.btn, Pull::Down),
        }
    }
}

impl ExitSignal for ExitButton {
    fn read_exit_signal(&mut self) -> bool {
        if self.button.is_low() {
            return false;
        }
        block_for(DEBOUNCE_DURATION);
        self.button.is_high()
    }
}
