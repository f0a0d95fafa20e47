//! Underlighting
//!
//! RGB underlighting driven by one PWM slice per color channel, at 100Hz. All
//! LEDs share the channels, so every position always shows the same color.

use crate::task::pwm::pwm_config;
use crate::task::resources::UnderlightingResources;
use defmt::warn;
use embassy_rp::pwm::{Pwm, SetDutyCycle};
use navigation_lights::system::hardware::Underlighting;
use navigation_lights::system::indicator::Rgb;

/// PWM frequency for the LEDs, fast enough not to flicker
const PWM_FREQUENCY_HZ: u32 = 100;

pub struct PwmUnderlighting {
    red: Pwm<'static>,
    green: Pwm<'static>,
    blue: Pwm<'static>,
}

impl PwmUnderlighting {
    /// Configures the three channels and starts dark
    pub fn new(r: UnderlightingResources) -> Self {
        let config = pwm_config(PWM_FREQUENCY_HZ);
        let mut lights = Self {
            red: Pwm::new_output_a(r.pwm_red, r.red_pin, config.clone()),
            green: Pwm::new_output_a(r.pwm_green, r.green_pin, config.clone()),
            blue: Pwm::new_output_a(r.pwm_blue, r.blue_pin, config),
        };
        lights.clear_underlighting();
        lights
    }
}

/// Sets one channel to `level` out of 255
fn set_channel(channel: &mut Pwm<'static>, level: u8) {
    if channel
        .set_duty_cycle_fraction(u16::from(level), u16::from(u8::MAX))
        .is_err()
    {
        warn!("underlighting channel rejected duty cycle");
    }
}

impl Underlighting for PwmUnderlighting {
    fn set_underlighting(&mut self, color: Rgb) {
        set_channel(&mut self.red, color.red);
        set_channel(&mut self.green, color.green);
        set_channel(&mut self.blue, color.blue);
    }

    fn clear_underlighting(&mut self) {
        self.set_underlighting(Rgb::OFF);
    }
}
