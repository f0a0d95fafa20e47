//! PWM setup shared by the motor and underlighting adapters

use embassy_rp::pwm;

/// Builds a PWM config that wraps at `freq_hz` off the system clock
///
/// Uses the smallest integer clock divider that keeps the wrap value inside the
/// 16-bit counter.
pub fn pwm_config(freq_hz: u32) -> pwm::Config {
    let sys_hz = embassy_rp::clocks::clk_sys_freq();
    let ticks_per_period = sys_hz / freq_hz;
    let divider = u8::try_from(ticks_per_period / u32::from(u16::MAX) + 1).unwrap_or(u8::MAX);
    let top = (sys_hz / (freq_hz * u32::from(divider))).saturating_sub(1);

    let mut config = pwm::Config::default();
    config.divider = divider.into();
    config.top = u16::try_from(top).unwrap_or(u16::MAX);
    config
}
