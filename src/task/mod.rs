//! Firmware tasks and the hardware adapters they own
pub mod distance_measure;
pub mod drive;
pub mod exit_button;
pub mod navigate;
pub mod pwm;
pub mod resources;
pub mod underlighting;
