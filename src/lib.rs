#![cfg_attr(not(test), no_std)]

//! Obstacle-avoiding navigation for a small wheeled robot
//!
//! The robot cruises forward, and whenever the rangefinder sees something at or
//! inside the obstacle threshold (or cannot measure at all) it stops, backs off,
//! turns right and carries on. The underlighting shows which phase it is in.
//!
//! This library holds the hardware-independent part: the navigation state
//! machine and the traits it drives. The firmware binary supplies RP2350
//! implementations of those traits.

/// Navigation core
pub mod system;
