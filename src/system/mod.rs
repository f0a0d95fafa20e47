//! Core navigation components
pub mod config;
pub mod distance;
pub mod drive_command;
pub mod hardware;
pub mod indicator;
pub mod logging;
pub mod navigation;
pub mod state;

#[cfg(test)]
pub mod mock;
