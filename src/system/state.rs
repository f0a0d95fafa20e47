//! Travel State
//!
//! The controller is either cruising forward or working through the escape
//! maneuver. The maneuver runs to completion before the next sensor sample is
//! taken, so the state is a sequence marker rather than something another task
//! could observe mid-change.

/// Phase of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum TravelState {
    /// Driving forward, sampling the rangefinder every cycle
    #[default]
    Cruising,
    /// Executing the stop, reverse, turn, resume sequence
    Recovering,
}

impl TravelState {
    /// Marks the start of the escape maneuver
    pub fn begin_recovery(&mut self) {
        *self = TravelState::Recovering;
    }

    /// Marks the return to forward travel
    pub fn resume_cruising(&mut self) {
        *self = TravelState::Cruising;
    }
}
