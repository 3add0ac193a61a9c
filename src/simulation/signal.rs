//! Traffic signal controller for the two approaches of the intersection
//!
//! Standalone implementation that doesn't depend on Bevy.

use log::info;

use super::types::{SignalPhase, SIGNAL_INTERVAL_SECS};

/// Two coupled traffic lights and the countdown to their next change.
///
/// Only the bottom phase is stored; the top phase is always its opposite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalController {
    bottom: SignalPhase,
    seconds_until_change: u32,
    phase_changes: u32,
}

impl Default for SignalController {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalController {
    pub fn new() -> Self {
        Self {
            bottom: SignalPhase::Green,
            seconds_until_change: SIGNAL_INTERVAL_SECS,
            phase_changes: 0,
        }
    }

    pub fn bottom_phase(&self) -> SignalPhase {
        self.bottom
    }

    pub fn top_phase(&self) -> SignalPhase {
        self.bottom.opposite()
    }

    pub fn seconds_until_change(&self) -> u32 {
        self.seconds_until_change
    }

    /// Number of automatic phase changes so far
    pub fn phase_changes(&self) -> u32 {
        self.phase_changes
    }

    /// Count down one calendar second and flip both lights when it expires
    pub fn advance(&mut self, one_second_elapsed: bool) {
        if !one_second_elapsed {
            return;
        }

        self.seconds_until_change = self.seconds_until_change.saturating_sub(1);
        if self.seconds_until_change == 0 {
            self.bottom = self.bottom.opposite();
            self.seconds_until_change = SIGNAL_INTERVAL_SECS;
            self.phase_changes += 1;
            info!(
                "Signal change: bottom={:?}, top={:?}",
                self.bottom,
                self.top_phase()
            );
        }
    }

    pub fn force_green_bottom(&mut self) {
        self.force_bottom(SignalPhase::Green);
    }

    pub fn force_red_bottom(&mut self) {
        self.force_bottom(SignalPhase::Red);
    }

    fn force_bottom(&mut self, phase: SignalPhase) {
        self.bottom = phase;
        self.seconds_until_change = SIGNAL_INTERVAL_SECS;
    }
}
