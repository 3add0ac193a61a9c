//! Day/night cycle

use log::info;

use super::types::DAY_NIGHT_INTERVAL_SECS;

/// Ambient lighting flag, toggled every [`DAY_NIGHT_INTERVAL_SECS`].
///
/// Manual overrides change the flag but leave the counter running, so the
/// next automatic toggle still happens on the unchanged schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayNightCycle {
    is_day: bool,
    counter: u32,
    toggles: u32,
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl DayNightCycle {
    pub fn new() -> Self {
        Self {
            is_day: true,
            counter: 0,
            toggles: 0,
        }
    }

    pub fn is_day(&self) -> bool {
        self.is_day
    }

    /// Seconds counted since the last automatic toggle
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn toggles(&self) -> u32 {
        self.toggles
    }

    pub fn advance(&mut self, one_second_elapsed: bool) {
        if !one_second_elapsed {
            return;
        }

        self.counter += 1;
        if self.counter >= DAY_NIGHT_INTERVAL_SECS {
            self.is_day = !self.is_day;
            self.counter = 0;
            self.toggles += 1;
            info!("{}", if self.is_day { "Day begins" } else { "Night falls" });
        }
    }

    pub fn force_day(&mut self) {
        self.is_day = true;
    }

    pub fn force_night(&mut self) {
        self.is_day = false;
    }
}
