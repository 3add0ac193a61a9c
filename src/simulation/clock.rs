//! Fixed-step clock driving the simulation
//!
//! The scheduler counts movement ticks and raises a calendar second every
//! [`TICKS_PER_SECOND`] ticks. [`FixedStep`] turns wall-clock time into whole
//! ticks so the simulation rate doesn't depend on how often frames are drawn.

use std::time::Duration;

/// Movement ticks per calendar second
pub const TICKS_PER_SECOND: u32 = 60;

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub second_elapsed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    frame_counter: u32,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) -> Tick {
        self.ticks += 1;
        self.frame_counter += 1;

        let second_elapsed = self.frame_counter >= TICKS_PER_SECOND;
        if second_elapsed {
            self.frame_counter = 0;
        }

        Tick { second_elapsed }
    }

    /// Ticks since the last calendar second
    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Total ticks fired
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Accumulates elapsed wall time and releases it in fixed-size steps
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
}

impl FixedStep {
    /// Create a stepper firing `hz` times per second. Non-positive or
    /// non-finite rates fall back to [`TICKS_PER_SECOND`]. The step never
    /// drops below one nanosecond.
    pub fn from_hz(hz: f64) -> Self {
        let hz = if hz.is_finite() && hz > 0.0 {
            hz
        } else {
            f64::from(TICKS_PER_SECOND)
        };
        Self {
            step: Duration::from_secs_f64(1.0 / hz).max(Duration::from_nanos(1)),
            accumulator: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add `elapsed` and return how many whole steps are now due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            due += 1;
        }
        due
    }
}
