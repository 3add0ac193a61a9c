//! Core types for the intersection simulation
//!
//! These are standalone types that don't depend on Bevy.

/// State of a single traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalPhase {
    Red,
    Green,
}

impl SignalPhase {
    pub fn opposite(self) -> Self {
        match self {
            SignalPhase::Red => SignalPhase::Green,
            SignalPhase::Green => SignalPhase::Red,
        }
    }
}

/// The direction a lane carries traffic along the road axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneDirection {
    /// Bottom lanes, moving towards increasing positions
    Forward,
    /// Top lanes, moving towards decreasing positions
    Backward,
}

impl LaneDirection {
    /// Sign applied to a vehicle's speed when it moves
    pub fn sign(self) -> f32 {
        match self {
            LaneDirection::Forward => 1.0,
            LaneDirection::Backward => -1.0,
        }
    }

    /// Stop zone used by lanes travelling in this direction
    pub fn stop_zone(self) -> StopZone {
        match self {
            LaneDirection::Forward => StopZone::new(390.0, 440.0),
            LaneDirection::Backward => StopZone::new(370.0, 420.0),
        }
    }
}

/// Interval around the intersection where a red signal holds vehicles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopZone {
    pub start: f32,
    pub end: f32,
}

impl StopZone {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Check whether a vehicle at `position` is inside this zone.
    ///
    /// Forward lanes test their whole footprint `[position, position + length]`,
    /// backward lanes test the raw position only.
    pub fn holds(&self, direction: LaneDirection, position: f32) -> bool {
        match direction {
            LaneDirection::Forward => {
                position + VEHICLE_LENGTH >= self.start && position <= self.end
            }
            LaneDirection::Backward => position >= self.start && position <= self.end,
        }
    }
}

/// A 2D point in the y-up 800x600 view space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An RGB colour with components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Length of a vehicle along its lane, in view units
pub const VEHICLE_LENGTH: f32 = 50.0;

/// Height of a vehicle across its lane, in view units
pub const VEHICLE_WIDTH: f32 = 20.0;

/// Forward vehicles respawn once they pass this position
pub const FAR_BOUND: f32 = 860.0;

/// Backward vehicles respawn once they drop below this position
pub const NEAR_BOUND: f32 = -60.0;

/// Width of the view space
pub const VIEW_WIDTH: f32 = 800.0;

/// Height of the view space
pub const VIEW_HEIGHT: f32 = 600.0;

/// Seconds between automatic signal changes
pub const SIGNAL_INTERVAL_SECS: u32 = 30;

/// Seconds between automatic day/night toggles
pub const DAY_NIGHT_INTERVAL_SECS: u32 = 30;

/// Lane y coordinates
pub const LANE_BOTTOM_OUTER: f32 = 170.0;
pub const LANE_BOTTOM_INNER: f32 = 210.0;
pub const LANE_TOP: f32 = 290.0;

/// Where the signal housings stand
pub const BOTTOM_SIGNAL_POST: Point = Point { x: 390.0, y: 120.0 };
pub const TOP_SIGNAL_POST: Point = Point { x: 390.0, y: 360.0 };

pub const COLOR_FAST_CAR: Rgb = Rgb::new(0.8, 0.1, 0.1);
pub const COLOR_BOTTOM_CAR: Rgb = Rgb::new(1.0, 0.3, 0.3);
pub const COLOR_TOP_CAR: Rgb = Rgb::new(0.1, 0.1, 0.9);
