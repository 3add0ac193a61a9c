//! Vehicle movement logic for the intersection simulation
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::signal::SignalController;
use super::types::{
    LaneDirection, Rgb, SignalPhase, StopZone, COLOR_BOTTOM_CAR, COLOR_FAST_CAR, COLOR_TOP_CAR,
    FAR_BOUND, LANE_BOTTOM_INNER, LANE_BOTTOM_OUTER, LANE_TOP, NEAR_BOUND,
};

/// A vehicle driving along one lane at constant speed
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub direction: LaneDirection,
    /// Position along the road axis
    pub position: f32,
    /// Distance covered per tick, always positive
    pub speed: f32,
    /// Where the vehicle reappears after leaving the road
    pub spawn_offset: f32,
    /// Lane coordinate across the road axis
    pub lateral_offset: f32,
    pub stop_zone: StopZone,
    pub color: Rgb,
}

impl Vehicle {
    pub fn new(direction: LaneDirection, position: f32, speed: f32, lateral_offset: f32) -> Self {
        Self {
            direction,
            position,
            speed,
            spawn_offset: position,
            lateral_offset,
            stop_zone: direction.stop_zone(),
            color: match direction {
                LaneDirection::Forward => COLOR_BOTTOM_CAR,
                LaneDirection::Backward => COLOR_TOP_CAR,
            },
        }
    }

    pub fn forward(position: f32, speed: f32, lateral_offset: f32) -> Self {
        Self::new(LaneDirection::Forward, position, speed, lateral_offset)
    }

    pub fn backward(position: f32, speed: f32, lateral_offset: f32) -> Self {
        Self::new(LaneDirection::Backward, position, speed, lateral_offset)
    }

    pub fn with_spawn_offset(mut self, spawn_offset: f32) -> Self {
        self.spawn_offset = spawn_offset;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Whether a signal in `phase` holds this vehicle where it currently is
    pub fn is_gated(&self, phase: SignalPhase) -> bool {
        phase == SignalPhase::Red && self.stop_zone.holds(self.direction, self.position)
    }

    /// Move one tick unless gated, then wrap around past the end of the road
    pub fn advance(&mut self, phase: SignalPhase) {
        if !self.is_gated(phase) {
            self.position += self.direction.sign() * self.speed;
        }

        let past_end = match self.direction {
            LaneDirection::Forward => self.position > FAR_BOUND,
            LaneDirection::Backward => self.position < NEAR_BOUND,
        };
        if past_end {
            self.position = self.spawn_offset;
        }
    }
}

/// All vehicles on the road, in insertion order
#[derive(Debug, Clone, Default)]
pub struct VehicleSet {
    vehicles: Vec<Vehicle>,
}

impl VehicleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The traffic the intersection starts with: three primary vehicles and
    /// two extra vehicles per direction, staggered so respawns don't overlap
    pub fn with_default_traffic() -> Self {
        let mut set = Self::new();
        set.push(Vehicle::forward(-60.0, 2.0, LANE_BOTTOM_OUTER).with_color(COLOR_FAST_CAR));
        set.push(Vehicle::forward(-180.0, 1.0, LANE_BOTTOM_INNER));
        set.push(Vehicle::backward(860.0, 0.5, LANE_TOP));
        for start in [-300.0, -500.0] {
            set.push(Vehicle::forward(start, 1.0, LANE_BOTTOM_INNER).with_spawn_offset(-200.0));
        }
        for start in [960.0, 1100.0] {
            set.push(Vehicle::backward(start, 0.5, LANE_TOP).with_spawn_offset(960.0));
        }
        set
    }

    pub fn push(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Vehicle> {
        self.vehicles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// Advance every vehicle by one tick against the current signal phases.
    /// Forward lanes obey the bottom light, backward lanes the top light.
    pub fn advance(&mut self, signals: &SignalController) {
        for vehicle in &mut self.vehicles {
            let phase = match vehicle.direction {
                LaneDirection::Forward => signals.bottom_phase(),
                LaneDirection::Backward => signals.top_phase(),
            };
            vehicle.advance(phase);
        }
    }
}
