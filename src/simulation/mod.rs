//! Standalone intersection simulation module
//!
//! This module contains all the core simulation logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod clock;
mod day_night;
mod render;
mod screen;
mod signal;
mod types;
mod vehicle;
mod world;

pub use clock::{FixedStep, Scheduler, Tick, TICKS_PER_SECOND};
pub use day_night::DayNightCycle;
pub use render::{ConsoleRenderer, Renderer, Snapshot, VehicleView};
pub use screen::{
    Flow, InputCommand, MenuLayout, MenuRegion, Screen, ScreenController, INSTRUCTIONS_TITLE,
    INSTRUCTION_LINES,
};
pub use signal::SignalController;
pub use types::{
    LaneDirection, Point, Rgb, SignalPhase, StopZone, BOTTOM_SIGNAL_POST, COLOR_BOTTOM_CAR,
    COLOR_FAST_CAR, COLOR_TOP_CAR, DAY_NIGHT_INTERVAL_SECS, FAR_BOUND, LANE_BOTTOM_INNER,
    LANE_BOTTOM_OUTER, LANE_TOP, NEAR_BOUND, SIGNAL_INTERVAL_SECS, TOP_SIGNAL_POST,
    VEHICLE_LENGTH, VEHICLE_WIDTH, VIEW_HEIGHT, VIEW_WIDTH,
};
pub use vehicle::{Vehicle, VehicleSet};
pub use world::SimWorld;
