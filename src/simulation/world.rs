//! Main simulation world that ties everything together
//!
//! This is the entry point for running the intersection simulation
//! without any Bevy dependencies.

use super::clock::Scheduler;
use super::day_night::DayNightCycle;
use super::render::{ConsoleRenderer, Snapshot, VehicleView};
use super::screen::{Flow, InputCommand, MenuLayout, Screen, ScreenController};
use super::signal::SignalController;
use super::vehicle::VehicleSet;

/// The complete simulation state
#[derive(Debug, Clone)]
pub struct SimWorld {
    pub signals: SignalController,
    pub day_night: DayNightCycle,
    pub vehicles: VehicleSet,
    pub screen: ScreenController,
    pub menu: MenuLayout,
    scheduler: Scheduler,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld {
    /// A world with the default intersection traffic, showing the menu
    pub fn new() -> Self {
        Self::with_vehicles(VehicleSet::with_default_traffic())
    }

    pub fn with_vehicles(vehicles: VehicleSet) -> Self {
        Self {
            signals: SignalController::new(),
            day_night: DayNightCycle::new(),
            vehicles,
            screen: ScreenController::new(),
            menu: MenuLayout::default(),
            scheduler: Scheduler::new(),
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.screen.current()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Advance the simulation by one tick.
    ///
    /// Outside the simulation screen this does nothing, so the intersection
    /// resumes exactly where it was left.
    pub fn tick(&mut self) {
        if self.screen.current() != Screen::Simulation {
            return;
        }

        let tick = self.scheduler.tick();
        self.signals.advance(tick.second_elapsed);
        self.day_night.advance(tick.second_elapsed);
        self.vehicles.advance(&self.signals);
    }

    /// Apply an operator command between ticks
    pub fn handle_input(&mut self, command: InputCommand) -> Flow {
        match command {
            InputCommand::ForceGreenBottom => self.signals.force_green_bottom(),
            InputCommand::ForceRedBottom => self.signals.force_red_bottom(),
            InputCommand::ForceDay => self.day_night.force_day(),
            InputCommand::ForceNight => self.day_night.force_night(),
            // Screen commands not offered on the current screen are dropped there
            InputCommand::StartSimulation
            | InputCommand::ShowInstructions
            | InputCommand::ReturnToMenu
            | InputCommand::Exit => return self.screen.apply(command),
        }
        Flow::Continue
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen.current(),
            bottom_phase: self.signals.bottom_phase(),
            top_phase: self.signals.top_phase(),
            seconds_until_change: self.signals.seconds_until_change(),
            is_day: self.day_night.is_day(),
            vehicles: self
                .vehicles
                .iter()
                .map(|vehicle| VehicleView {
                    direction: vehicle.direction,
                    position: vehicle.position,
                    lateral_offset: vehicle.lateral_offset,
                    color: vehicle.color,
                })
                .collect(),
        }
    }

    /// Render the current frame as text
    pub fn draw_map(&self) -> String {
        let mut renderer = ConsoleRenderer::new();
        self.snapshot().render(&mut renderer, &self.menu);
        renderer.finish()
    }

    pub fn print_summary(&self) {
        println!(
            "Screen: {:?} | Ticks: {} | Bottom: {:?} | Top: {:?} | Change in: {}s | {}",
            self.screen.current(),
            self.scheduler.ticks(),
            self.signals.bottom_phase(),
            self.signals.top_phase(),
            self.signals.seconds_until_change(),
            if self.day_night.is_day() { "Day" } else { "Night" }
        );
    }
}
