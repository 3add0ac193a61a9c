//! Rendering seam between the simulation and whatever draws it
//!
//! The simulation never draws anything itself. Each frame it hands out a
//! [`Snapshot`], and the snapshot replays itself onto a [`Renderer`].

use super::screen::{MenuLayout, Screen, INSTRUCTION_LINES};
use super::types::{
    LaneDirection, Point, Rgb, SignalPhase, BOTTOM_SIGNAL_POST, FAR_BOUND, LANE_BOTTOM_INNER,
    LANE_BOTTOM_OUTER, LANE_TOP, NEAR_BOUND, TOP_SIGNAL_POST, VEHICLE_LENGTH,
};

/// Drawing operations the simulation needs from a presentation layer
pub trait Renderer {
    fn draw_background(&mut self, is_day: bool);
    fn draw_vehicle(&mut self, position: f32, lateral_offset: f32, color: Rgb);
    fn draw_signal(&mut self, post: Point, phase: SignalPhase);
    fn draw_countdown(&mut self, seconds_until_change: u32);
    fn draw_menu(&mut self, layout: &MenuLayout);
    fn draw_instructions(&mut self, lines: &[&str]);
}

/// Read-only view of a vehicle for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleView {
    pub direction: LaneDirection,
    pub position: f32,
    pub lateral_offset: f32,
    pub color: Rgb,
}

/// Everything a renderer may show for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub screen: Screen,
    pub bottom_phase: SignalPhase,
    pub top_phase: SignalPhase,
    pub seconds_until_change: u32,
    pub is_day: bool,
    pub vehicles: Vec<VehicleView>,
}

impl Snapshot {
    /// Replay this frame onto `renderer`, choosing the path for the active screen
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R, layout: &MenuLayout) {
        match self.screen {
            Screen::Menu => renderer.draw_menu(layout),
            Screen::Instructions => renderer.draw_instructions(&INSTRUCTION_LINES),
            Screen::Simulation => {
                renderer.draw_background(self.is_day);
                renderer.draw_signal(BOTTOM_SIGNAL_POST, self.bottom_phase);
                renderer.draw_signal(TOP_SIGNAL_POST, self.top_phase);
                renderer.draw_countdown(self.seconds_until_change);
                for vehicle in &self.vehicles {
                    renderer.draw_vehicle(vehicle.position, vehicle.lateral_offset, vehicle.color);
                }
            }
        }
    }
}

/// Columns in a console frame
const CONSOLE_WIDTH: usize = 80;

/// Console rows from top of the view to bottom, with the glyph for their traffic
const CONSOLE_LANES: [(f32, char); 3] = [
    (LANE_TOP, '<'),
    (LANE_BOTTOM_INNER, '>'),
    (LANE_BOTTOM_OUTER, '>'),
];

/// Renders frames as plain text for headless runs
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    header: Vec<String>,
    lanes: Option<Vec<Vec<char>>>,
    is_day: bool,
    bottom_phase: Option<SignalPhase>,
    top_phase: Option<SignalPhase>,
    countdown: Option<u32>,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            header: Vec::new(),
            lanes: None,
            is_day: true,
            bottom_phase: None,
            top_phase: None,
            countdown: None,
        }
    }

    fn column(x: f32) -> usize {
        let span = FAR_BOUND - NEAR_BOUND;
        let ratio = ((x - NEAR_BOUND) / span).clamp(0.0, 1.0);
        ((ratio * CONSOLE_WIDTH as f32) as usize).min(CONSOLE_WIDTH - 1)
    }

    fn lanes_mut(&mut self) -> &mut Vec<Vec<char>> {
        self.lanes.get_or_insert_with(|| {
            let signal_col = Self::column(BOTTOM_SIGNAL_POST.x + 10.0);
            CONSOLE_LANES
                .iter()
                .map(|_| {
                    let mut row = vec!['.'; CONSOLE_WIDTH];
                    row[signal_col] = '|';
                    row
                })
                .collect()
        })
    }

    /// The finished text frame
    pub fn finish(&self) -> String {
        let mut lines = self.header.clone();

        if let Some(lanes) = &self.lanes {
            let phase = |p: Option<SignalPhase>| match p {
                Some(SignalPhase::Red) => "RED",
                Some(SignalPhase::Green) => "GREEN",
                None => "-",
            };
            let countdown = self
                .countdown
                .map(|seconds| format!("Signal Change In: {}s", seconds))
                .unwrap_or_default();
            lines.push(format!(
                "[{}] top={} bottom={} {}",
                if self.is_day { "DAY" } else { "NIGHT" },
                phase(self.top_phase),
                phase(self.bottom_phase),
                countdown
            ));
            for row in lanes {
                lines.push(row.iter().collect());
            }
        }

        lines.join("\n")
    }
}

impl Renderer for ConsoleRenderer {
    fn draw_background(&mut self, is_day: bool) {
        self.is_day = is_day;
        self.lanes_mut();
    }

    fn draw_vehicle(&mut self, position: f32, lateral_offset: f32, _color: Rgb) {
        let Some(row) = CONSOLE_LANES
            .iter()
            .position(|(lane, _)| *lane == lateral_offset)
        else {
            return;
        };
        let glyph = CONSOLE_LANES[row].1;

        if position + VEHICLE_LENGTH < NEAR_BOUND || position > FAR_BOUND {
            return;
        }
        let start = Self::column(position);
        let end = Self::column(position + VEHICLE_LENGTH);
        let lanes = self.lanes_mut();
        for cell in &mut lanes[row][start..=end] {
            *cell = glyph;
        }
    }

    fn draw_signal(&mut self, post: Point, phase: SignalPhase) {
        if post == BOTTOM_SIGNAL_POST {
            self.bottom_phase = Some(phase);
        } else if post == TOP_SIGNAL_POST {
            self.top_phase = Some(phase);
        }
    }

    fn draw_countdown(&mut self, seconds_until_change: u32) {
        self.countdown = Some(seconds_until_change);
    }

    fn draw_menu(&mut self, layout: &MenuLayout) {
        self.header.push(layout.title.to_string());
        for region in &layout.regions {
            self.header.push(format!("  [ {} ]", region.label));
        }
    }

    fn draw_instructions(&mut self, lines: &[&str]) {
        self.header.push(super::screen::INSTRUCTIONS_TITLE.to_string());
        self.header.extend(lines.iter().map(|line| line.to_string()));
    }
}
