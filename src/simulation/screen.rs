//! Screen state machine and input commands
//!
//! Input sources (keyboard, pointer, scripted runs) resolve their raw events
//! into [`InputCommand`]s here; nothing in this module knows about windows.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use log::debug;

use super::types::{Point, VIEW_HEIGHT, VIEW_WIDTH};

/// Which presentation mode is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Instructions,
    Simulation,
}

/// A discrete operator command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCommand {
    StartSimulation,
    ShowInstructions,
    ReturnToMenu,
    Exit,
    ForceGreenBottom,
    ForceRedBottom,
    ForceDay,
    ForceNight,
}

impl InputCommand {
    /// Resolve a keyboard character, case-insensitively
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'g' => Some(InputCommand::ForceGreenBottom),
            'r' => Some(InputCommand::ForceRedBottom),
            'd' => Some(InputCommand::ForceDay),
            'n' => Some(InputCommand::ForceNight),
            'm' => Some(InputCommand::ReturnToMenu),
            _ => None,
        }
    }

    /// Escape leaves the current screen: it quits from the menu and returns
    /// to the menu from everywhere else
    pub fn escape(screen: Screen) -> Self {
        match screen {
            Screen::Menu => InputCommand::Exit,
            Screen::Instructions | Screen::Simulation => InputCommand::ReturnToMenu,
        }
    }

    /// Whether this command is offered on `screen`
    pub fn is_live_on(self, screen: Screen) -> bool {
        match self {
            InputCommand::StartSimulation | InputCommand::ShowInstructions | InputCommand::Exit => {
                screen == Screen::Menu
            }
            InputCommand::ReturnToMenu
            | InputCommand::ForceGreenBottom
            | InputCommand::ForceRedBottom
            | InputCommand::ForceDay
            | InputCommand::ForceNight => true,
        }
    }

    fn name(self) -> &'static str {
        match self {
            InputCommand::StartSimulation => "start",
            InputCommand::ShowInstructions => "help",
            InputCommand::ReturnToMenu => "menu",
            InputCommand::Exit => "exit",
            InputCommand::ForceGreenBottom => "green",
            InputCommand::ForceRedBottom => "red",
            InputCommand::ForceDay => "day",
            InputCommand::ForceNight => "night",
        }
    }
}

impl fmt::Display for InputCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_ascii_lowercase().as_str() {
            "start" => InputCommand::StartSimulation,
            "help" | "instructions" => InputCommand::ShowInstructions,
            "menu" => InputCommand::ReturnToMenu,
            "exit" | "quit" => InputCommand::Exit,
            "green" => InputCommand::ForceGreenBottom,
            "red" => InputCommand::ForceRedBottom,
            "day" => InputCommand::ForceDay,
            "night" => InputCommand::ForceNight,
            other => bail!("unknown command '{}'", other),
        };
        Ok(command)
    }
}

/// Whether the process should keep running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Tracks the active screen. All transitions are operator-triggered.
#[derive(Debug, Clone, Default)]
pub struct ScreenController {
    current: Screen,
}

impl ScreenController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Apply a screen command. Commands that don't change screens, and
    /// commands not offered on the current screen, leave it untouched.
    pub fn apply(&mut self, command: InputCommand) -> Flow {
        if !command.is_live_on(self.current) {
            debug!("Ignoring '{}' on {:?}", command, self.current);
            return Flow::Continue;
        }

        let next = match command {
            InputCommand::StartSimulation => Screen::Simulation,
            InputCommand::ShowInstructions => Screen::Instructions,
            InputCommand::ReturnToMenu => Screen::Menu,
            InputCommand::Exit => return Flow::Exit,
            _ => return Flow::Continue,
        };

        if next != self.current {
            debug!("Screen {:?} -> {:?}", self.current, next);
            self.current = next;
        }
        Flow::Continue
    }
}

/// A clickable rectangle on the menu, in y-up view coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: &'static str,
    pub command: InputCommand,
}

impl MenuRegion {
    /// Inclusive on all edges
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// The menu's interactive regions, shared by drawing and hit-testing
#[derive(Debug, Clone)]
pub struct MenuLayout {
    pub title: &'static str,
    pub regions: Vec<MenuRegion>,
}

impl Default for MenuLayout {
    fn default() -> Self {
        let button = |y: f32, label: &'static str, command: InputCommand| MenuRegion {
            x: 300.0,
            y,
            width: 200.0,
            height: 50.0,
            label,
            command,
        };

        Self {
            title: "Smart Traffic Simulation",
            regions: vec![
                button(350.0, "Start Simulation", InputCommand::StartSimulation),
                button(270.0, "Instructions", InputCommand::ShowInstructions),
                button(190.0, "Exit", InputCommand::Exit),
            ],
        }
    }
}

impl MenuLayout {
    /// Map a window cursor position (origin top-left, y down) in a window of
    /// `width` x `height` onto the y-up view the layout is defined in
    pub fn window_to_view(cursor_x: f32, cursor_y: f32, width: f32, height: f32) -> Point {
        Point::new(
            cursor_x * VIEW_WIDTH / width,
            VIEW_HEIGHT - cursor_y * VIEW_HEIGHT / height,
        )
    }

    /// Resolve a click at `point` into the command of the region under it
    pub fn hit_test(&self, point: Point) -> Option<InputCommand> {
        self.regions
            .iter()
            .find(|region| region.contains(point))
            .map(|region| region.command)
    }
}

pub const INSTRUCTIONS_TITLE: &str = "Instructions";

pub const INSTRUCTION_LINES: [&str; 5] = [
    "- Press 'G' to turn bottom light GREEN",
    "- Press 'R' to turn bottom light RED",
    "- Press 'D' for Day mode, 'N' for Night mode",
    "- Day/Night switches every 30s automatically",
    "- Press 'M' to return to the Menu",
];
