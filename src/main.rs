use std::str::FromStr;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use intersection_sim::simulation::{FixedStep, Flow, InputCommand, SimWorld, TICKS_PER_SECOND};

#[derive(Parser)]
#[command(name = "intersection_sim")]
#[command(about = "Signal-controlled intersection simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "1800")]
    ticks: u64,

    /// Real-time speed multiplier for the fixed simulation step, in (0, 1000]
    #[arg(long, default_value = "1.0", value_parser = parse_speed)]
    speed: f64,

    /// Pace headless ticks against the wall clock
    #[arg(long)]
    realtime: bool,

    /// Scripted command for headless mode, as TICK=COMMAND (e.g. 120=red)
    #[arg(long = "input", value_name = "TICK=COMMAND")]
    inputs: Vec<ScheduledInput>,
}

/// Highest accepted `--speed` multiplier
const MAX_SPEED: f64 = 1000.0;

fn parse_speed(s: &str) -> Result<f64> {
    let speed: f64 = s
        .trim()
        .parse()
        .with_context(|| format!("invalid speed '{}'", s))?;
    if !speed.is_finite() || speed <= 0.0 || speed > MAX_SPEED {
        bail!("speed must be in (0, {}], got {}", MAX_SPEED, speed);
    }
    Ok(speed)
}

/// A command applied just before the given loop iteration
#[derive(Debug, Clone)]
struct ScheduledInput {
    tick: u64,
    command: InputCommand,
}

impl FromStr for ScheduledInput {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (tick, command) = s
            .split_once('=')
            .with_context(|| format!("expected TICK=COMMAND, got '{}'", s))?;
        let tick = tick
            .trim()
            .parse()
            .with_context(|| format!("invalid tick '{}'", tick))?;
        Ok(Self {
            tick,
            command: command.parse()?,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        return run_with_ui(cli.speed);
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,intersection_sim=info"),
    )
    .init();
    run_headless(&cli);
    Ok(())
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli) {
    println!("Running intersection simulation in headless mode...");
    println!("Ticks: {}, {} ticks per simulated second", cli.ticks, TICKS_PER_SECOND);
    println!();

    let mut world = SimWorld::new();
    world.handle_input(InputCommand::StartSimulation);

    let mut inputs = cli.inputs.clone();
    inputs.sort_by_key(|input| input.tick);
    let mut pending = inputs.into_iter().peekable();

    println!("Initial state:");
    world.print_summary();
    println!("{}", world.draw_map());
    println!();

    let mut pacing = cli
        .realtime
        .then(|| (FixedStep::from_hz(f64::from(TICKS_PER_SECOND) * cli.speed), Instant::now()));

    let mut due = 0;
    let mut tick = 0;
    'run: while tick < cli.ticks {
        if let Some((stepper, last)) = pacing.as_mut() {
            while due == 0 {
                std::thread::sleep(stepper.step());
                due += stepper.advance(last.elapsed());
                *last = Instant::now();
            }
            due -= 1;
        }

        while let Some(input) = pending.next_if(|input| input.tick <= tick) {
            info!("Tick {}: {}", tick, input.command);
            if world.handle_input(input.command) == Flow::Exit {
                info!("Exit requested");
                break 'run;
            }
        }

        world.tick();
        tick += 1;

        if tick % u64::from(TICKS_PER_SECOND) == 0 {
            println!("--- After tick {} ---", tick);
            world.print_summary();
            println!("{}", world.draw_map());
            println!();
        }
    }

    report(&world);
}

fn report(world: &SimWorld) {
    let simulated_ticks = world.scheduler().ticks();
    info!("=== SIMULATION COMPLETE ===");
    info!(
        "Simulated seconds: {:.1}",
        simulated_ticks as f64 / f64::from(TICKS_PER_SECOND)
    );
    info!("Signal changes: {}", world.signals.phase_changes());
    info!("Day/night toggles: {}", world.day_night.toggles());
    info!("Vehicles: {}", world.vehicles.len());
    info!("Final screen: {:?}", world.current_screen());
}

#[cfg(not(feature = "ui"))]
fn run_with_ui(_speed: f64) -> Result<()> {
    bail!("UI feature is not enabled. Rebuild with --features ui")
}

#[cfg(feature = "ui")]
fn run_with_ui(speed: f64) -> Result<()> {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Intersection Sim UI...");
    println!();
    println!("Controls:");
    println!("  G / R  - Force bottom light green / red");
    println!("  D / N  - Force day / night");
    println!("  M      - Return to the menu");
    println!("  ESC    - Back to menu, or exit from the menu");
    println!();

    let hz = f64::from(TICKS_PER_SECOND) * speed;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,intersection_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Urban Traffic Simulation".into(),
                        resolution: (800, 600).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(Time::<Fixed>::from_hz(hz))
        .add_plugins(intersection_sim::ui::IntersectionSimUIPlugin)
        .run();
    Ok(())
}
