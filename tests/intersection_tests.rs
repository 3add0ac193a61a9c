//! Simulation engine validation tests
//!
//! These run the simulation directly, without any rendering context.

use intersection_sim::simulation::{
    DayNightCycle, Flow, InputCommand, LaneDirection, MenuLayout, Point, Screen,
    ScreenController, SignalController, SignalPhase, SimWorld, Vehicle, VehicleSet,
    SIGNAL_INTERVAL_SECS, TICKS_PER_SECOND,
};

fn started_world() -> SimWorld {
    let mut world = SimWorld::new();
    assert_eq!(world.handle_input(InputCommand::StartSimulation), Flow::Continue);
    world
}

fn run_ticks(world: &mut SimWorld, ticks: u32) {
    for _ in 0..ticks {
        world.tick();
    }
}

#[test]
fn test_initial_state() {
    let world = SimWorld::new();
    assert_eq!(world.current_screen(), Screen::Menu);
    assert_eq!(world.signals.bottom_phase(), SignalPhase::Green);
    assert_eq!(world.signals.top_phase(), SignalPhase::Red);
    assert_eq!(world.signals.seconds_until_change(), SIGNAL_INTERVAL_SECS);
    assert!(world.day_night.is_day());
    assert_eq!(world.day_night.counter(), 0);
    assert_eq!(world.vehicles.len(), 7);
}

#[test]
fn test_countdown_decrements_once_per_calendar_second() {
    let mut world = started_world();

    run_ticks(&mut world, TICKS_PER_SECOND - 1);
    assert_eq!(world.signals.seconds_until_change(), 30);

    run_ticks(&mut world, 1);
    assert_eq!(world.signals.seconds_until_change(), 29);

    run_ticks(&mut world, TICKS_PER_SECOND);
    assert_eq!(world.signals.seconds_until_change(), 28);
}

#[test]
fn test_full_signal_cycle_flips_once() {
    let mut world = started_world();

    run_ticks(&mut world, 1799);
    assert_eq!(world.signals.seconds_until_change(), 1);
    assert_eq!(world.signals.phase_changes(), 0);

    run_ticks(&mut world, 1);
    assert_eq!(world.signals.seconds_until_change(), 30);
    assert_eq!(world.signals.phase_changes(), 1);
    assert_eq!(world.signals.bottom_phase(), SignalPhase::Red);
    assert_eq!(world.signals.top_phase(), SignalPhase::Green);
}

#[test]
fn test_day_night_toggles_every_thirty_seconds() {
    let mut world = started_world();

    run_ticks(&mut world, 29 * TICKS_PER_SECOND);
    assert!(world.day_night.is_day());
    assert_eq!(world.day_night.counter(), 29);

    run_ticks(&mut world, TICKS_PER_SECOND);
    assert!(!world.day_night.is_day());
    assert_eq!(world.day_night.counter(), 0);

    run_ticks(&mut world, 30 * TICKS_PER_SECOND);
    assert!(world.day_night.is_day());
    assert_eq!(world.day_night.toggles(), 2);
}

#[test]
fn test_phases_stay_opposite_under_input() {
    let mut world = started_world();
    let script = [
        InputCommand::ForceRedBottom,
        InputCommand::ForceNight,
        InputCommand::ForceGreenBottom,
        InputCommand::ReturnToMenu,
        InputCommand::StartSimulation,
        InputCommand::ForceDay,
    ];

    for tick in 0..6000u32 {
        if tick % 457 == 0 {
            let command = script[(tick / 457) as usize % script.len()];
            assert_eq!(world.handle_input(command), Flow::Continue);
        }
        world.tick();

        assert_ne!(world.signals.bottom_phase(), world.signals.top_phase());
        assert!(world.signals.seconds_until_change() <= SIGNAL_INTERVAL_SECS);
        assert!(world.day_night.counter() < 30);
    }
}

#[test]
fn test_force_green_bottom_is_idempotent() {
    let mut signals = SignalController::new();
    signals.advance(true);
    signals.advance(true);

    signals.force_green_bottom();
    let once = signals.clone();
    signals.force_green_bottom();

    assert_eq!(signals, once);
    assert_eq!(signals.seconds_until_change(), 30);
    assert_eq!(signals.bottom_phase(), SignalPhase::Green);
}

#[test]
fn test_force_red_bottom_resets_countdown() {
    let mut signals = SignalController::new();
    for _ in 0..12 {
        signals.advance(true);
    }
    assert_eq!(signals.seconds_until_change(), 18);

    signals.force_red_bottom();
    assert_eq!(signals.bottom_phase(), SignalPhase::Red);
    assert_eq!(signals.top_phase(), SignalPhase::Green);
    assert_eq!(signals.seconds_until_change(), 30);
    // Manual overrides are not automatic phase changes
    assert_eq!(signals.phase_changes(), 0);
}

#[test]
fn test_signal_ignores_partial_seconds() {
    let mut signals = SignalController::new();
    for _ in 0..100 {
        signals.advance(false);
    }
    assert_eq!(signals.seconds_until_change(), 30);
}

#[test]
fn test_day_night_override_keeps_counter() {
    let mut cycle = DayNightCycle::new();
    for _ in 0..10 {
        cycle.advance(true);
    }

    cycle.force_night();
    assert!(!cycle.is_day());
    assert_eq!(cycle.counter(), 10);

    // The automatic toggle still lands on the unchanged schedule
    for _ in 0..20 {
        cycle.advance(true);
    }
    assert!(cycle.is_day());
    assert_eq!(cycle.counter(), 0);
}

#[test]
fn test_bottom_vehicle_wraps_to_spawn_offset() {
    let mut vehicles = VehicleSet::new();
    vehicles.push(Vehicle::forward(859.5, 2.0, 170.0).with_spawn_offset(-60.0));
    vehicles.push(Vehicle::forward(859.5, 2.0, 210.0).with_spawn_offset(-200.0));

    vehicles.advance(&SignalController::new());

    assert_eq!(vehicles.get(0).map(|v| v.position), Some(-60.0));
    assert_eq!(vehicles.get(1).map(|v| v.position), Some(-200.0));
}

#[test]
fn test_top_vehicle_wraps_to_spawn_offset() {
    let mut vehicles = VehicleSet::new();
    vehicles.push(Vehicle::backward(-59.8, 0.5, 290.0).with_spawn_offset(960.0));
    vehicles.push(Vehicle::backward(-59.0, 0.5, 290.0).with_spawn_offset(960.0));

    vehicles.advance(&SignalController::new());

    assert_eq!(vehicles.get(0).map(|v| v.position), Some(960.0));
    assert_eq!(vehicles.get(1).map(|v| v.position), Some(-59.5));
}

#[test]
fn test_red_bottom_light_holds_vehicles_in_stop_zone() {
    let mut signals = SignalController::new();
    signals.force_red_bottom();

    let mut vehicles = VehicleSet::new();
    vehicles.push(Vehicle::forward(380.0, 1.0, 210.0));
    vehicles.push(Vehicle::forward(300.0, 1.0, 210.0));
    // Leading edge exactly on the zone start
    vehicles.push(Vehicle::forward(340.0, 1.0, 210.0));
    vehicles.push(Vehicle::forward(339.5, 1.0, 210.0));
    // Already past the zone
    vehicles.push(Vehicle::forward(441.0, 1.0, 210.0));

    vehicles.advance(&signals);

    let positions: Vec<f32> = vehicles.iter().map(|v| v.position).collect();
    assert_eq!(positions, vec![380.0, 301.0, 340.0, 340.5, 442.0]);
}

#[test]
fn test_green_bottom_light_lets_vehicles_through() {
    let mut vehicles = VehicleSet::new();
    vehicles.push(Vehicle::forward(400.0, 2.0, 170.0));

    vehicles.advance(&SignalController::new());

    assert_eq!(vehicles.get(0).map(|v| v.position), Some(402.0));
}

#[test]
fn test_top_lane_uses_raw_position_and_top_light() {
    // Bottom is green by default, so the top light is red
    let signals = SignalController::new();

    let mut vehicles = VehicleSet::new();
    vehicles.push(Vehicle::backward(400.0, 0.5, 290.0));
    vehicles.push(Vehicle::backward(430.0, 0.5, 290.0));
    vehicles.push(Vehicle::backward(369.0, 0.5, 290.0));

    vehicles.advance(&signals);

    let positions: Vec<f32> = vehicles.iter().map(|v| v.position).collect();
    assert_eq!(positions, vec![400.0, 429.5, 368.5]);
    assert_eq!(
        vehicles.get(0).map(|v| v.direction),
        Some(LaneDirection::Backward)
    );
}

#[test]
fn test_held_vehicle_moves_when_light_turns_green() {
    let mut world = SimWorld::with_vehicles({
        let mut vehicles = VehicleSet::new();
        vehicles.push(Vehicle::forward(380.0, 1.0, 210.0));
        vehicles
    });
    world.handle_input(InputCommand::StartSimulation);
    world.handle_input(InputCommand::ForceRedBottom);

    run_ticks(&mut world, 100);
    assert_eq!(world.vehicles.get(0).map(|v| v.position), Some(380.0));

    world.handle_input(InputCommand::ForceGreenBottom);
    run_ticks(&mut world, 5);
    assert_eq!(world.vehicles.get(0).map(|v| v.position), Some(385.0));
}

#[test]
fn test_simulation_pauses_outside_simulation_screen() {
    let mut world = SimWorld::new();
    let before = world.snapshot();
    run_ticks(&mut world, 500);
    assert_eq!(world.snapshot(), before);
    assert_eq!(world.scheduler().ticks(), 0);

    world.handle_input(InputCommand::StartSimulation);
    run_ticks(&mut world, 90);
    assert_eq!(world.signals.seconds_until_change(), 29);

    world.handle_input(InputCommand::ReturnToMenu);
    let paused = world.snapshot();
    run_ticks(&mut world, 1000);
    assert_eq!(world.snapshot().vehicles, paused.vehicles);
    assert_eq!(world.scheduler().frame_counter(), 30);

    // Resumes mid-second: 30 more ticks complete the second second
    world.handle_input(InputCommand::StartSimulation);
    run_ticks(&mut world, 29);
    assert_eq!(world.signals.seconds_until_change(), 29);
    run_ticks(&mut world, 1);
    assert_eq!(world.signals.seconds_until_change(), 28);
}

#[test]
fn test_screen_transitions() {
    let mut screen = ScreenController::new();
    assert_eq!(screen.current(), Screen::Menu);

    assert_eq!(screen.apply(InputCommand::ShowInstructions), Flow::Continue);
    assert_eq!(screen.current(), Screen::Instructions);

    // Menu-only commands are not offered here
    assert_eq!(screen.apply(InputCommand::StartSimulation), Flow::Continue);
    assert_eq!(screen.apply(InputCommand::Exit), Flow::Continue);
    assert_eq!(screen.current(), Screen::Instructions);

    screen.apply(InputCommand::ReturnToMenu);
    assert_eq!(screen.current(), Screen::Menu);

    screen.apply(InputCommand::StartSimulation);
    assert_eq!(screen.current(), Screen::Simulation);
    assert_eq!(screen.apply(InputCommand::Exit), Flow::Continue);

    screen.apply(InputCommand::ReturnToMenu);
    assert_eq!(screen.apply(InputCommand::Exit), Flow::Exit);
}

#[test]
fn test_overrides_are_live_on_every_screen() {
    let mut world = SimWorld::new();
    world.handle_input(InputCommand::ForceRedBottom);
    world.handle_input(InputCommand::ForceNight);

    assert_eq!(world.current_screen(), Screen::Menu);
    assert_eq!(world.signals.bottom_phase(), SignalPhase::Red);
    assert!(!world.day_night.is_day());
}

#[test]
fn test_menu_hit_test() {
    let layout = MenuLayout::default();

    assert_eq!(
        layout.hit_test(Point::new(400.0, 375.0)),
        Some(InputCommand::StartSimulation)
    );
    assert_eq!(
        layout.hit_test(Point::new(400.0, 295.0)),
        Some(InputCommand::ShowInstructions)
    );
    assert_eq!(
        layout.hit_test(Point::new(400.0, 215.0)),
        Some(InputCommand::Exit)
    );
    assert_eq!(
        layout.hit_test(Point::new(300.0, 350.0)),
        Some(InputCommand::StartSimulation)
    );
    assert_eq!(layout.hit_test(Point::new(400.0, 250.0)), None);
    assert_eq!(layout.hit_test(Point::new(100.0, 100.0)), None);
}

#[test]
fn test_window_clicks_flip_to_view_space() {
    assert_eq!(
        MenuLayout::window_to_view(0.0, 0.0, 800.0, 600.0),
        Point::new(0.0, 600.0)
    );
    assert_eq!(
        MenuLayout::window_to_view(800.0, 600.0, 800.0, 600.0),
        Point::new(800.0, 0.0)
    );
    // A window twice the size maps onto the same view
    assert_eq!(
        MenuLayout::window_to_view(800.0, 1200.0, 1600.0, 1200.0),
        Point::new(400.0, 0.0)
    );

    let layout = MenuLayout::default();
    let click = |x: f32, y: f32| layout.hit_test(MenuLayout::window_to_view(x, y, 800.0, 600.0));
    assert_eq!(click(400.0, 600.0 - 375.0), Some(InputCommand::StartSimulation));
    assert_eq!(click(400.0, 600.0 - 295.0), Some(InputCommand::ShowInstructions));
    assert_eq!(click(400.0, 600.0 - 215.0), Some(InputCommand::Exit));
    // Without the flip this would land on the Exit button
    assert_eq!(click(400.0, 215.0), None);
}

#[test]
fn test_key_bindings() {
    assert_eq!(InputCommand::from_key('g'), Some(InputCommand::ForceGreenBottom));
    assert_eq!(InputCommand::from_key('G'), Some(InputCommand::ForceGreenBottom));
    assert_eq!(InputCommand::from_key('R'), Some(InputCommand::ForceRedBottom));
    assert_eq!(InputCommand::from_key('d'), Some(InputCommand::ForceDay));
    assert_eq!(InputCommand::from_key('n'), Some(InputCommand::ForceNight));
    assert_eq!(InputCommand::from_key('M'), Some(InputCommand::ReturnToMenu));
    assert_eq!(InputCommand::from_key('x'), None);

    assert_eq!(InputCommand::escape(Screen::Menu), InputCommand::Exit);
    assert_eq!(
        InputCommand::escape(Screen::Simulation),
        InputCommand::ReturnToMenu
    );
}

#[test]
fn test_command_names() {
    assert_eq!("start".parse::<InputCommand>().ok(), Some(InputCommand::StartSimulation));
    assert_eq!(" Night ".parse::<InputCommand>().ok(), Some(InputCommand::ForceNight));
    assert!("honk".parse::<InputCommand>().is_err());
    assert_eq!(InputCommand::ForceRedBottom.to_string(), "red");
}
