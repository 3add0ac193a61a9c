//! UI node trees for the menu, the instructions and the simulation overlay

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use super::components::{CountdownText, MenuButton, ScreenRoot, SimWorldResource};
use crate::simulation::{MenuRegion, Screen, INSTRUCTIONS_TITLE, INSTRUCTION_LINES, VIEW_HEIGHT};

pub const BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);

/// Full-window root node for one screen, hidden until that screen is active
fn screen_root(screen: Screen) -> impl Bundle {
    (
        ScreenRoot(screen),
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        Visibility::Hidden,
    )
}

/// Text placed with its baseline area at a y-up view position
fn spawn_label(parent: &mut ChildSpawnerCommands, x: f32, y: f32, text: &str, font_size: f32) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(x),
            top: Val::Px(VIEW_HEIGHT - y - font_size),
            ..default()
        },
    ));
}

/// System to build the menu from the simulation's menu layout, so the
/// buttons sit exactly where clicks are hit-tested
pub fn setup_menu_screen(mut commands: Commands, sim_world: Res<SimWorldResource>) {
    let layout = &sim_world.0.menu;

    commands
        .spawn(screen_root(Screen::Menu))
        .with_children(|parent| {
            spawn_label(parent, 320.0, 460.0, layout.title, 24.0);
            for region in &layout.regions {
                spawn_menu_button(parent, region);
            }
        });
}

fn spawn_menu_button(parent: &mut ChildSpawnerCommands, region: &MenuRegion) {
    parent
        .spawn((
            MenuButton,
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(region.x),
                top: Val::Px(VIEW_HEIGHT - region.y - region.height),
                width: Val::Px(region.width),
                height: Val::Px(region.height),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderColor::all(BUTTON_COLOR),
            BackgroundColor(BUTTON_COLOR),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(region.label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// System to build the instructions screen
pub fn setup_instructions_screen(mut commands: Commands) {
    commands
        .spawn(screen_root(Screen::Instructions))
        .with_children(|parent| {
            spawn_label(parent, 280.0, 500.0, INSTRUCTIONS_TITLE, 24.0);
            // The last line stands apart from the key list
            let rows = [440.0, 410.0, 380.0, 350.0, 300.0];
            for (line, y) in INSTRUCTION_LINES.iter().zip(rows) {
                spawn_label(parent, 150.0, y, line, 18.0);
            }
        });
}

/// System to build the text overlay of the simulation screen
pub fn setup_simulation_overlay(mut commands: Commands) {
    commands
        .spawn(screen_root(Screen::Simulation))
        .with_children(|parent| {
            parent.spawn((
                CountdownText,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(20.0),
                    top: Val::Px(VIEW_HEIGHT - 560.0 - 18.0),
                    ..default()
                },
            ));
        });
}
