//! Input handling systems

use bevy::prelude::*;

use super::components::{MenuButton, SimWorldResource};
use super::screens::BUTTON_COLOR;
use crate::simulation::{Flow, InputCommand, MenuLayout, Screen};

const KEY_BINDINGS: [(KeyCode, char); 5] = [
    (KeyCode::KeyG, 'g'),
    (KeyCode::KeyR, 'r'),
    (KeyCode::KeyD, 'd'),
    (KeyCode::KeyN, 'n'),
    (KeyCode::KeyM, 'm'),
];

fn apply(
    sim_world: &mut SimWorldResource,
    command: InputCommand,
    exit: &mut MessageWriter<AppExit>,
) {
    if sim_world.0.handle_input(command) == Flow::Exit {
        bevy::log::info!("Exit requested");
        exit.write(AppExit::Success);
    }
}

/// Handle keyboard commands
pub fn handle_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    for (key, binding) in KEY_BINDINGS {
        if keyboard.just_pressed(key) {
            if let Some(command) = InputCommand::from_key(binding) {
                apply(&mut sim_world, command, &mut exit);
            }
        }
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        let command = InputCommand::escape(sim_world.0.current_screen());
        apply(&mut sim_world, command, &mut exit);
    }
}

/// Resolve left clicks on the menu against its layout regions
pub fn handle_menu_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut sim_world: ResMut<SimWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    if sim_world.0.current_screen() != Screen::Menu || !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let point = MenuLayout::window_to_view(cursor.x, cursor.y, window.width(), window.height());
    if let Some(command) = sim_world.0.menu.hit_test(point) {
        apply(&mut sim_world, command, &mut exit);
    }
}

/// Highlight menu buttons under the pointer
pub fn update_button_borders(
    mut interaction_query: Query<
        (&Interaction, &mut BorderColor),
        (Changed<Interaction>, With<MenuButton>),
    >,
) {
    for (interaction, mut border_color) in interaction_query.iter_mut() {
        *border_color = match *interaction {
            Interaction::Hovered | Interaction::Pressed => {
                BorderColor::all(Color::srgb(1.0, 1.0, 0.0))
            }
            Interaction::None => BorderColor::all(BUTTON_COLOR),
        };
    }
}
