//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::canvas::BevyCanvas;
use super::components::{CountdownText, ScreenRoot, SimWorldResource};

/// System to run simulation tick
pub fn tick_simulation(mut sim_world: ResMut<SimWorldResource>) {
    sim_world.0.tick();
}

/// System to show the entity trees belonging to the active screen
pub fn sync_screen_visibility(
    sim_world: Res<SimWorldResource>,
    mut roots: Query<(&ScreenRoot, &mut Visibility)>,
) {
    let current = sim_world.0.current_screen();
    for (root, mut visibility) in roots.iter_mut() {
        let target = if root.0 == current {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(target);
    }
}

/// System to draw the current snapshot
pub fn draw_frame(
    sim_world: Res<SimWorldResource>,
    mut gizmos: Gizmos,
    mut clear_color: ResMut<ClearColor>,
    mut countdown_query: Query<&mut Text, With<CountdownText>>,
) {
    let world = &sim_world.0;
    let mut canvas = BevyCanvas {
        gizmos: &mut gizmos,
        clear_color: &mut *clear_color,
        countdown: countdown_query.single_mut().ok(),
    };
    world.snapshot().render(&mut canvas, &world.menu);
}
