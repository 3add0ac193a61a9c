//! Systems for spawning the static intersection scenery

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use super::components::ScreenRoot;
use crate::simulation::{
    Point, Screen, BOTTOM_SIGNAL_POST, TOP_SIGNAL_POST, VIEW_HEIGHT, VIEW_WIDTH,
};

/// Convert a y-up view point (origin bottom-left) into a 2D world position
pub fn view_to_world(point: Point) -> Vec2 {
    Vec2::new(point.x - VIEW_WIDTH / 2.0, point.y - VIEW_HEIGHT / 2.0)
}

/// System to spawn buildings, road, lane markings and signal housings.
/// They sit under one root that is only visible on the simulation screen.
pub fn spawn_scene(mut commands: Commands) {
    commands
        .spawn((
            ScreenRoot(Screen::Simulation),
            Transform::default(),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            // Buildings
            spawn_rect(parent, (50.0, 500.0), (150.0, 600.0), 0.0, Color::srgb(0.7, 0.7, 0.8));
            spawn_rect(parent, (650.0, 450.0), (750.0, 600.0), 0.0, Color::srgb(0.5, 0.5, 0.6));

            // Road and lane markings
            spawn_rect(parent, (0.0, 150.0), (800.0, 350.0), 0.0, Color::srgb(0.2, 0.2, 0.2));
            for i in (0..800).step_by(80) {
                let x = i as f32;
                spawn_rect(parent, (x + 10.0, 245.0), (x + 40.0, 255.0), 0.1, Color::WHITE);
            }

            // Signal housings; the lamps are drawn every frame
            for post in [BOTTOM_SIGNAL_POST, TOP_SIGNAL_POST] {
                spawn_rect(
                    parent,
                    (post.x, post.y),
                    (post.x + 20.0, post.y + 60.0),
                    0.2,
                    Color::srgb(0.1, 0.1, 0.1),
                );
            }
        });
}

/// Spawn an axis-aligned rectangle given its view-space corners
fn spawn_rect(
    parent: &mut ChildSpawnerCommands,
    min: (f32, f32),
    max: (f32, f32),
    z: f32,
    color: Color,
) {
    let size = Vec2::new(max.0 - min.0, max.1 - min.1);
    let center = view_to_world(Point::new(min.0 + size.x / 2.0, min.1 + size.y / 2.0));
    parent.spawn((
        Sprite::from_color(color, size),
        Transform::from_translation(center.extend(z)),
    ));
}
