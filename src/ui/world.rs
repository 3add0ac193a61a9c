//! World setup systems for the camera

use bevy::prelude::*;

use super::components::MainCamera;

/// System to spawn the 2D camera. The view origin sits at the window centre.
pub fn setup_world(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));
}
