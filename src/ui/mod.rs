//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The UI reads state from `SimWorld` and renders it through the simulation's `Renderer` trait.

mod canvas;
mod components;
mod input;
mod screens;
pub mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::SimWorldResource;

use input::{handle_keyboard, handle_menu_clicks, update_button_borders};
use screens::{setup_instructions_screen, setup_menu_screen, setup_simulation_overlay};
use spawner::spawn_scene;
use sync::{draw_frame, sync_screen_visibility, tick_simulation};
use world::setup_world;

/// Plugin to register all UI systems
pub struct IntersectionSimUIPlugin;

impl Plugin for IntersectionSimUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimWorldResource>()
            .add_systems(
                Startup,
                (
                    setup_world,
                    spawn_scene,
                    setup_menu_screen,
                    setup_instructions_screen,
                    setup_simulation_overlay,
                ),
            )
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    (handle_keyboard, handle_menu_clicks),
                    (sync_screen_visibility, draw_frame),
                    update_button_borders,
                )
                    .chain(),
            );
    }
}
