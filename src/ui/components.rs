//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{Screen, SimWorld};

/// Resource wrapper for the simulation world
#[derive(Resource, Default)]
pub struct SimWorldResource(pub SimWorld);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Root of an entity tree shown only while its screen is active
#[derive(Component)]
pub struct ScreenRoot(pub Screen);

/// Marker for menu buttons
#[derive(Component)]
pub struct MenuButton;

/// Text showing the seconds left until the signals change
#[derive(Component)]
pub struct CountdownText;
