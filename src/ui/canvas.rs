//! `Renderer` implementation drawing the simulation with Bevy gizmos

use bevy::math::Isometry2d;
use bevy::prelude::*;

use super::spawner::view_to_world;
use crate::simulation::{
    MenuLayout, Point, Renderer, Rgb, SignalPhase, VEHICLE_LENGTH, VEHICLE_WIDTH,
};

const MENU_BACKGROUND: Color = Color::srgb(0.3, 0.6, 0.9);
const INSTRUCTIONS_BACKGROUND: Color = Color::srgb(0.1, 0.1, 0.2);
const DAY_BACKGROUND: Color = Color::srgb(0.8, 0.9, 1.0);
const NIGHT_BACKGROUND: Color = Color::srgb(0.05, 0.05, 0.1);

const LAMP_RADIUS: f32 = 6.0;
const WHEEL_RADIUS: f32 = 4.0;

/// One frame's drawing target. Shapes are immediate-mode outlines and vanish
/// after the frame; the countdown and background persist until overwritten.
pub struct BevyCanvas<'a, 'w, 's> {
    pub gizmos: &'a mut Gizmos<'w, 's>,
    pub clear_color: &'a mut ClearColor,
    pub countdown: Option<Mut<'a, Text>>,
}

impl BevyCanvas<'_, '_, '_> {
    fn circle(&mut self, center: Point, radius: f32, color: Color) {
        let center = Isometry2d::from_translation(view_to_world(center));
        self.gizmos.circle_2d(center, radius, color);
    }
}

fn color(rgb: Rgb) -> Color {
    Color::srgb(rgb.r, rgb.g, rgb.b)
}

impl Renderer for BevyCanvas<'_, '_, '_> {
    fn draw_background(&mut self, is_day: bool) {
        self.clear_color.0 = if is_day {
            DAY_BACKGROUND
        } else {
            NIGHT_BACKGROUND
        };
    }

    fn draw_vehicle(&mut self, position: f32, lateral_offset: f32, rgb: Rgb) {
        let center = Point::new(
            position + VEHICLE_LENGTH / 2.0,
            lateral_offset + VEHICLE_WIDTH / 2.0,
        );
        self.gizmos.rect_2d(
            Isometry2d::from_translation(view_to_world(center)),
            Vec2::new(VEHICLE_LENGTH, VEHICLE_WIDTH),
            color(rgb),
        );
        for wheel in [10.0, 40.0] {
            self.circle(
                Point::new(position + wheel, lateral_offset - 4.0),
                WHEEL_RADIUS,
                Color::BLACK,
            );
        }
    }

    fn draw_signal(&mut self, post: Point, phase: SignalPhase) {
        let (red, green) = match phase {
            SignalPhase::Red => (1.0, 0.2),
            SignalPhase::Green => (0.2, 1.0),
        };
        self.circle(
            Point::new(post.x + 10.0, post.y + 50.0),
            LAMP_RADIUS,
            Color::srgb(red, 0.0, 0.0),
        );
        self.circle(
            Point::new(post.x + 10.0, post.y + 10.0),
            LAMP_RADIUS,
            Color::srgb(0.0, green, 0.0),
        );
    }

    fn draw_countdown(&mut self, seconds_until_change: u32) {
        if let Some(text) = self.countdown.as_mut() {
            let label = format!("Signal Change In: {}s", seconds_until_change);
            if text.0 != label {
                text.0 = label;
            }
        }
    }

    fn draw_menu(&mut self, _layout: &MenuLayout) {
        // Buttons are UI nodes built from the same layout
        self.clear_color.0 = MENU_BACKGROUND;
    }

    fn draw_instructions(&mut self, _lines: &[&str]) {
        self.clear_color.0 = INSTRUCTIONS_BACKGROUND;
    }
}
