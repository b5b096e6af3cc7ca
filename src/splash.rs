//! Startup greeting overlay, dismissed shortly after launch.

use bevy::prelude::*;
use keepsake_vfx::{Lifespan, OverlaySurface};

use crate::constants::{layout, timing};

pub struct SplashPlugin;

impl Plugin for SplashPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_splash);
    }
}

fn spawn_splash(mut commands: Commands, surface: Res<OverlaySurface>) {
    commands.spawn((
        Text2d::new("💕 keepsake 💕"),
        TextFont {
            font_size: 64.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_translation(
            surface.to_world(surface.center()).extend(layout::SPLASH_Z),
        ),
        Lifespan::seconds(timing::SPLASH_SECS),
    ));
}
