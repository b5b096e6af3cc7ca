//! Home page: greeting, the magic charm, and drifting hearts.

use bevy::prelude::*;
use keepsake_vfx::{Glide, Lifespan, OverlaySurface};

use super::{spawn_element, PageScene};
use crate::constants::{emoji, layout, timing};
use crate::interact::ClickAction;

pub(crate) fn build(mut commands: Commands, surface: Res<OverlaySurface>) {
    commands.spawn((
        PageScene,
        Text2d::new("for you 💝"),
        TextFont {
            font_size: 56.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_translation(
            surface
                .to_world(Vec2::new(surface.center().x, surface.height() * 0.3))
                .extend(layout::ELEMENTS_Z),
        ),
    ));

    spawn_element(
        &mut commands,
        &surface,
        emoji::MAGIC_CHARM,
        Vec2::new(surface.center().x, surface.height() * 0.65),
        ClickAction::Magic,
        0.0,
    );
}

/// Inject one rising heart on a fixed interval. Only scheduled while the
/// home page is active; each heart also leaves with the page.
pub(crate) fn float_hearts(
    mut commands: Commands,
    time: Res<Time>,
    surface: Res<OverlaySurface>,
    mut timer: Local<Option<Timer>>,
) {
    let timer = timer
        .get_or_insert_with(|| Timer::from_seconds(timing::FLOAT_INTERVAL, TimerMode::Repeating));
    if !timer.tick(time.delta()).just_finished() {
        return;
    }

    let glyphs = emoji::FLOATING_HEARTS;
    let glyph = glyphs[fastrand::usize(..glyphs.len())];
    let x = surface.random_x();
    let font_size = 20.0 + fastrand::f32() * 20.0;
    let duration = 3.0 + fastrand::f32() * 2.0;
    let from = Vec2::new(x, surface.height() + 40.0);
    let to = Vec2::new(x, -40.0);

    commands.spawn((
        PageScene,
        Text2d::new(glyph),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_translation(surface.to_world(from).extend(layout::ELEMENTS_Z - 1.0)),
        Glide::new(from, to, duration).with_fade(),
        Lifespan::seconds(timing::FLOAT_LIFETIME),
    ));
}
