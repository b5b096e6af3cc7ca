//! Flower garden page: a row of clickable flowers.

use bevy::prelude::*;
use keepsake_vfx::OverlaySurface;

use super::spawn_element;
use crate::constants::{emoji, timing};
use crate::interact::ClickAction;

pub(crate) fn build(mut commands: Commands, surface: Res<OverlaySurface>) {
    let count = emoji::GARDEN_FLOWERS.len();
    for (i, glyph) in emoji::GARDEN_FLOWERS.into_iter().enumerate() {
        let x = surface.width() * (i as f32 + 0.5) / count as f32;
        let position = Vec2::new(x, surface.height() - 120.0);
        spawn_element(
            &mut commands,
            &surface,
            glyph,
            position,
            ClickAction::Flower,
            i as f32 * timing::FLOWER_STAGGER,
        );
    }
}
