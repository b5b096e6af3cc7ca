//! Ocean page: message bottles washed up in a row.

use bevy::prelude::*;
use keepsake_vfx::OverlaySurface;

use super::spawn_element;
use crate::constants::{emoji, timing};
use crate::interact::ClickAction;

pub(crate) fn build(mut commands: Commands, surface: Res<OverlaySurface>) {
    let count = emoji::BOTTLES.len();
    for (i, glyph) in emoji::BOTTLES.into_iter().enumerate() {
        let x = surface.width() * (i as f32 + 0.5) / count as f32;
        let position = Vec2::new(x, surface.height() * 0.6);
        spawn_element(
            &mut commands,
            &surface,
            glyph,
            position,
            ClickAction::Bottle,
            i as f32 * timing::BOTTLE_STAGGER,
        );
    }
}
