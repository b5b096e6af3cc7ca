//! Night-sky page: the twinkling star field plus five clickable stars.

use bevy::prelude::*;
use keepsake_vfx::{OverlaySurface, StarSurface};

use super::{spawn_element, PageScene};
use crate::constants::{emoji, timing};
use crate::interact::ClickAction;

const CONSTELLATION_STARS: usize = 5;

pub(crate) fn build(mut commands: Commands, surface: Res<OverlaySurface>) {
    // The star field runs while this marker exists and clears itself
    // when the page is torn down.
    commands.spawn((PageScene, StarSurface));

    for i in 0..CONSTELLATION_STARS {
        let x = surface.width() * (i as f32 + 0.5) / CONSTELLATION_STARS as f32;
        let position = Vec2::new(x, surface.height() * 0.4);
        spawn_element(
            &mut commands,
            &surface,
            emoji::CONSTELLATION_STAR,
            position,
            ClickAction::Star,
            i as f32 * timing::STAR_STAGGER,
        );
    }
}
