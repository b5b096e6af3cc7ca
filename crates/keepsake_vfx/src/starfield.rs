//! Twinkling star field, regenerated to fit the surface.

use bevy::prelude::*;

use crate::settings::VfxSettings;
use crate::surface::OverlaySurface;
use crate::{layers, VfxAssets};

/// Capability marker: while any entity carries this, the star field is
/// generated and twinkles. Remove the last one and the field is cleared.
#[derive(Component)]
pub struct StarSurface;

/// Marker on the sprite entity backing one star.
#[derive(Component)]
pub struct StarSprite;

/// A single star. Position is fixed for the star's whole life; only the
/// opacity animates.
pub struct Star {
    pub entity: Entity,
    pub position: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub twinkle: f32,
}

impl Star {
    pub fn random_in(entity: Entity, bounds: Vec2) -> Self {
        Self {
            entity,
            position: Vec2::new(fastrand::f32() * bounds.x, fastrand::f32() * bounds.y),
            radius: 1.0 + fastrand::f32() * 2.0,
            opacity: fastrand::f32(),
            twinkle: 0.01 + fastrand::f32() * 0.02,
        }
    }

    /// One twinkle step. Opacity may overshoot [0, 1] for a single frame;
    /// the reflection negates the speed once and the next step returns
    /// the value in range. Opacity is only clamped at render time.
    pub fn step(&mut self) {
        self.opacity += self.twinkle;
        if self.opacity > 1.0 || self.opacity < 0.0 {
            self.twinkle = -self.twinkle;
        }
    }
}

/// The current star set and the surface size it was generated for.
#[derive(Resource, Default)]
pub struct StarField {
    pub stars: Vec<Star>,
    generated_for: Option<Vec2>,
}

impl StarField {
    pub fn twinkle(&mut self) {
        for star in &mut self.stars {
            star.step();
        }
    }

    /// Whether the set must be rebuilt for `bounds`.
    pub fn needs_regen(&self, bounds: Vec2) -> bool {
        self.generated_for != Some(bounds)
    }

    pub(crate) fn mark_generated(&mut self, bounds: Vec2) {
        self.generated_for = Some(bounds);
    }

    /// Drop every star and return the sprite entities to despawn.
    pub fn clear(&mut self) -> Vec<Entity> {
        self.generated_for = None;
        self.stars.drain(..).map(|star| star.entity).collect()
    }
}

/// (Re)build the star set whenever a [`StarSurface`] is present and the
/// current set does not match the surface size. The single scheduled
/// system is the only animation loop, so repeated resizes replace the
/// collection in place rather than stacking competing loops.
pub(crate) fn regenerate_stars(
    mut commands: Commands,
    surface: Res<OverlaySurface>,
    settings: Res<VfxSettings>,
    assets: Res<VfxAssets>,
    mut field: ResMut<StarField>,
    star_surfaces: Query<(), With<StarSurface>>,
) {
    if star_surfaces.is_empty() {
        if !field.stars.is_empty() {
            for entity in field.clear() {
                commands.entity(entity).try_despawn();
            }
        }
        return;
    }

    if !field.needs_regen(surface.size) {
        return;
    }

    for entity in field.clear() {
        commands.entity(entity).try_despawn();
    }

    for _ in 0..settings.star_count {
        let entity = commands.spawn_empty().id();
        let star = Star::random_in(entity, surface.size);
        commands.entity(entity).insert((
            StarSprite,
            Sprite {
                image: assets.disc.clone(),
                custom_size: Some(Vec2::splat(star.radius * 2.0)),
                color: Color::srgba(1.0, 1.0, 1.0, star.opacity),
                ..default()
            },
            Transform::from_translation(surface.to_world(star.position).extend(layers::STARS)),
        ));
        field.stars.push(star);
    }
    field.mark_generated(surface.size);
}

pub(crate) fn twinkle_stars(mut field: ResMut<StarField>) {
    field.twinkle();
}

pub(crate) fn sync_star_sprites(
    field: Res<StarField>,
    mut sprites: Query<&mut Sprite, With<StarSprite>>,
) {
    for star in &field.stars {
        let Ok(mut sprite) = sprites.get_mut(star.entity) else {
            continue;
        };
        sprite.color.set_alpha(star.opacity.clamp(0.0, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(opacity: f32, twinkle: f32) -> Star {
        Star {
            entity: Entity::PLACEHOLDER,
            position: Vec2::ZERO,
            radius: 1.0,
            opacity,
            twinkle,
        }
    }

    #[test]
    fn opacity_advances_by_twinkle_speed() {
        let mut s = star(0.5, 0.02);
        s.step();
        assert!((s.opacity - 0.52).abs() < 1e-6);
        assert!((s.twinkle - 0.02).abs() < 1e-6);
    }

    #[test]
    fn reflection_flips_once_per_overshoot() {
        let mut s = star(0.995, 0.01);
        s.step();
        // One frame of overshoot is tolerated; the speed flips now.
        assert!(s.opacity > 1.0);
        assert!((s.twinkle + 0.01).abs() < 1e-6);

        s.step();
        // Back in range, and no second flip while recovering.
        assert!(s.opacity <= 1.0);
        assert!((s.twinkle + 0.01).abs() < 1e-6);
    }

    #[test]
    fn reflection_works_at_the_lower_bound() {
        let mut s = star(0.004, -0.01);
        s.step();
        assert!(s.opacity < 0.0);
        assert!((s.twinkle - 0.01).abs() < 1e-6);

        s.step();
        assert!(s.opacity >= 0.0);
        assert!((s.twinkle - 0.01).abs() < 1e-6);
    }

    #[test]
    fn random_stars_fit_the_bounds() {
        let bounds = Vec2::new(640.0, 480.0);
        for _ in 0..200 {
            let s = Star::random_in(Entity::PLACEHOLDER, bounds);
            assert!(s.position.x >= 0.0 && s.position.x < bounds.x);
            assert!(s.position.y >= 0.0 && s.position.y < bounds.y);
            assert!(s.radius >= 1.0 && s.radius < 3.0);
            assert!(s.opacity >= 0.0 && s.opacity < 1.0);
            assert!(s.twinkle >= 0.01 && s.twinkle < 0.03);
        }
    }

    #[test]
    fn regeneration_bookkeeping() {
        let mut field = StarField::default();
        let bounds = Vec2::new(800.0, 600.0);
        assert!(field.needs_regen(bounds));

        field.stars.push(star(0.5, 0.01));
        field.mark_generated(bounds);
        assert!(!field.needs_regen(bounds));
        // A resize invalidates the set.
        assert!(field.needs_regen(Vec2::new(1024.0, 768.0)));

        let removed = field.clear();
        assert_eq!(removed.len(), 1);
        assert!(field.stars.is_empty());
        assert!(field.needs_regen(bounds));
    }
}
