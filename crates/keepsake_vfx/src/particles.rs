//! Click-burst particle simulation.
//!
//! The [`ParticleField`] owns every live particle; the backing sprite
//! entities are disposable and despawned together with their records.
//! Motion uses a fixed per-frame step (position += velocity, gravity on
//! the vertical axis, life burned by a per-particle decay), matching the
//! frame-based physics of hand-rolled canvas particle loops.

use bevy::prelude::*;

use crate::surface::OverlaySurface;
use crate::{layers, VfxAssets};

/// Downward acceleration applied to the vertical velocity once per frame.
pub const GRAVITY_PER_FRAME: f32 = 0.1;

/// Request a burst of `count` particles at `origin` (surface coordinates).
#[derive(Message)]
pub struct BurstEvent {
    pub origin: Vec2,
    pub count: u32,
}

impl BurstEvent {
    pub fn new(origin: Vec2, count: u32) -> Self {
        Self { origin, count }
    }
}

/// Marker on the sprite entity backing one particle.
#[derive(Component)]
pub struct BurstParticle;

/// A single simulated particle, in surface coordinates.
pub struct Particle {
    pub entity: Entity,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Remaining life in [0, 1]; doubles as the render alpha.
    pub life: f32,
    pub decay: f32,
}

impl Particle {
    /// Fresh particle at `origin` with randomized velocity, size, hue,
    /// and decay rate.
    pub fn random_at(entity: Entity, origin: Vec2) -> Self {
        Self {
            entity,
            position: origin,
            velocity: Vec2::new(
                fastrand::f32() * 4.0 - 2.0,
                fastrand::f32() * 4.0 - 2.0,
            ),
            radius: 2.0 + fastrand::f32() * 4.0,
            color: Color::hsl(fastrand::f32() * 360.0, 1.0, 0.6),
            life: 1.0,
            decay: 0.01 + fastrand::f32() * 0.02,
        }
    }

    /// One frame of motion: integrate position, pull the vertical
    /// velocity down, burn life.
    pub fn step(&mut self) {
        self.position += self.velocity;
        self.velocity.y += GRAVITY_PER_FRAME;
        self.life -= self.decay;
    }

    /// Faded out, or fallen past the bottom edge.
    pub fn expired(&self, surface_height: f32) -> bool {
        self.life <= 0.0 || self.position.y > surface_height
    }
}

/// All live burst particles.
#[derive(Resource, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Step every particle once and drop the expired ones in a single
    /// in-place pass. Returns the entities whose records were removed.
    pub fn advance(&mut self, surface_height: f32) -> Vec<Entity> {
        let mut removed = Vec::new();
        self.particles.retain_mut(|p| {
            p.step();
            if p.expired(surface_height) {
                removed.push(p.entity);
                false
            } else {
                true
            }
        });
        removed
    }
}

pub(crate) fn spawn_burst_particles(
    mut commands: Commands,
    mut bursts: MessageReader<BurstEvent>,
    mut field: ResMut<ParticleField>,
    assets: Res<VfxAssets>,
    surface: Res<OverlaySurface>,
) {
    for burst in bursts.read() {
        for _ in 0..burst.count {
            let entity = commands.spawn_empty().id();
            let particle = Particle::random_at(entity, burst.origin);
            commands.entity(entity).insert((
                BurstParticle,
                Sprite {
                    image: assets.disc.clone(),
                    custom_size: Some(Vec2::splat(particle.radius * 2.0)),
                    color: particle.color,
                    ..default()
                },
                Transform::from_translation(
                    surface.to_world(particle.position).extend(layers::PARTICLES),
                ),
            ));
            field.particles.push(particle);
        }
    }
}

pub(crate) fn update_particles(
    mut commands: Commands,
    mut field: ResMut<ParticleField>,
    surface: Res<OverlaySurface>,
) {
    for entity in field.advance(surface.height()) {
        commands.entity(entity).try_despawn();
    }
}

pub(crate) fn sync_particle_sprites(
    field: Res<ParticleField>,
    surface: Res<OverlaySurface>,
    mut sprites: Query<(&mut Transform, &mut Sprite), With<BurstParticle>>,
) {
    for particle in &field.particles {
        let Ok((mut transform, mut sprite)) = sprites.get_mut(particle.entity) else {
            continue;
        };
        transform.translation = surface.to_world(particle.position).extend(layers::PARTICLES);
        sprite.color.set_alpha(particle.life.clamp(0.0, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(position: Vec2, velocity: Vec2, life: f32, decay: f32) -> Particle {
        Particle {
            entity: Entity::PLACEHOLDER,
            position,
            velocity,
            radius: 3.0,
            color: Color::WHITE,
            life,
            decay,
        }
    }

    #[test]
    fn step_integrates_one_frame() {
        let mut p = particle(Vec2::new(10.0, 20.0), Vec2::new(1.5, -2.0), 1.0, 0.02);
        p.step();
        assert_eq!(p.position, Vec2::new(11.5, 18.0));
        assert_eq!(p.velocity.x, 1.5);
        assert!((p.velocity.y + 1.9).abs() < 1e-6);
        assert!((p.life - 0.98).abs() < 1e-6);
    }

    #[test]
    fn expires_on_spent_life_or_bottom_edge() {
        let spent = particle(Vec2::new(0.0, 0.0), Vec2::ZERO, 0.0, 0.01);
        assert!(spent.expired(600.0));

        let fallen = particle(Vec2::new(0.0, 601.0), Vec2::ZERO, 0.5, 0.01);
        assert!(fallen.expired(600.0));

        let alive = particle(Vec2::new(0.0, 599.0), Vec2::ZERO, 0.5, 0.01);
        assert!(!alive.expired(600.0));
    }

    #[test]
    fn advance_removes_exactly_the_expired() {
        let mut field = ParticleField::default();
        // Burns out this step.
        field
            .particles
            .push(particle(Vec2::new(0.0, 0.0), Vec2::ZERO, 0.005, 0.01));
        // Crosses the bottom edge this step.
        field
            .particles
            .push(particle(Vec2::new(0.0, 598.0), Vec2::new(0.0, 3.0), 1.0, 0.01));
        // Stays alive.
        field
            .particles
            .push(particle(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0), 1.0, 0.01));

        let removed = field.advance(600.0);
        assert_eq!(removed.len(), 2);
        assert_eq!(field.particles.len(), 1);
        assert_eq!(field.particles[0].position, Vec2::new(51.0, 51.0));
    }

    #[test]
    fn advance_is_safe_over_an_empty_field() {
        let mut field = ParticleField::default();
        assert!(field.advance(600.0).is_empty());
    }

    #[test]
    fn random_particles_respect_the_documented_ranges() {
        for _ in 0..200 {
            let p = Particle::random_at(Entity::PLACEHOLDER, Vec2::new(5.0, 7.0));
            assert_eq!(p.position, Vec2::new(5.0, 7.0));
            assert!(p.velocity.x >= -2.0 && p.velocity.x < 2.0);
            assert!(p.velocity.y >= -2.0 && p.velocity.y < 2.0);
            assert!(p.radius >= 2.0 && p.radius < 6.0);
            assert!(p.decay >= 0.01 && p.decay < 0.03);
            assert_eq!(p.life, 1.0);
        }
    }
}
