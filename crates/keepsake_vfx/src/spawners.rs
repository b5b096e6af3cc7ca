//! One-shot decorative spawners: confetti, fireworks, and emoji rain.
//!
//! Every spawned node is owned by its [`Lifespan`] timer — the expiry
//! system is the single destructor and removes the entity exactly once.
//! Missing prerequisites (window, camera) degrade to a skipped effect,
//! never an error.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::particles::BurstEvent;
use crate::sequencer::{Sequencer, SequencerAction};
use crate::settings::VfxSettings;
use crate::surface::OverlaySurface;
use crate::{layers, VfxAssets};

pub const FLOWER_RAIN_EMOJI: [&str; 6] = ["🌸", "🌺", "🌻", "🌹", "🌷", "🌼"];
pub const HEART_RAIN_EMOJI: [&str; 8] = ["💕", "💖", "💗", "💓", "💝", "💘", "💞", "❤️"];

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Drop `count` confetti pieces across the top of the surface.
#[derive(Message)]
pub struct ConfettiEvent {
    pub count: u32,
}

/// Radial spark burst centered on `origin` (surface coordinates).
#[derive(Message)]
pub struct FireworkEvent {
    pub origin: Vec2,
}

/// Start a staggered emoji rain.
#[derive(Message)]
pub struct RainEvent {
    pub kind: RainKind,
}

/// The full celebration: staggered fireworks, both rains, a confetti
/// storm, and a center-screen particle burst. Fire-and-forget.
#[derive(Message, Default)]
pub struct MagicEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RainKind {
    Flowers,
    Hearts,
}

impl RainKind {
    pub fn emoji(self) -> &'static [&'static str] {
        match self {
            Self::Flowers => &FLOWER_RAIN_EMOJI,
            Self::Hearts => &HEART_RAIN_EMOJI,
        }
    }

    pub(crate) fn drops(self, settings: &VfxSettings) -> u32 {
        match self {
            Self::Flowers => settings.flower_rain_drops,
            Self::Hearts => settings.heart_rain_drops,
        }
    }

    pub(crate) fn interval(self, settings: &VfxSettings) -> f32 {
        match self {
            Self::Flowers => settings.flower_rain_interval,
            Self::Hearts => settings.heart_rain_interval,
        }
    }
}

// ---------------------------------------------------------------------------
// Transient-entity components
// ---------------------------------------------------------------------------

/// Sole owner of a transient effect entity; the expiry system despawns
/// the entity when this timer finishes, exactly once.
#[derive(Component)]
pub struct Lifespan(pub Timer);

impl Lifespan {
    pub fn seconds(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}

/// Freezes an effect until the timer runs out (animation-delay analog).
/// Removed from the entity once elapsed.
#[derive(Component)]
pub struct StartDelay(pub Timer);

impl StartDelay {
    pub fn seconds(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}

/// Linear glide between two surface points over `duration` seconds, with
/// an optional full-turn spin and fade-out along the way.
#[derive(Component)]
pub struct Glide {
    pub from: Vec2,
    pub to: Vec2,
    pub duration: f32,
    pub elapsed: f32,
    pub spin: bool,
    pub fade: bool,
}

impl Glide {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            spin: false,
            fade: false,
        }
    }

    pub fn with_spin(mut self) -> Self {
        self.spin = true;
        self
    }

    pub fn with_fade(mut self) -> Self {
        self.fade = true;
        self
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn position(&self) -> Vec2 {
        self.from.lerp(self.to, self.progress())
    }

    pub fn alpha(&self) -> f32 {
        if self.fade {
            1.0 - self.progress()
        } else {
            1.0
        }
    }

    /// Accumulated rotation, one full turn over the glide.
    pub fn angle(&self) -> f32 {
        if self.spin {
            TAU * self.progress()
        } else {
            0.0
        }
    }
}

/// Alpha fade for firework sparks. Purely visual: the spark's `Lifespan`
/// still owns the despawn.
#[derive(Component)]
pub struct SparkFade {
    pub speed: f32,
}

// ---------------------------------------------------------------------------
// Lifecycle systems
// ---------------------------------------------------------------------------

pub(crate) fn tick_start_delays(
    mut commands: Commands,
    time: Res<Time>,
    mut delays: Query<(Entity, &mut StartDelay)>,
) {
    for (entity, mut delay) in &mut delays {
        if delay.0.tick(time.delta()).is_finished() {
            commands.entity(entity).remove::<StartDelay>();
        }
    }
}

pub(crate) fn advance_glides(
    time: Res<Time>,
    surface: Res<OverlaySurface>,
    mut glides: Query<
        (
            &mut Glide,
            &mut Transform,
            Option<&mut Sprite>,
            Option<&mut TextColor>,
        ),
        Without<StartDelay>,
    >,
) {
    for (mut glide, mut transform, sprite, text_color) in &mut glides {
        glide.elapsed += time.delta_secs();

        let z = transform.translation.z;
        transform.translation = surface.to_world(glide.position()).extend(z);
        // Positive angle spins clockwise on screen.
        transform.rotation = Quat::from_rotation_z(-glide.angle());

        let alpha = glide.alpha();
        if let Some(mut sprite) = sprite {
            sprite.color.set_alpha(alpha);
        }
        if let Some(mut text_color) = text_color {
            text_color.0.set_alpha(alpha);
        }
    }
}

pub(crate) fn fade_sparks(
    time: Res<Time>,
    mut sparks: Query<(&SparkFade, &mut Sprite), Without<StartDelay>>,
) {
    for (fade, mut sprite) in &mut sparks {
        let alpha = (sprite.color.alpha() - fade.speed * time.delta_secs()).max(0.0);
        sprite.color.set_alpha(alpha);
    }
}

pub(crate) fn expire_lifespans(
    mut commands: Commands,
    time: Res<Time>,
    mut lifespans: Query<(Entity, &mut Lifespan)>,
) {
    for (entity, mut lifespan) in &mut lifespans {
        if lifespan.0.tick(time.delta()).just_finished() {
            commands.entity(entity).try_despawn();
        }
    }
}

// ---------------------------------------------------------------------------
// Confetti
// ---------------------------------------------------------------------------

pub(crate) fn handle_confetti(
    mut commands: Commands,
    mut events: MessageReader<ConfettiEvent>,
    settings: Res<VfxSettings>,
    surface: Res<OverlaySurface>,
    assets: Res<VfxAssets>,
) {
    for event in events.read() {
        for _ in 0..event.count {
            spawn_confetti_piece(&mut commands, &settings, &surface, &assets);
        }
    }
}

fn spawn_confetti_piece(
    commands: &mut Commands,
    settings: &VfxSettings,
    surface: &OverlaySurface,
    assets: &VfxAssets,
) {
    let x = surface.random_x();
    let size = 5.0 + fastrand::f32() * 10.0;
    let from = Vec2::new(x, -size);
    let to = Vec2::new(x, surface.height() + size);

    let mut sprite = Sprite {
        color: settings.pick_color(),
        custom_size: Some(Vec2::splat(size)),
        ..default()
    };
    // Half the pieces are round, half stay square.
    if fastrand::bool() {
        sprite.image = assets.disc.clone();
    }

    commands.spawn((
        sprite,
        Transform::from_translation(surface.to_world(from).extend(layers::CONFETTI)),
        Glide::new(from, to, settings.confetti_lifetime).with_spin(),
        StartDelay::seconds(fastrand::f32() * 2.0),
        Lifespan::seconds(settings.confetti_lifetime),
    ));
}

// ---------------------------------------------------------------------------
// Fireworks
// ---------------------------------------------------------------------------

/// Evenly spaced radial offsets: angle 2π·i/count, distance random in
/// [50, 150) per spark.
pub fn spark_offsets(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            let distance = 50.0 + fastrand::f32() * 100.0;
            Vec2::new(angle.cos(), angle.sin()) * distance
        })
        .collect()
}

pub(crate) fn handle_fireworks(
    mut commands: Commands,
    mut events: MessageReader<FireworkEvent>,
    settings: Res<VfxSettings>,
    surface: Res<OverlaySurface>,
    assets: Res<VfxAssets>,
) {
    for event in events.read() {
        for offset in spark_offsets(settings.firework_sparks) {
            let position = event.origin + offset;
            commands.spawn((
                Sprite {
                    image: assets.disc.clone(),
                    color: settings.pick_color(),
                    custom_size: Some(Vec2::splat(6.0)),
                    ..default()
                },
                Transform::from_translation(
                    surface.to_world(position).extend(layers::PARTICLES),
                ),
                StartDelay::seconds(fastrand::f32() * 0.3),
                SparkFade { speed: 1.5 },
                Lifespan::seconds(settings.firework_lifetime),
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// Emoji rain
// ---------------------------------------------------------------------------

pub(crate) fn handle_rain(
    mut commands: Commands,
    mut events: MessageReader<RainEvent>,
    settings: Res<VfxSettings>,
) {
    for event in events.read() {
        commands.spawn(Sequencer::new(
            event.kind.interval(&settings),
            event.kind.drops(&settings),
            SequencerAction::RainDrop(event.kind),
        ));
    }
}

pub(crate) fn spawn_rain_drop(
    commands: &mut Commands,
    settings: &VfxSettings,
    surface: &OverlaySurface,
    kind: RainKind,
) {
    let glyphs = kind.emoji();
    let glyph = glyphs[fastrand::usize(..glyphs.len())];
    let x = surface.random_x();
    let font_size = 20.0 + fastrand::f32() * 30.0;
    let duration = 3.0 + fastrand::f32() * 2.0;
    let from = Vec2::new(x, -50.0);
    let to = Vec2::new(x, surface.height() + 50.0);

    commands.spawn((
        Text2d::new(glyph),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_translation(surface.to_world(from).extend(layers::RAIN)),
        Glide::new(from, to, duration).with_spin().with_fade(),
        Lifespan::seconds(settings.rain_lifetime),
    ));
}

// ---------------------------------------------------------------------------
// Magic
// ---------------------------------------------------------------------------

pub(crate) fn handle_magic(
    mut commands: Commands,
    mut events: MessageReader<MagicEvent>,
    settings: Res<VfxSettings>,
    surface: Res<OverlaySurface>,
    mut bursts: MessageWriter<BurstEvent>,
    mut confetti: MessageWriter<ConfettiEvent>,
    mut rain: MessageWriter<RainEvent>,
) {
    for _ in events.read() {
        commands.spawn(Sequencer::new(
            settings.magic_firework_interval,
            settings.magic_fireworks,
            SequencerAction::FireworkAtRandom,
        ));
        rain.write(RainEvent {
            kind: RainKind::Hearts,
        });
        rain.write(RainEvent {
            kind: RainKind::Flowers,
        });
        confetti.write(ConfettiEvent {
            count: settings.magic_confetti,
        });
        bursts.write(BurstEvent::new(surface.center(), settings.magic_burst));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spark_offsets_are_evenly_spaced() {
        let count = 30;
        let offsets = spark_offsets(count);
        assert_eq!(offsets.len(), count);

        for (i, offset) in offsets.iter().enumerate() {
            let expected = TAU * i as f32 / count as f32;
            let angle = offset.y.atan2(offset.x).rem_euclid(TAU);
            let diff = (angle - expected.rem_euclid(TAU)).abs();
            assert!(
                diff < 1e-4 || (TAU - diff) < 1e-4,
                "spark {i}: angle {angle} != {expected}"
            );

            let distance = offset.length();
            assert!(distance >= 50.0 && distance < 150.0);
        }
    }

    #[test]
    fn glide_interpolates_position_spin_and_fade() {
        let mut glide = Glide::new(Vec2::new(100.0, 0.0), Vec2::new(100.0, 200.0), 4.0)
            .with_spin()
            .with_fade();
        glide.elapsed = 1.0;
        assert_eq!(glide.position(), Vec2::new(100.0, 50.0));
        assert!((glide.alpha() - 0.75).abs() < 1e-6);
        assert!((glide.angle() - TAU * 0.25).abs() < 1e-5);

        glide.elapsed = 10.0;
        // Past the end the glide holds its final pose.
        assert_eq!(glide.position(), Vec2::new(100.0, 200.0));
        assert_eq!(glide.alpha(), 0.0);
    }

    #[test]
    fn glide_without_flags_keeps_alpha_and_angle() {
        let mut glide = Glide::new(Vec2::ZERO, Vec2::new(0.0, 100.0), 2.0);
        glide.elapsed = 1.0;
        assert_eq!(glide.alpha(), 1.0);
        assert_eq!(glide.angle(), 0.0);
    }

    #[test]
    fn zero_duration_glide_is_already_done() {
        let glide = Glide::new(Vec2::ZERO, Vec2::new(10.0, 10.0), 0.0);
        assert_eq!(glide.progress(), 1.0);
        assert_eq!(glide.position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn rain_kinds_use_their_own_tuning() {
        let settings = VfxSettings::default();
        assert_eq!(RainKind::Flowers.drops(&settings), 30);
        assert_eq!(RainKind::Hearts.drops(&settings), 50);
        assert!(RainKind::Hearts.interval(&settings) < RainKind::Flowers.interval(&settings));
        assert!(!RainKind::Flowers.emoji().is_empty());
        assert!(!RainKind::Hearts.emoji().is_empty());
    }
}
