//! # keepsake_vfx
//!
//! CPU-driven decorative effects for Bevy: click-burst particles, a
//! twinkling star field, confetti, radial fireworks, and falling emoji
//! rain. Counts are small (tens to a few hundred), so everything is
//! simulated on the CPU and rendered with plain sprites — no readback,
//! no custom shaders.
//!
//! Every effect is fire-and-forget: send a message, the plugin spawns
//! short-lived entities that remove themselves when their lifespan timer
//! runs out.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use keepsake_vfx::{BurstEvent, VfxPlugin};
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(VfxPlugin)
//!         .add_systems(Update, burst_on_click)
//!         .run();
//! }
//!
//! fn burst_on_click(
//!     mouse: Res<ButtonInput<MouseButton>>,
//!     windows: Query<&Window>,
//!     mut bursts: MessageWriter<BurstEvent>,
//! ) {
//!     if let (true, Ok(window)) = (mouse.just_pressed(MouseButton::Left), windows.single()) {
//!         if let Some(cursor) = window.cursor_position() {
//!             bursts.write(BurstEvent::new(cursor, 30));
//!         }
//!     }
//! }
//! ```

pub mod particles;
pub mod sequencer;
pub mod settings;
pub mod spawners;
pub mod starfield;
pub mod surface;

pub use particles::{BurstEvent, Particle, ParticleField};
pub use sequencer::{Sequencer, SequencerAction};
pub use settings::VfxSettings;
pub use spawners::{
    ConfettiEvent, FireworkEvent, Glide, Lifespan, MagicEvent, RainEvent, RainKind, StartDelay,
};
pub use starfield::{Star, StarField, StarSurface};
pub use surface::OverlaySurface;

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Z offsets for the overlay layers, back to front.
pub mod layers {
    pub const STARS: f32 = 1.0;
    pub const RAIN: f32 = 8.0;
    pub const CONFETTI: f32 = 9.0;
    pub const PARTICLES: f32 = 10.0;
}

pub struct VfxPlugin;

impl Plugin for VfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BurstEvent>()
            .add_message::<ConfettiEvent>()
            .add_message::<FireworkEvent>()
            .add_message::<RainEvent>()
            .add_message::<MagicEvent>()
            .init_resource::<OverlaySurface>()
            .init_resource::<ParticleField>()
            .init_resource::<StarField>()
            .add_systems(PreStartup, (settings::init_vfx_settings, init_vfx_assets))
            .add_systems(PreUpdate, surface::sync_surface)
            .add_systems(
                Update,
                (
                    (
                        particles::spawn_burst_particles,
                        particles::update_particles,
                        particles::sync_particle_sprites,
                    )
                        .chain(),
                    (
                        starfield::regenerate_stars,
                        starfield::twinkle_stars.run_if(any_with_component::<StarSurface>),
                        starfield::sync_star_sprites,
                    )
                        .chain(),
                    (
                        spawners::handle_magic,
                        spawners::handle_confetti,
                        spawners::handle_fireworks,
                        spawners::handle_rain,
                        sequencer::tick_sequencers,
                    )
                        .chain(),
                    (
                        spawners::tick_start_delays,
                        spawners::advance_glides,
                        spawners::fade_sparks,
                        spawners::expire_lifespans,
                    )
                        .chain(),
                ),
            );
    }
}

/// Runtime-built textures shared by the effect sprites.
#[derive(Resource)]
pub struct VfxAssets {
    /// Solid white disc with a soft one-pixel edge; tinted per sprite.
    pub disc: Handle<Image>,
}

fn init_vfx_assets(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    commands.insert_resource(VfxAssets {
        disc: create_disc_texture(&mut images),
    });
}

fn create_disc_texture(images: &mut Assets<Image>) -> Handle<Image> {
    let size = 64u32;
    let center = size as f32 / 2.0;
    let mut data = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx * dx + dy * dy).sqrt();
            let alpha = ((center - distance).clamp(0.0, 1.0) * 255.0) as u8;

            data.push(255);
            data.push(255);
            data.push(255);
            data.push(alpha);
        }
    }

    images.add(Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        default(),
    ))
}
