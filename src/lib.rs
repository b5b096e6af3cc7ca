//! # Keepsake
//!
//! An interactive celebration scene: four decorative pages (home, flower
//! garden, night sky, ocean) full of clickable emoji that answer with
//! particle bursts, confetti, fireworks, and emoji rain.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bevy::prelude::*;
//! use keepsake::KeepsakePlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(KeepsakePlugin)
//!         .run();
//! }
//! ```
//!
//! ## Controls
//!
//! - Click the navigation cards (or press `1`-`4`) to switch pages
//! - Click flowers, stars, and bottles for per-element effects
//! - Click the ✨ charm (or press `Space`) for the full celebration

pub mod constants;
pub mod interact;
pub mod pages;
pub mod splash;

pub use interact::{ClickAction, Flourish, Interactive};
pub use pages::{Page, PageScene};

use bevy::prelude::*;
use keepsake_vfx::VfxPlugin;

/// Main plugin bundling the effects engine and the scene.
pub struct KeepsakePlugin;

impl Plugin for KeepsakePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.07, 0.05, 0.12)))
            .add_plugins(VfxPlugin)
            .add_plugins(pages::PagesPlugin)
            .add_plugins(interact::InteractPlugin)
            .add_plugins(splash::SplashPlugin)
            .add_systems(Startup, setup_scene);
    }
}

fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera2d);
}
