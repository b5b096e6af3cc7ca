//! Main binary for running the keepsake scene standalone.

use bevy::prelude::*;
use keepsake::KeepsakePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Keepsake".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(KeepsakePlugin)
        .run();
}
