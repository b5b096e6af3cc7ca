//! Effect tuning: built-in defaults with an optional RON override on disk.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

const SETTINGS_PATH: &str = "assets/vfx.settings.ron";

/// Tunable effect parameters. Colors are sRGB triples so the file stays
/// hand-editable; missing fields fall back to the defaults below.
#[derive(Resource, Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct VfxSettings {
    /// Shared palette for confetti and firework sparks.
    pub palette: Vec<[f32; 3]>,
    /// Stars generated per star-field (re)build.
    pub star_count: usize,
    /// Seconds from confetti spawn to removal.
    pub confetti_lifetime: f32,
    /// Sparks per firework, spaced evenly around the burst circle.
    pub firework_sparks: usize,
    /// Seconds from spark spawn to removal.
    pub firework_lifetime: f32,
    /// Seconds from rain-drop spawn to removal.
    pub rain_lifetime: f32,
    pub flower_rain_drops: u32,
    pub flower_rain_interval: f32,
    pub heart_rain_drops: u32,
    pub heart_rain_interval: f32,
    /// Staggered fireworks in the magic finale.
    pub magic_fireworks: u32,
    pub magic_firework_interval: f32,
    pub magic_confetti: u32,
    pub magic_burst: u32,
}

impl Default for VfxSettings {
    fn default() -> Self {
        Self {
            palette: vec![
                [1.0, 0.0, 0.431],   // pink
                [0.514, 0.22, 0.925], // violet
                [0.227, 0.525, 1.0], // azure
                [0.024, 1.0, 0.647], // mint
                [1.0, 0.745, 0.043], // amber
                [0.984, 0.337, 0.027], // ember
            ],
            star_count: 100,
            confetti_lifetime: 3.0,
            firework_sparks: 30,
            firework_lifetime: 1.0,
            rain_lifetime: 5.0,
            flower_rain_drops: 30,
            flower_rain_interval: 0.1,
            heart_rain_drops: 50,
            heart_rain_interval: 0.05,
            magic_fireworks: 20,
            magic_firework_interval: 0.1,
            magic_confetti: 150,
            magic_burst: 300,
        }
    }
}

impl VfxSettings {
    /// Random palette color. White if the palette was edited down to empty.
    pub fn pick_color(&self) -> Color {
        if self.palette.is_empty() {
            return Color::WHITE;
        }
        let [r, g, b] = self.palette[fastrand::usize(..self.palette.len())];
        Color::srgb(r, g, b)
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }
}

pub(crate) fn init_vfx_settings(mut commands: Commands) {
    commands.insert_resource(load_settings(Path::new(SETTINGS_PATH)));
}

fn load_settings(path: &Path) -> VfxSettings {
    if !path.is_file() {
        return VfxSettings::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Failed to read VFX settings {:?}: {}", path, e);
            return VfxSettings::default();
        }
    };

    match VfxSettings::from_ron_str(&contents) {
        Ok(settings) => {
            info!("Loaded VFX settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("Failed to parse VFX settings {:?}: {}", path, e);
            VfxSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_effect_contracts() {
        let settings = VfxSettings::default();
        assert_eq!(settings.palette.len(), 6);
        assert_eq!(settings.star_count, 100);
        assert_eq!(settings.firework_sparks, 30);
        assert_eq!(settings.flower_rain_drops, 30);
        assert_eq!(settings.heart_rain_drops, 50);
        assert_eq!(settings.magic_fireworks, 20);
        assert_eq!(settings.magic_confetti, 150);
        assert_eq!(settings.magic_burst, 300);
        assert_eq!(settings.confetti_lifetime, 3.0);
        assert_eq!(settings.firework_lifetime, 1.0);
        assert_eq!(settings.rain_lifetime, 5.0);
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let settings = VfxSettings::from_ron_str("(star_count: 12)").unwrap();
        assert_eq!(settings.star_count, 12);
        assert_eq!(settings.firework_sparks, 30);
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(VfxSettings::from_ron_str("(star_count: \"many\")").is_err());
    }

    #[test]
    fn empty_palette_falls_back_to_white() {
        let settings = VfxSettings {
            palette: Vec::new(),
            ..default()
        };
        assert_eq!(settings.pick_color(), Color::WHITE);
    }
}
