//! Page scenes and navigation.
//!
//! Each page builds its furniture on enter and tears it down on exit via
//! the [`PageScene`] marker. Subsystems with extra needs (the star field)
//! probe for their capability marker instead of assuming a page.

pub mod garden;
pub mod home;
pub mod night_sky;
pub mod ocean;

use bevy::prelude::*;
use keepsake_vfx::OverlaySurface;

use crate::constants::layout;
use crate::interact::{ClickAction, Interactive, PopIn};

/// The four decorative pages.
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Garden,
    NightSky,
    Ocean,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Garden, Self::NightSky, Self::Ocean];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Garden => "Garden",
            Self::NightSky => "Night Sky",
            Self::Ocean => "Ocean",
        }
    }
}

/// Everything spawned for the current page; despawned on exit.
#[derive(Component)]
pub struct PageScene;

/// Marker on the navigation cards (they survive page changes).
#[derive(Component)]
pub struct NavCard;

pub struct PagesPlugin;

impl Plugin for PagesPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Page>()
            .add_systems(Startup, spawn_nav_cards)
            .add_systems(Update, page_hotkeys)
            .add_systems(OnEnter(Page::Home), home::build)
            .add_systems(OnEnter(Page::Garden), garden::build)
            .add_systems(OnEnter(Page::NightSky), night_sky::build)
            .add_systems(OnEnter(Page::Ocean), ocean::build)
            .add_systems(OnExit(Page::Home), despawn_page_scene)
            .add_systems(OnExit(Page::Garden), despawn_page_scene)
            .add_systems(OnExit(Page::NightSky), despawn_page_scene)
            .add_systems(OnExit(Page::Ocean), despawn_page_scene)
            .add_systems(Update, home::float_hearts.run_if(in_state(Page::Home)));
    }
}

fn spawn_nav_cards(mut commands: Commands, surface: Res<OverlaySurface>) {
    for (i, page) in Page::ALL.into_iter().enumerate() {
        let x = surface.center().x + (i as f32 - 1.5) * layout::NAV_SPACING;
        let position = surface.to_world(Vec2::new(x, layout::NAV_Y));
        commands.spawn((
            NavCard,
            Text2d::new(page.label()),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_translation(position.extend(layout::ELEMENTS_Z)),
            Interactive {
                half_extent: Vec2::new(70.0, 20.0),
                action: ClickAction::Navigate(page),
            },
        ));
    }
}

fn despawn_page_scene(mut commands: Commands, scene: Query<Entity, With<PageScene>>) {
    for entity in &scene {
        commands.entity(entity).despawn();
    }
}

fn page_hotkeys(keys: Res<ButtonInput<KeyCode>>, mut next_page: ResMut<NextState<Page>>) {
    let bindings = [
        (KeyCode::Digit1, Page::Home),
        (KeyCode::Digit2, Page::Garden),
        (KeyCode::Digit3, Page::NightSky),
        (KeyCode::Digit4, Page::Ocean),
    ];
    for (key, page) in bindings {
        if keys.just_pressed(key) {
            next_page.set(page);
        }
    }
}

/// Spawn one interactive emoji element at a surface position. Starts at
/// zero scale and pops in after its stagger delay.
pub(crate) fn spawn_element(
    commands: &mut Commands,
    surface: &OverlaySurface,
    glyph: &str,
    position: Vec2,
    action: ClickAction,
    pop_delay: f32,
) {
    commands.spawn((
        PageScene,
        Text2d::new(glyph),
        TextFont {
            font_size: layout::ELEMENT_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_translation(surface.to_world(position).extend(layout::ELEMENTS_Z))
            .with_scale(Vec3::ZERO),
        Interactive {
            half_extent: Vec2::splat(layout::ELEMENT_FONT_SIZE * 0.5),
            action,
        },
        PopIn::delayed(pop_delay),
    ));
}
