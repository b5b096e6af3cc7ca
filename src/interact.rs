//! Pointer interaction: click routing, hit-testing, and the transient
//! scale/spin flourish on clicked elements.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use keepsake_vfx::{BurstEvent, ConfettiEvent, FireworkEvent, MagicEvent, OverlaySurface};

use crate::constants::{clicks, timing};
use crate::pages::Page;

pub struct InteractPlugin;

impl Plugin for InteractPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                route_clicks,
                pop_in_elements,
                advance_flourishes,
                magic_hotkey,
            ),
        );
    }
}

/// A clickable scene element with an axis-aligned hit box centered on
/// its transform.
#[derive(Component)]
pub struct Interactive {
    pub half_extent: Vec2,
    pub action: ClickAction,
}

/// What clicking an element does.
#[derive(Clone, Copy, Debug)]
pub enum ClickAction {
    Flower,
    Star,
    Bottle,
    Magic,
    Navigate(Page),
}

/// Transient scale-and-spin on a clicked element; the transform reverts
/// to rest when the flourish ends.
#[derive(Component, Default)]
pub struct Flourish {
    pub elapsed: f32,
}

/// Staggered pop-in for freshly built page elements. The element spawns
/// at zero scale and grows in after its delay.
#[derive(Component)]
pub struct PopIn {
    pub delay: f32,
    pub elapsed: f32,
}

impl PopIn {
    pub fn delayed(delay: f32) -> Self {
        Self {
            delay,
            elapsed: 0.0,
        }
    }
}

/// Scale factor and spin angle at normalized flourish progress `t`.
pub fn flourish_pose(t: f32) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    (1.0 + t, std::f32::consts::TAU * t)
}

fn route_clicks(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    surface: Res<OverlaySurface>,
    elements: Query<(Entity, &GlobalTransform, &Interactive)>,
    mut next_page: ResMut<NextState<Page>>,
    mut bursts: MessageWriter<BurstEvent>,
    mut confetti: MessageWriter<ConfettiEvent>,
    mut fireworks: MessageWriter<FireworkEvent>,
    mut magic: MessageWriter<MagicEvent>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(point) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    for (entity, transform, interactive) in &elements {
        let delta = (point - transform.translation().truncate()).abs();
        if delta.x > interactive.half_extent.x || delta.y > interactive.half_extent.y {
            continue;
        }

        let center = surface.from_world(transform.translation().truncate());
        match interactive.action {
            ClickAction::Flower => {
                bursts.write(BurstEvent::new(center, clicks::FLOWER_BURST));
                confetti.write(ConfettiEvent {
                    count: clicks::FLOWER_CONFETTI,
                });
            }
            ClickAction::Star => {
                bursts.write(BurstEvent::new(center, clicks::STAR_BURST));
                fireworks.write(FireworkEvent { origin: center });
            }
            ClickAction::Bottle => {
                bursts.write(BurstEvent::new(center, clicks::BOTTLE_BURST));
                confetti.write(ConfettiEvent {
                    count: clicks::BOTTLE_CONFETTI,
                });
            }
            ClickAction::Magic => {
                magic.write(MagicEvent);
            }
            ClickAction::Navigate(page) => {
                // Anywhere on the card counts; the effects land at the
                // click point, not the card center.
                confetti.write(ConfettiEvent {
                    count: clicks::NAV_CONFETTI,
                });
                bursts.write(BurstEvent::new(cursor, clicks::NAV_BURST));
                next_page.set(page);
            }
        }
        commands.entity(entity).insert(Flourish::default());
        return;
    }
}

fn advance_flourishes(
    mut commands: Commands,
    time: Res<Time>,
    mut flourishes: Query<(Entity, &mut Flourish, &mut Transform)>,
) {
    for (entity, mut flourish, mut transform) in &mut flourishes {
        flourish.elapsed += time.delta_secs();
        let t = flourish.elapsed / timing::FLOURISH_SECS;
        if t >= 1.0 {
            transform.scale = Vec3::ONE;
            transform.rotation = Quat::IDENTITY;
            commands.entity(entity).remove::<Flourish>();
            continue;
        }
        let (scale, angle) = flourish_pose(t);
        transform.scale = Vec3::splat(scale);
        transform.rotation = Quat::from_rotation_z(angle);
    }
}

fn pop_in_elements(
    mut commands: Commands,
    time: Res<Time>,
    mut elements: Query<(Entity, &mut PopIn, &mut Transform), Without<Flourish>>,
) {
    for (entity, mut pop, mut transform) in &mut elements {
        pop.elapsed += time.delta_secs();
        let t = ((pop.elapsed - pop.delay) / timing::POP_IN_SECS).clamp(0.0, 1.0);
        transform.scale = Vec3::splat(t);
        if t >= 1.0 {
            commands.entity(entity).remove::<PopIn>();
        }
    }
}

fn magic_hotkey(keys: Res<ButtonInput<KeyCode>>, mut magic: MessageWriter<MagicEvent>) {
    if keys.just_pressed(KeyCode::Space) {
        magic.write(MagicEvent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flourish_peaks_at_double_scale_and_a_full_turn() {
        let (scale, angle) = flourish_pose(1.0);
        assert_eq!(scale, 2.0);
        assert!((angle - std::f32::consts::TAU).abs() < 1e-6);

        let (scale, angle) = flourish_pose(0.0);
        assert_eq!(scale, 1.0);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn flourish_pose_clamps_past_the_end() {
        assert_eq!(flourish_pose(3.0), flourish_pose(1.0));
        assert_eq!(flourish_pose(-1.0), flourish_pose(0.0));
    }
}
