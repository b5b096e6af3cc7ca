//! The overlay surface: effect simulation happens in window space.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Logical size of the primary window, tracked once per frame.
///
/// Effects simulate in *surface coordinates* — origin at the top-left,
/// y growing downward, the same space `Window::cursor_position` reports —
/// and convert to world coordinates only when writing transforms. The
/// conversion assumes the default 2D camera at the origin.
#[derive(Resource)]
pub struct OverlaySurface {
    pub size: Vec2,
}

impl Default for OverlaySurface {
    fn default() -> Self {
        Self {
            size: Vec2::new(1280.0, 720.0),
        }
    }
}

impl OverlaySurface {
    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Surface point → world point (camera at the origin, y up).
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.size.x * 0.5, self.size.y * 0.5 - point.y)
    }

    /// World point → surface point. Inverse of [`Self::to_world`].
    pub fn from_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x + self.size.x * 0.5, self.size.y * 0.5 - point.y)
    }

    /// Random point within the surface bounds.
    pub fn random_point(&self) -> Vec2 {
        Vec2::new(
            fastrand::f32() * self.size.x,
            fastrand::f32() * self.size.y,
        )
    }

    /// Random horizontal position within the surface bounds.
    pub fn random_x(&self) -> f32 {
        fastrand::f32() * self.size.x
    }
}

pub(crate) fn sync_surface(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut surface: ResMut<OverlaySurface>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if size.x > 0.0 && size.y > 0.0 && size != surface.size {
        surface.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_conversion_round_trips() {
        let surface = OverlaySurface {
            size: Vec2::new(800.0, 600.0),
        };
        let p = Vec2::new(120.0, 450.0);
        assert_eq!(surface.from_world(surface.to_world(p)), p);
    }

    #[test]
    fn surface_center_maps_to_world_origin() {
        let surface = OverlaySurface {
            size: Vec2::new(800.0, 600.0),
        };
        assert_eq!(surface.to_world(surface.center()), Vec2::ZERO);
        // Top-left corner is up and to the left in world space.
        let corner = surface.to_world(Vec2::ZERO);
        assert_eq!(corner, Vec2::new(-400.0, 300.0));
    }

    #[test]
    fn random_point_stays_in_bounds() {
        let surface = OverlaySurface {
            size: Vec2::new(320.0, 200.0),
        };
        for _ in 0..200 {
            let p = surface.random_point();
            assert!(p.x >= 0.0 && p.x < 320.0);
            assert!(p.y >= 0.0 && p.y < 200.0);
        }
    }
}
