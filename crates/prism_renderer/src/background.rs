//! Background strategies, used for rays that escape the scene.

use prism_math::{Color, Ray};

/// Color seen along a ray that hits nothing.
pub trait Background: Send + Sync {
    fn background_color(&self, ray: &Ray) -> Color;
}

/// A single flat color in every direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidBackground(pub Color);

impl Background for SolidBackground {
    fn background_color(&self, _ray: &Ray) -> Color {
        self.0
    }
}

/// Sky gradient above the horizon, checkered ground plane below it.
///
/// +Z is up. Rays with a non-negative Z component see the sky, blended
/// from `horizon` to `zenith` by their elevation. Other rays are projected
/// onto a ground plane `ground_depth` below the eye, and the projected
/// coordinates are tiled into unit squares alternating `dark` and `light`.
/// Tiles fade to `far` as the projected distance approaches `fade_distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerboardBackground {
    pub horizon: Color,
    pub zenith: Color,
    pub dark: Color,
    pub light: Color,
    pub far: Color,
    pub ground_depth: f32,
    pub fade_distance: f32,
}

impl Default for CheckerboardBackground {
    fn default() -> Self {
        Self {
            horizon: Color::ONE,
            zenith: Color::new(0.0, 0.0, 1.0),
            dark: Color::splat(0.2),
            light: Color::splat(0.4),
            far: Color::ONE,
            ground_depth: 0.5,
            fade_distance: 30.0,
        }
    }
}

impl Background for CheckerboardBackground {
    fn background_color(&self, ray: &Ray) -> Color {
        let d = ray.direction().normalize_or_zero();

        if d.z >= 0.0 {
            return self.horizon + d.z * (self.zenith - self.horizon);
        }

        let x = -self.ground_depth * d.x / d.z;
        let y = -self.ground_depth * d.y / d.z;
        let t = x.hypot(y).min(self.fade_distance) / self.fade_distance;

        let fx = x - x.floor();
        let fy = y - y.floor();
        let tile = if (fx >= 0.5) == (fy >= 0.5) {
            self.dark
        } else {
            self.light
        };

        (1.0 - t) * tile + t * self.far
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_math::Vec3;

    fn ray(direction: Vec3) -> Ray {
        Ray::new(Vec3::ZERO, direction)
    }

    #[test]
    fn test_sky_gradient() {
        let bg = CheckerboardBackground::default();

        assert_eq!(bg.background_color(&ray(Vec3::Z)), Color::new(0.0, 0.0, 1.0));
        assert_eq!(bg.background_color(&ray(Vec3::X)), Color::ONE);

        // Only the direction matters, not its length
        let a = bg.background_color(&ray(Vec3::new(1.0, 0.0, 1.0)));
        let b = bg.background_color(&ray(Vec3::new(3.0, 0.0, 3.0)));
        assert!((a - b).length() < 1e-6);
        assert!(a.z > a.x);
    }

    #[test]
    fn test_ground_straight_down_is_dark_tile() {
        let bg = CheckerboardBackground::default();
        // Projects to (0, 0): both fractions below 0.5, no fade
        let c = bg.background_color(&ray(Vec3::NEG_Z));
        assert_eq!(c, Color::splat(0.2));
    }

    #[test]
    fn test_ground_alternates_tiles() {
        let bg = CheckerboardBackground::default();
        // Projects to (0.75, 0.25): mixed parity, light tile
        let c = bg.background_color(&ray(Vec3::new(1.5, 0.5, -1.0)));
        assert!(c.x > 0.4 && c.x < 0.45, "got {c}");

        // Projects to (0.75, 0.75): dark tile
        let c = bg.background_color(&ray(Vec3::new(1.5, 1.5, -1.0)));
        assert!(c.x > 0.2 && c.x < 0.25, "got {c}");
    }

    #[test]
    fn test_ground_fades_to_white_far_away() {
        let bg = CheckerboardBackground::default();
        let c = bg.background_color(&ray(Vec3::new(1.0, 0.0, -0.001)));
        assert_eq!(c, Color::ONE);
    }

    #[test]
    fn test_solid_background() {
        let bg = SolidBackground(Color::new(0.1, 0.2, 0.3));
        assert_eq!(bg.background_color(&ray(Vec3::NEG_Z)), Color::new(0.1, 0.2, 0.3));
        assert_eq!(bg.background_color(&ray(Vec3::Z)), Color::new(0.1, 0.2, 0.3));
    }
}
