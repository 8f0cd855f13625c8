//! Viewport geometry and primary ray generation.

use prism_math::{Point3, Ray, Vec3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Eye point plus the four rays through the corners of the image.
///
/// `(eye, eye + dir_ul)` goes through the upper-left pixel (0, 0),
/// `dir_ur` through (width - 1, 0), `dir_ll` through (0, height - 1) and
/// `dir_lr` through (width - 1, height - 1). Every other pixel direction is
/// interpolated between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub eye: Point3,
    pub dir_ul: Vector3,
    pub dir_ur: Vector3,
    pub dir_ll: Vector3,
    pub dir_lr: Vector3,
}

impl Viewport {
    pub fn new(
        eye: Point3,
        dir_ul: Vector3,
        dir_ur: Vector3,
        dir_ll: Vector3,
        dir_lr: Vector3,
    ) -> Self {
        Self {
            eye,
            dir_ul,
            dir_ur,
            dir_ll,
            dir_lr,
        }
    }

    /// Build the corner rays of a pinhole camera.
    ///
    /// `vfov` is the vertical field of view in degrees and `aspect` the
    /// image width divided by its height.
    pub fn look_at(eye: Point3, target: Point3, up: Vector3, vfov: f32, aspect: f32) -> Self {
        let half_height = (vfov.to_radians() / 2.0).tan();
        let half_width = half_height * aspect;

        // Camera basis: w points backwards, u right, v up
        let w = (eye - target).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);

        let forward = -w;
        let right = u * half_width;
        let upward = v * half_height;

        Self {
            eye,
            dir_ul: forward - right + upward,
            dir_ur: forward + right + upward,
            dir_ll: forward - right - upward,
            dir_lr: forward + right - upward,
        }
    }

    /// Reject viewports that cannot produce meaningful rays.
    pub fn validate(&self) -> RenderResult<()> {
        if !self.eye.is_finite() {
            return Err(RenderError::DegenerateViewport("eye is not finite"));
        }

        let corners = [self.dir_ul, self.dir_ur, self.dir_ll, self.dir_lr];
        if corners.iter().any(|d| !d.is_finite()) {
            return Err(RenderError::DegenerateViewport("corner direction is not finite"));
        }
        if corners.iter().any(|d| d.length_squared() == 0.0) {
            return Err(RenderError::DegenerateViewport("corner direction has zero length"));
        }

        Ok(())
    }

    /// Ray from the eye through pixel (x, y) of a `width` x `height` image.
    ///
    /// The left and right edge directions are interpolated by row and
    /// normalized, then interpolated by column. The result is normalized.
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let ty = fraction(y, height);
        let dir_l = self.dir_ul.lerp(self.dir_ll, ty).normalize_or_zero();
        let dir_r = self.dir_ur.lerp(self.dir_lr, ty).normalize_or_zero();

        let tx = fraction(x, width);
        let direction = dir_l.lerp(dir_r, tx).normalize_or_zero();

        Ray::new(self.eye, direction)
    }
}

impl Default for Viewport {
    /// 90 degree square view from the origin down the -Z axis.
    fn default() -> Self {
        Self::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, 1.0)
    }
}

/// Position of pixel `i` among `n`, from 0.0 (first) to 1.0 (last).
#[inline]
fn fraction(i: u32, n: u32) -> f32 {
    if n > 1 {
        i as f32 / (n - 1) as f32
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_viewport() -> Viewport {
        Viewport::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
        )
    }

    #[test]
    fn test_corner_rays_follow_corner_directions() {
        let vp = square_viewport();
        let corners = [
            (0, 0, vp.dir_ul),
            (9, 0, vp.dir_ur),
            (0, 9, vp.dir_ll),
            (9, 9, vp.dir_lr),
        ];

        for (x, y, dir) in corners {
            let ray = vp.primary_ray(x, y, 10, 10);
            assert_eq!(ray.origin, vp.eye);
            assert!((ray.direction - dir.normalize()).length() < 1e-6);
        }
    }

    #[test]
    fn test_center_ray_looks_straight_ahead() {
        let vp = square_viewport();
        let ray = vp.primary_ray(2, 2, 5, 5);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-6);
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rows_go_top_to_bottom() {
        let vp = square_viewport();
        let top = vp.primary_ray(3, 0, 7, 7);
        let bottom = vp.primary_ray(3, 6, 7, 7);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);

        let left = vp.primary_ray(0, 3, 7, 7);
        let right = vp.primary_ray(6, 3, 7, 7);
        assert!(left.direction.x < right.direction.x);
    }

    #[test]
    fn test_single_pixel_image() {
        let vp = square_viewport();
        let ray = vp.primary_ray(0, 0, 1, 1);
        assert!((ray.direction - vp.dir_ul.normalize()).length() < 1e-6);
    }

    #[test]
    fn test_look_at_is_symmetric() {
        let vp = Viewport::look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            90.0,
            2.0,
        );

        assert!((vp.dir_ul - Vec3::new(-2.0, 1.0, -1.0)).length() < 1e-5);
        assert!((vp.dir_lr - Vec3::new(2.0, -1.0, -1.0)).length() < 1e-5);
        assert!(vp.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_corners() {
        let mut vp = square_viewport();
        vp.dir_ll = Vec3::ZERO;
        assert_eq!(
            vp.validate(),
            Err(RenderError::DegenerateViewport("corner direction has zero length"))
        );

        let mut vp = square_viewport();
        vp.eye = Vec3::splat(f32::NAN);
        assert!(vp.validate().is_err());
    }
}
