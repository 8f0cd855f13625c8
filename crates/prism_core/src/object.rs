//! The capability every renderable surface provides.

use prism_math::{Point3, Ray, Vector3};

use crate::Material;

/// Trait for surfaces that can be placed in a scene.
pub trait GraphicalObject: Send + Sync {
    /// Test the half-line `ray.origin + t * ray.direction`, `t >= 0`,
    /// against this surface.
    ///
    /// Returns the nearest intersection point with `t >= 0`, or `None` on a
    /// miss. A ray starting exactly on the surface (`t == 0`) hits.
    fn intersect(&self, ray: &Ray) -> Option<Point3>;

    /// Outward unit normal at a point assumed to lie on the surface.
    fn normal_at(&self, point: Point3) -> Vector3;

    /// Material at a point of the surface.
    fn material_at(&self, point: Point3) -> Material;
}
