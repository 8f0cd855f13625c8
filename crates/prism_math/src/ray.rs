use crate::{Point3, Vector3};

/// A ray in 3D space with an origin and a direction.
///
/// Rays are half-lines: only points with a non-negative parameter `t` are
/// considered by intersection tests. The direction is not normalized here;
/// keeping it meaningful (usually unit length) is the caller's job.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }

    /// Same direction, origin moved forward by `distance` along it.
    ///
    /// Used to lift secondary rays off the surface they were spawned from.
    pub fn nudged(&self, distance: f32) -> Self {
        Self::new(self.at(distance), self.direction)
    }
}
