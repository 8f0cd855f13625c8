//! Sphere primitive.

use prism_math::{Point3, Ray, Vec3, Vector3};

use crate::{
    error::{SceneError, SceneResult},
    GraphicalObject, Material,
};

/// A sphere with a single material over its whole surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A negative radius is clamped to zero.
    pub fn new(center: Point3, radius: f32, material: Material) -> Self {
        if radius < 0.0 {
            log::warn!("Sphere at {center} has negative radius {radius}, clamping to 0");
        }

        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Create a new sphere, rejecting degenerate input instead of fixing it.
    pub fn try_new(center: Point3, radius: f32, material: Material) -> SceneResult<Self> {
        if !center.is_finite() {
            return Err(SceneError::NonFinite("sphere center"));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        material.validate()?;

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl GraphicalObject for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Point3> {
        let l = self.center - ray.origin();
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * ray.direction().dot(l);
        let c = l.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Roots of a*t^2 - b*t + c = 0. Picking the sign of q from b avoids
        // subtracting two nearly equal numbers.
        let sign = if b >= 0.0 { 1.0 } else { -1.0 };
        let q = 0.5 * (b + sign * discriminant.sqrt());
        let (t0, t1) = if q == 0.0 {
            // b == 0 and discriminant == 0: tangent at the origin
            (0.0, 0.0)
        } else {
            let r0 = q / a;
            let r1 = c / q;
            (r0.min(r1), r0.max(r1))
        };

        if t1 < 0.0 {
            // Sphere is entirely behind the ray
            return None;
        }

        // Origin inside the sphere when t0 < 0 <= t1
        let t = if t0 >= 0.0 { t0 } else { t1 };
        Some(ray.at(t))
    }

    fn normal_at(&self, point: Point3) -> Vector3 {
        let u = point - self.center;
        let l2 = u.length_squared();
        if l2 > 0.0 {
            u / l2.sqrt()
        } else {
            // Center has no defined normal, any unit vector will do
            Vec3::Z
        }
    }

    fn material_at(&self, _point: Point3) -> Material {
        self.material
    }
}
