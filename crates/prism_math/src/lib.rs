// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod color;
mod ray;
pub use color::{clamp_color, color_to_rgba, luminance, Color};
pub use ray::Ray;

/// A position in world space.
pub type Point3 = Vec3;

/// A direction or displacement in world space.
pub type Vector3 = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_minus_point_is_vector() {
        let a: Point3 = Vec3::new(4.0, 5.0, 6.0);
        let b: Point3 = Vec3::new(1.0, 2.0, 3.0);
        let v: Vector3 = a - b;
        assert_eq!(v, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(b + v, a);
    }

    #[test]
    fn test_vector_norm_and_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert!((v.normalize().length() - 1.0).abs() < 1e-6);
        assert_eq!(v.dot(Vec3::Z), 4.0);
    }
}
