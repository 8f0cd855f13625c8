//! Light sources.

use prism_math::{Color, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Trait for anything that lights the scene.
pub trait Light: Send + Sync {
    /// Unit vector pointing from `point` toward the light.
    fn direction_from(&self, point: Point3) -> Vector3;

    /// Color of the light arriving at `point`, before any occlusion.
    fn color_at(&self, point: Point3) -> Color;
}

/// A light emitting from a single position in space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Point3,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Point3, color: Color) -> Self {
        Self { position, color }
    }
}

impl Light for PointLight {
    fn direction_from(&self, point: Point3) -> Vector3 {
        (self.position - point).normalize_or_zero()
    }

    fn color_at(&self, _point: Point3) -> Color {
        self.color
    }
}

/// A light placed at infinity: every point sees it in the same direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Unit vector pointing toward the light
    pub direction: Vector3,
    pub color: Color,
}

impl DirectionalLight {
    /// Create a directional light; `direction` points toward the light and
    /// is normalized here.
    pub fn new(direction: Vector3, color: Color) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            color,
        }
    }
}

impl Light for DirectionalLight {
    fn direction_from(&self, _point: Point3) -> Vector3 {
        self.direction
    }

    fn color_at(&self, _point: Point3) -> Color {
        self.color
    }
}
