//! Surface material record.

use prism_math::Color;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// How a surface scatters light.
///
/// The three colors drive Phong shading. The three coefficients weight the
/// diffuse (local illumination), mirror and transmitted contributions; they
/// are each expected in [0, 1] but are not required to sum to 1.
///
/// `in_refractive_index` is the index of refraction inside the surface and
/// `out_refractive_index` the one on the side the normal points to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Added once per hit, independent of the lights
    pub ambient: Color,
    /// Lambertian color, also tints transmitted light and shadows
    pub diffuse: Color,
    /// Highlight color, also tints mirror reflections
    pub specular: Color,
    /// Phong exponent
    pub shininess: f32,

    pub coef_diffusion: f32,
    pub coef_reflection: f32,
    pub coef_refraction: f32,

    pub in_refractive_index: f32,
    pub out_refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::new(0.05, 0.05, 0.05),
            diffuse: Color::new(0.5, 0.5, 0.5), // Grey default
            specular: Color::ZERO,
            shininess: 1.0,
            coef_diffusion: 1.0,
            coef_reflection: 0.0,
            coef_refraction: 0.0,
            in_refractive_index: 1.0,
            out_refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Same material seen from the other side of the surface.
    ///
    /// Swaps the inner and outer refractive indices, which is what the inner
    /// wall of a hollow object (a bubble) needs.
    pub fn inverted(&self) -> Self {
        Self {
            in_refractive_index: self.out_refractive_index,
            out_refractive_index: self.in_refractive_index,
            ..*self
        }
    }

    /// Whether this material spawns mirror rays.
    pub fn is_reflective(&self) -> bool {
        self.coef_reflection != 0.0
    }

    /// Whether this material spawns transmitted rays.
    pub fn is_refractive(&self) -> bool {
        self.coef_refraction != 0.0
    }

    /// Check that every field is within its documented range.
    pub fn validate(&self) -> SceneResult<()> {
        let colors = [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
        ];
        for (field, color) in colors {
            for value in color.to_array() {
                if !value.is_finite() || value < 0.0 {
                    return Err(SceneError::InvalidMaterial { field, value });
                }
            }
        }

        if !self.shininess.is_finite() || self.shininess < 0.0 {
            return Err(SceneError::InvalidMaterial {
                field: "shininess",
                value: self.shininess,
            });
        }

        let coefficients = [
            ("coef_diffusion", self.coef_diffusion),
            ("coef_reflection", self.coef_reflection),
            ("coef_refraction", self.coef_refraction),
        ];
        for (field, value) in coefficients {
            if !(0.0..=1.0).contains(&value) {
                return Err(SceneError::InvalidMaterial { field, value });
            }
        }

        let indices = [
            ("in_refractive_index", self.in_refractive_index),
            ("out_refractive_index", self.out_refractive_index),
        ];
        for (field, value) in indices {
            if !value.is_finite() || value <= 0.0 {
                return Err(SceneError::InvalidMaterial { field, value });
            }
        }

        Ok(())
    }
}
