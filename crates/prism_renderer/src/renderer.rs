//! Core recursive ray tracer.
//!
//! Implements Whitted-style ray tracing with:
//! - Mirror reflection and dielectric refraction, bounded by a depth budget
//! - Phong local illumination with colored shadows from transparent occluders
//! - A pluggable procedural background plus a glow around visible lights

use std::f32::consts::PI;

use prism_core::{Hit, Material, Scene};
use prism_math::{clamp_color, Color, Point3, Ray, Vector3};
use serde::{Deserialize, Serialize};

use crate::background::{Background, CheckerboardBackground};
use crate::bucket::{self, NoProgress, RenderProgress, DEFAULT_BUCKET_SIZE};
use crate::camera::Viewport;
use crate::error::{RenderError, RenderResult};

/// Distance secondary rays are pushed off the surface that spawned them.
pub const SURFACE_EPSILON: f32 = 0.01;

/// Light whose strongest channel falls to this level is considered blocked.
pub const SHADOW_THRESHOLD: f32 = 0.003;

/// Upper bound on occluders crossed by one shadow ray.
pub const MAX_SHADOW_STEPS: usize = 64;

/// Cosine of the widest angle between a ray and a light that still glows.
pub const GLOW_COS_THRESHOLD: f32 = 0.99;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Depth budget of primary rays
    pub max_depth: u32,
    /// Side of the square tiles rendered in parallel
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: 5,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the depth budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the bucket size.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    pub fn validate(&self) -> RenderResult<()> {
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels == 0 || pixels > u64::from(u32::MAX) {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.bucket_size == 0 {
            return Err(RenderError::InvalidBucketSize);
        }
        Ok(())
    }
}

/// Finished image: clamped colors, row-major, (0, 0) is the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&prism_math::color_to_rgba(*color));
        }
        bytes
    }
}

/// Renders one scene through one viewport.
///
/// The renderer borrows the scene; it never owns or modifies it.
pub struct Renderer<'a> {
    scene: &'a Scene,
    viewport: Viewport,
    config: RenderConfig,
    background: Box<dyn Background>,
}

impl<'a> Renderer<'a> {
    /// Create a renderer with the default checkerboard background.
    ///
    /// The viewport and configuration are validated here so that tracing
    /// itself can never fail.
    pub fn new(scene: &'a Scene, viewport: Viewport, config: RenderConfig) -> RenderResult<Self> {
        viewport.validate()?;
        config.validate()?;

        Ok(Self {
            scene,
            viewport,
            config,
            background: Box::new(CheckerboardBackground::default()),
        })
    }

    /// Replace the background strategy.
    pub fn with_background(mut self, background: Box<dyn Background>) -> Self {
        self.background = background;
        self
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Primary ray through pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        self.viewport
            .primary_ray(x, y, self.config.width, self.config.height)
    }

    /// Trace the primary ray of pixel (x, y) and clamp the result.
    pub fn render_pixel(&self, x: u32, y: u32) -> Color {
        let ray = self.primary_ray(x, y);
        clamp_color(self.trace(&ray, self.config.max_depth))
    }

    /// Render the whole image in parallel, bucket by bucket.
    pub fn render(&self) -> ImageBuffer {
        self.render_with_progress(&NoProgress)
    }

    /// Render in parallel, reporting each finished bucket to `progress`.
    pub fn render_with_progress(&self, progress: &dyn RenderProgress) -> ImageBuffer {
        bucket::render_buckets(self, progress)
    }

    /// Render the whole image on the calling thread.
    pub fn render_serial(&self) -> ImageBuffer {
        let mut image = ImageBuffer::new(self.config.width, self.config.height);

        for y in 0..self.config.height {
            for x in 0..self.config.width {
                image.set(x, y, self.render_pixel(x, y));
            }
        }

        image
    }

    /// Color seen along `ray` with `depth` bounces left.
    ///
    /// Reflected and refracted rays are traced with `depth - 1`; at depth 0
    /// only local illumination is computed.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let Some(hit) = self.scene.closest_hit(ray) else {
            return self.background(ray);
        };

        let material = hit.material();
        let normal = hit.normal();
        let mut result = Color::ZERO;

        if depth > 0 && material.is_reflective() {
            let reflected = Ray::new(hit.point, reflect(ray.direction(), normal))
                .nudged(SURFACE_EPSILON);
            let color = self.trace(&reflected, depth - 1);
            result += color * material.specular * material.coef_reflection;
        }

        if depth > 0 && material.is_refractive() {
            let refracted = refraction_ray(ray, hit.point, normal, &material);
            let color = self.trace(&refracted, depth - 1);
            result += color * material.diffuse * material.coef_refraction;
        }

        let local = self.illumination(ray, &hit);
        if depth > 0 {
            result += local * material.coef_diffusion;
        } else {
            result += local;
        }

        result
    }

    /// Background for an escaping ray, plus a glow around lights it points at.
    pub fn background(&self, ray: &Ray) -> Color {
        let direction = ray.direction().normalize_or_zero();
        let mut result = Color::ZERO;

        for light in self.scene.lights() {
            let cos_a = light.direction_from(ray.origin()).dot(direction);
            if cos_a > GLOW_COS_THRESHOLD {
                // a reaches 1, and the glow vanishes, 4 degrees off the light
                let a = cos_a.min(1.0).acos() * 360.0 / PI / 8.0;
                let a = (1.0 - a).max(0.0);
                result += light.color_at(ray.origin()) * a * a;
            }
        }

        result + self.background.background_color(ray)
    }

    /// Phong illumination at a hit point seen along `ray`.
    ///
    /// Each light contributes a diffuse and a specular term, both tinted by
    /// what is left of its color after the shadow test. Ambient is added once.
    pub fn illumination(&self, ray: &Ray, hit: &Hit<'_>) -> Color {
        let point = hit.point;
        let normal = hit.normal();
        let material = hit.material();
        let mirror = reflect(ray.direction(), normal);
        let mut result = Color::ZERO;

        for light in self.scene.lights() {
            let light_dir = light.direction_from(point);
            let light_color = self.shadow(point, light_dir, light.color_at(point));

            let diffusion = light_dir.dot(normal).max(0.0);
            result += diffusion * material.diffuse * light_color;

            let highlight = light_dir.dot(mirror);
            if highlight >= 0.0 {
                result += highlight.powf(material.shininess) * material.specular * light_color;
            }
        }

        result + material.ambient
    }

    /// Light color left after walking from `point` toward the light.
    ///
    /// Every occluder crossed multiplies the color by its
    /// `coef_refraction * diffuse`, so opaque objects block the light and
    /// transparent ones tint it. The walk stops when nothing is left in the
    /// way, when the color has faded below `SHADOW_THRESHOLD`, or after
    /// `MAX_SHADOW_STEPS` occluders.
    pub fn shadow(&self, point: Point3, light_dir: Vector3, light_color: Color) -> Color {
        let mut color = light_color;
        let mut origin = point;

        for _ in 0..MAX_SHADOW_STEPS {
            if color.max_element() <= SHADOW_THRESHOLD {
                break;
            }

            origin += light_dir;
            let Some(hit) = self.scene.closest_hit(&Ray::new(origin, light_dir)) else {
                break;
            };

            let material = hit.material();
            color *= material.coef_refraction * material.diffuse;
            origin = hit.point;
        }

        color
    }
}

/// Mirror `w` about the unit normal `n`.
#[inline]
pub fn reflect(w: Vector3, n: Vector3) -> Vector3 {
    w - 2.0 * w.dot(n) * n
}

/// Ray transmitted through the surface at `point` (Snell's law).
///
/// A ray travelling against the outward normal enters the material, so the
/// index ratio is `out / in`; a ray leaving it uses `in / out`. When no
/// transmitted direction exists (total internal reflection) the mirror
/// direction is used instead. The returned ray starts `SURFACE_EPSILON`
/// past `point`.
pub fn refraction_ray(ray: &Ray, point: Point3, normal: Vector3, material: &Material) -> Ray {
    let d = ray.direction();
    let r = if d.dot(normal) <= 0.0 {
        material.out_refractive_index / material.in_refractive_index
    } else {
        material.in_refractive_index / material.out_refractive_index
    };

    let c = -normal.dot(d);
    let alpha = 1.0 - r * r * (1.0 - c * c);

    let direction = if alpha < 0.0 {
        reflect(d, normal)
    } else {
        let t = if c > 0.0 {
            r * c - alpha.sqrt()
        } else {
            r * c + alpha.sqrt()
        };
        r * d + t * normal
    };

    Ray::new(point, direction).nudged(SURFACE_EPSILON)
}
