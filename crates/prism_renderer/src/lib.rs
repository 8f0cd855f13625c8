//! Prism Renderer - recursive CPU ray tracing.
//!
//! Traces one ray per pixel through a [`prism_core::Scene`], following
//! mirror reflections and refractions until the depth budget runs out, and
//! shades every hit with Phong illumination and transparent shadows.
//! Buckets of pixels are rendered in parallel with rayon.

mod background;
mod bucket;
mod camera;
mod error;
mod renderer;

pub use background::{Background, CheckerboardBackground, SolidBackground};
pub use bucket::{
    generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, LogProgress,
    NoProgress, RenderProgress, DEFAULT_BUCKET_SIZE,
};
pub use camera::Viewport;
pub use error::{RenderError, RenderResult};
pub use renderer::{
    reflect, refraction_ray, ImageBuffer, RenderConfig, Renderer, GLOW_COS_THRESHOLD,
    MAX_SHADOW_STEPS, SHADOW_THRESHOLD, SURFACE_EPSILON,
};

/// Re-export the math and scene types renderers are driven with
pub use prism_core::{
    DirectionalLight, GraphicalObject, Hit, Light, Material, PointLight, Scene, SceneError,
    Sphere,
};
pub use prism_math::{Color, Point3, Ray, Vec3, Vector3};
