//! Prism Core - scene description for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Materials**: `Material`, the Phong + reflection/refraction record
//! - **Objects**: the `GraphicalObject` capability and its `Sphere` variant
//! - **Lights**: the `Light` capability, `PointLight` and `DirectionalLight`
//! - **Scene**: owner of all objects and lights, answers closest-hit queries
//!
//! # Example
//!
//! ```
//! use prism_core::{Material, PointLight, Scene, Sphere};
//! use prism_math::{Color, Ray, Vec3};
//!
//! let mut scene = Scene::new();
//! scene.add_object(Box::new(Sphere::new(Vec3::ZERO, 1.0, Material::default())));
//! scene.add_light(Box::new(PointLight::new(Vec3::new(0.0, 0.0, 10.0), Color::ONE)));
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
//! let hit = scene.closest_hit(&ray).expect("ray aims at the sphere");
//! assert_eq!(hit.point, Vec3::new(0.0, 0.0, 1.0));
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod object;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use light::{DirectionalLight, Light, PointLight};
pub use material::Material;
pub use object::GraphicalObject;
pub use scene::{Hit, Scene};
pub use sphere::Sphere;
