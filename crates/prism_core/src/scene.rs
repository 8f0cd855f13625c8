//! Scene container and closest-hit query.
//!
//! The scene owns every object and light. Renderers only borrow it, and
//! nothing in it changes once rendering starts, so it can be shared across
//! worker threads as a plain `&Scene`.

use prism_math::{Point3, Ray, Vector3};

use crate::{GraphicalObject, Light, Material};

/// The closest surface met by a ray.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Object that was hit
    pub object: &'a dyn GraphicalObject,
    /// Point of intersection
    pub point: Point3,
    /// Euclidean distance from the ray origin to `point`
    pub distance: f32,
}

impl<'a> Hit<'a> {
    /// Outward normal of the hit object at the hit point.
    pub fn normal(&self) -> Vector3 {
        self.object.normal_at(self.point)
    }

    /// Material of the hit object at the hit point.
    pub fn material(&self) -> Material {
        self.object.material_at(self.point)
    }
}

impl std::fmt::Debug for Hit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hit")
            .field("point", &self.point)
            .field("distance", &self.distance)
            .finish_non_exhaustive()
    }
}

/// A collection of objects and lights.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn GraphicalObject>>,
    lights: Vec<Box<dyn Light>>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object; the scene takes ownership.
    pub fn add_object(&mut self, object: Box<dyn GraphicalObject>) {
        self.objects.push(object);
    }

    /// Add a light; the scene takes ownership.
    pub fn add_light(&mut self, light: Box<dyn Light>) {
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[Box<dyn GraphicalObject>] {
        &self.objects
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// True when the scene has no objects (lights alone are not visible).
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the object whose intersection point is closest to `ray.origin`.
    ///
    /// Every object is tested. When two hits are equally close the object
    /// added first wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;

        for object in &self.objects {
            let Some(point) = object.intersect(ray) else {
                continue;
            };
            let distance = ray.origin().distance(point);

            if closest.map_or(true, |hit| distance < hit.distance) {
                closest = Some(Hit {
                    object: object.as_ref(),
                    point,
                    distance,
                });
            }
        }

        closest
    }
}
