//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are traced independently
//! and in parallel using rayon. Each bucket owns its pixel vector while it
//! is being rendered, so workers never share mutable state; the finished
//! buckets are copied into the image at the end.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use prism_math::Color;
use rayon::prelude::*;

use crate::renderer::{ImageBuffer, Renderer};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted in spiral order from center.
///
/// Buckets near the center come first, so a progress display fills the
/// most interesting part of the frame early.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center (spiral order).
///
/// The sort is stable, so equally distant buckets keep row-major order.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f32 + b.width as f32 / 2.0;
        let by = b.y as f32 + b.height as f32 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| {
        distance(a)
            .partial_cmp(&distance(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, renderer: &Renderer<'_>) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(renderer.render_pixel(global_x, global_y));
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the pixels into their place in the full image.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let b = &self.bucket;
        for local_y in 0..b.height {
            for local_x in 0..b.width {
                let color = self.pixels[(local_y * b.width + local_x) as usize];
                image.set(b.x + local_x, b.y + local_y, color);
            }
        }
    }
}

/// Receives progress events while an image renders.
///
/// Called from worker threads, once per finished bucket.
pub trait RenderProgress: Sync {
    fn bucket_finished(&self, done: usize, total: usize);
}

/// Ignores all progress events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl RenderProgress for NoProgress {
    fn bucket_finished(&self, _done: usize, _total: usize) {}
}

/// Reports progress through the `log` facade.
///
/// Every bucket is logged at debug level; each 10% step at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl RenderProgress for LogProgress {
    fn bucket_finished(&self, done: usize, total: usize) {
        log::debug!("Bucket {}/{} done", done, total);

        let percent = done * 100 / total.max(1);
        let previous = done.saturating_sub(1) * 100 / total.max(1);
        if percent / 10 != previous / 10 {
            log::info!("Render {}% complete", percent);
        }
    }
}

/// Render every bucket of the image on the rayon thread pool.
pub fn render_buckets(renderer: &Renderer<'_>, progress: &dyn RenderProgress) -> ImageBuffer {
    let config = renderer.config();
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);
    let total = buckets.len();
    let scene = renderer.scene();

    log::info!(
        "Rendering {}x{} at depth {} ({} buckets, {} objects, {} lights)",
        config.width,
        config.height,
        config.max_depth,
        total,
        scene.object_count(),
        scene.light_count()
    );
    let start = Instant::now();

    let done = AtomicUsize::new(0);
    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, renderer);
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            progress.bucket_finished(finished, total);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderConfig, Viewport};
    use prism_core::{Material, PointLight, Scene, Sphere};
    use prism_math::Vec3;
    use std::sync::Mutex;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 30, 64);
        assert_eq!(buckets.len(), 2);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 30);
        assert!(buckets.iter().all(|b| b.x + b.width <= 100 && b.y + b.height <= 30));
    }

    #[test]
    fn test_spiral_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9); // 3x3 grid

        // First bucket should be the center one
        let first = &buckets[0];
        assert_eq!(first.x, 64);
        assert_eq!(first.y, 64);

        for (i, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.index, i);
        }
    }

    #[test]
    fn test_write_into_places_pixels() {
        let bucket = Bucket::new(1, 1, 2, 1, 0);
        let result = BucketResult::new(bucket, vec![Vec3::X, Vec3::Y]);
        let mut image = ImageBuffer::new(4, 3);
        result.write_into(&mut image);

        assert_eq!(image.get(1, 1), Vec3::X);
        assert_eq!(image.get(2, 1), Vec3::Y);
        assert_eq!(image.get(0, 0), Vec3::ZERO);
    }

    struct Recorder(Mutex<Vec<(usize, usize)>>);

    impl RenderProgress for Recorder {
        fn bucket_finished(&self, done: usize, total: usize) {
            self.0.lock().unwrap().push((done, total));
        }
    }

    #[test]
    fn test_parallel_matches_serial_and_reports_progress() {
        let glass = Material {
            diffuse: Vec3::new(0.9, 0.9, 1.0),
            specular: Vec3::ONE,
            shininess: 40.0,
            coef_diffusion: 0.2,
            coef_reflection: 0.2,
            coef_refraction: 0.8,
            in_refractive_index: 1.5,
            ..Default::default()
        };
        let mut scene = Scene::new();
        scene.add_object(Box::new(Sphere::new(Vec3::ZERO, 1.0, glass)));
        scene.add_object(Box::new(Sphere::new(Vec3::new(1.5, 0.5, -2.0), 1.0, Material::default())));
        scene.add_light(Box::new(PointLight::new(Vec3::new(3.0, 4.0, 10.0), Vec3::ONE)));

        let viewport = Viewport::look_at(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO, Vec3::Y, 40.0, 1.5);
        let config = RenderConfig::default()
            .with_resolution(24, 16)
            .with_max_depth(3)
            .with_bucket_size(5);
        let renderer = Renderer::new(&scene, viewport, config).unwrap();

        let recorder = Recorder(Mutex::new(Vec::new()));
        let parallel = renderer.render_with_progress(&recorder);
        let serial = renderer.render_serial();
        assert_eq!(parallel, serial);

        let mut events = recorder.0.into_inner().unwrap();
        events.sort();
        let total = generate_buckets(24, 16, 5).len();
        assert_eq!(events.len(), total);
        assert_eq!(events.last(), Some(&(total, total)));
    }
}
