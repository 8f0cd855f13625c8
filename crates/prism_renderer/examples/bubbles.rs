//! Rings of glass bubbles over a checkered floor.
//!
//! Run with: cargo run --release --example bubbles -- [render-config.json]
//!
//! The optional JSON file overrides any `RenderConfig` field, e.g.
//! `{ "width": 1920, "height": 1080, "max_depth": 8 }`.

use std::env;
use std::fs;

use anyhow::Context;
use prism_renderer::{
    Color, DirectionalLight, LogProgress, Material, PointLight, RenderConfig, Renderer, Scene,
    Sphere, Vec3, Viewport,
};

/// Thickness of a bubble's glass shell.
const SHELL: f32 = 0.02;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read render config {}", path))?;
            serde_json::from_str::<RenderConfig>(&text)
                .with_context(|| format!("Failed to parse render config {}", path))?
        }
        None => RenderConfig::default(),
    };

    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!(
        "Scene built in {:?}: {} objects, {} lights",
        start.elapsed(),
        scene.object_count(),
        scene.light_count()
    );

    let viewport = Viewport::look_at(
        Vec3::new(-45.0, -45.0, 40.0),
        Vec3::new(10.0, 10.0, 15.0),
        Vec3::Z,
        40.0,
        config.width as f32 / config.height as f32,
    );

    let renderer = Renderer::new(&scene, viewport, config)?;
    let image = renderer.render_with_progress(&LogProgress);

    let filename = "bubbles.png";
    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .context("Image buffer does not match its dimensions")?;
    rgba.save(filename)
        .with_context(|| format!("Failed to save {}", filename))?;
    println!("Saved to {}", filename);

    Ok(())
}

fn glass() -> Material {
    Material {
        ambient: Color::ZERO,
        diffuse: Color::new(0.95, 0.95, 1.0),
        specular: Color::ONE,
        shininess: 80.0,
        coef_diffusion: 0.01,
        coef_reflection: 0.05,
        coef_refraction: 0.94,
        in_refractive_index: 1.5,
        out_refractive_index: 1.0,
    }
}

/// A hollow sphere: a glass shell around a sphere of air.
fn add_bubble(scene: &mut Scene, center: Vec3, radius: f32, material: Material) -> anyhow::Result<()> {
    scene.add_object(Box::new(Sphere::try_new(center, radius, material)?));
    scene.add_object(Box::new(Sphere::try_new(center, radius - SHELL, material.inverted())?));
    Ok(())
}

/// Concentric rings of bubbles, rising one level per ring.
///
/// Ring radii go 20, 15, 10, 5 and then continue negative down to -35,
/// which mirrors the rings to the other side of the axis.
fn build_scene() -> anyhow::Result<Scene> {
    let mut scene = Scene::new();

    scene.add_light(Box::new(DirectionalLight::new(Vec3::ONE, Color::ONE)));
    scene.add_light(Box::new(PointLight::new(
        Vec3::new(10.0, 10.0, 10.0),
        Color::new(1.0, 0.0, 1.0),
    )));

    let center = 10.0;
    let mut radius: i32 = 20;
    let mut z = 5.0;

    while radius > -40 {
        let step = (360 / radius.abs()) as usize;
        for angle in (0..360).step_by(step) {
            let a = (angle as f32).to_radians();
            let x = (center + radius as f32 * a.sin()).round();
            let y = (center + radius as f32 * a.cos()).round();
            add_bubble(&mut scene, Vec3::new(x, y, z), 2.0, glass())?;
        }

        radius -= 5;
        if radius == 0 {
            radius = -5;
        }
        z += 4.0;
    }

    Ok(scene)
}
