//! Simple ray tracer example.
//!
//! Renders the built-in demo scene plus a ring of small glass spheres and
//! saves it in PPM format.

use lumen_renderer::{render, save_image, Light, Material, RenderConfig, Scene, Sphere, Vec3};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene();
    let config = RenderConfig::default().with_resolution(800, 600);

    println!("Rendering {}x{}...", config.width, config.height);
    let start = std::time::Instant::now();
    let image = render(&scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    if let Err(err) = save_image(&image, filename) {
        eprintln!("Failed to save image: {}", err);
        std::process::exit(1);
    }
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::demo();

    for i in 0..8 {
        let angle = i as f32 * std::f32::consts::TAU / 8.0;
        let center = Vec3::new(6.0 * angle.cos(), -4.0, -20.0 + 3.0 * angle.sin());
        scene.add_sphere(Sphere::new(center, 0.75, Material::glass()));
    }
    scene.add_light(Light::new(Vec3::new(0.0, 5.0, 0.0), 0.5));

    println!(
        "Created {} spheres, {} lights",
        scene.sphere_count(),
        scene.light_count()
    );
    scene
}
