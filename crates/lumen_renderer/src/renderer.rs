//! Frame rendering.
//!
//! Casts one primary ray per pixel from a pinhole camera at the origin,
//! assembles the linear framebuffer and tone-maps it for output.
//! Pixels are independent: the parallel and sequential paths produce
//! bit-identical results.

use std::time::Instant;

use lumen_core::Scene;
use lumen_math::PinholeCamera;

use crate::bucket::{generate_buckets, render_buckets, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::framebuffer::Framebuffer;
use crate::tracer::cast_ray;
use crate::Color;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
    /// Worker thread count; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            bucket_size: DEFAULT_BUCKET_SIZE,
            threads: None,
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

    /// Set bucket size.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Render on a dedicated pool with a fixed number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Camera matching this configuration.
    pub fn camera(&self) -> PinholeCamera {
        PinholeCamera::new(self.width, self.height)
    }
}

/// Render a single pixel (column x, row y).
pub fn render_pixel(camera: &PinholeCamera, scene: &Scene, x: u32, y: u32) -> Color {
    cast_ray(&camera.primary_ray(x, y), scene, 0)
}

/// Render the scene into a linear (not tone-mapped) framebuffer.
///
/// Buckets are rendered in parallel on rayon; with `config.threads` set a
/// dedicated pool of that size is used.
pub fn render_linear(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let camera = config.camera();
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);
    log::debug!(
        "Rendering {}x{} in {} buckets of {}px",
        config.width,
        config.height,
        buckets.len(),
        config.bucket_size
    );

    let results: Vec<BucketResult> = match config.threads {
        Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(|| render_buckets(&buckets, &camera, scene)),
            Err(err) => {
                log::warn!("Could not build a {}-thread pool ({}), using the global pool", threads, err);
                render_buckets(&buckets, &camera, scene)
            }
        },
        None => render_buckets(&buckets, &camera, scene),
    };

    let mut framebuffer = Framebuffer::new(config.width, config.height);
    for result in &results {
        result.write_into(&mut framebuffer);
    }
    framebuffer
}

/// Render the scene on the calling thread, pixel by pixel.
///
/// Produces a linear framebuffer identical to [`render_linear`].
pub fn render_sequential(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let camera = config.camera();
    let mut framebuffer = Framebuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            framebuffer.set(x, y, render_pixel(&camera, scene, x, y));
        }
    }

    framebuffer
}

/// Render the scene and tone-map the result.
///
/// Every pixel of the returned framebuffer lies in [0, 1] and is ready to
/// be quantized and written out.
pub fn render(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let start = Instant::now();
    log::info!(
        "Rendering {}x{}: {} spheres, {} lights",
        config.width,
        config.height,
        scene.sphere_count(),
        scene.light_count()
    );

    let mut framebuffer = render_linear(scene, config);
    framebuffer.tone_map();

    log::info!("Rendered in {:.2?}", start.elapsed());
    framebuffer
}
