//! Lumen Renderer - recursive ray tracing of spheres and point lights.
//!
//! One primary ray per pixel, nearest-sphere intersection, Phong shading
//! with hard shadows, and recursive reflection and refraction up to a
//! fixed depth.

mod bucket;
mod framebuffer;
mod intersect;
mod optics;
mod output;
mod renderer;
mod shading;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use framebuffer::{quantize, tone_map_color, Framebuffer};
pub use intersect::{intersect, sphere_hit, SurfaceHit, HORIZON};
pub use optics::{reflect, refract, refract_from_air, DEGENERATE_REFRACTION};
pub use output::{rgb_bytes, save_image, write_ppm, OutputError, OutputResult};
pub use renderer::{render, render_linear, render_pixel, render_sequential, RenderConfig};
pub use shading::{in_shadow, local_illumination, shade, LightIntensity};
pub use tracer::{cast_ray, BACKGROUND, MAX_DEPTH, SURFACE_EPSILON};

/// Color type alias (linear RGB, not clamped until tone mapping)
pub type Color = lumen_math::Vec3;

/// Re-export scene and math types
pub use lumen_core::{Light, Material, Scene, Sphere};
pub use lumen_math::{PinholeCamera, Ray, Vec3, Vec4};
