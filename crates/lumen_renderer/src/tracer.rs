//! Recursive ray casting.
//!
//! Each hit spawns one reflected and one refracted ray, so a primary ray
//! expands into at most 2^(MAX_DEPTH + 1) branches before the depth cap
//! ends the recursion.

use lumen_core::Scene;
use lumen_math::{Ray, Vec3};

use crate::intersect::intersect;
use crate::optics::{reflect, refract_from_air};
use crate::shading::shade;
use crate::Color;

/// Color returned for rays that escape the scene or exceed the depth cap.
pub const BACKGROUND: Color = Vec3::new(0.2, 0.7, 0.8);

/// Deepest recursion level that is still shaded.
pub const MAX_DEPTH: u32 = 4;

/// Offset applied to secondary ray origins along the surface normal.
pub const SURFACE_EPSILON: f32 = 1e-3;

/// Compute the color seen along a ray.
///
/// `depth` counts how many surface bounces led to this ray; primary rays
/// start at 0. Anything past [`MAX_DEPTH`] returns [`BACKGROUND`], even on
/// a direct hit.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    if depth > MAX_DEPTH {
        return BACKGROUND;
    }

    let Some(hit) = intersect(ray, scene) else {
        return BACKGROUND;
    };

    let reflect_dir = reflect(ray.direction, hit.normal).normalize();
    let refract_dir = refract_from_air(ray.direction, hit.normal, hit.material.refractive_index).normalize();

    let reflect_ray = Ray::from_surface(hit.point, hit.normal, reflect_dir, SURFACE_EPSILON);
    let refract_ray = Ray::from_surface(hit.point, hit.normal, refract_dir, SURFACE_EPSILON);

    let reflect_color = cast_ray(&reflect_ray, scene, depth + 1);
    let refract_color = cast_ray(&refract_ray, scene, depth + 1);

    shade(&hit, scene, ray.direction, reflect_color, refract_color)
}
