//! Phong-style local illumination with hard shadows.
//!
//! Combines the diffuse and specular light gathered from every unoccluded
//! point light with the colors of the reflected and refracted rays, each
//! weighted by the material's albedo.

use lumen_core::{Light, Scene};
use lumen_math::{Ray, Vec3};

use crate::intersect::{intersect, SurfaceHit};
use crate::optics::reflect;
use crate::tracer::SURFACE_EPSILON;
use crate::Color;

/// Light gathered at a surface point, before the material is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightIntensity {
    /// Lambertian term
    pub diffuse: f32,
    /// Phong highlight term
    pub specular: f32,
}

/// Check whether `light` is blocked by any sphere as seen from the hit point.
///
/// Shadowing is binary: any hit closer than the light occludes it fully.
pub fn in_shadow(hit: &SurfaceHit, light: &Light, scene: &Scene) -> bool {
    let to_light = light.position - hit.point;
    let light_distance = to_light.length();
    let shadow_ray = Ray::from_surface(hit.point, hit.normal, to_light.normalize(), SURFACE_EPSILON);

    match intersect(&shadow_ray, scene) {
        Some(blocker) => (blocker.point - shadow_ray.origin).length() < light_distance,
        None => false,
    }
}

/// Sum the diffuse and specular intensity of every light reaching the hit.
///
/// `incoming` is the direction of the ray that produced the hit.
pub fn local_illumination(hit: &SurfaceHit, scene: &Scene, incoming: Vec3) -> LightIntensity {
    let mut total = LightIntensity::default();

    for light in &scene.lights {
        if in_shadow(hit, light, scene) {
            continue;
        }

        let light_dir = (light.position - hit.point).normalize();

        total.diffuse += light.intensity * light_dir.dot(hit.normal).max(0.0);

        let highlight = (-reflect(-light_dir, hit.normal)).dot(incoming).max(0.0);
        total.specular += highlight.powf(hit.material.specular_exponent) * light.intensity;
    }

    total
}

/// Compute the outgoing color at a hit.
///
/// `reflect_color` and `refract_color` are the colors returned by the
/// secondary rays. Albedo weights are applied as-is, so materials whose
/// weights sum past 1 come out over-bright.
pub fn shade(
    hit: &SurfaceHit,
    scene: &Scene,
    incoming: Vec3,
    reflect_color: Color,
    refract_color: Color,
) -> Color {
    let light = local_illumination(hit, scene, incoming);
    let material = hit.material;

    material.diffuse_color * light.diffuse * material.diffuse_weight()
        + Color::ONE * light.specular * material.specular_weight()
        + reflect_color * material.reflect_weight()
        + refract_color * material.refract_weight()
}
