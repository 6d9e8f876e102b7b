//! Reflection and refraction directions.

use lumen_math::Vec3;

/// Direction returned by [`refract`] when Snell's law has no solution.
///
/// This is not total internal reflection: the refracted branch is simply
/// sent along a fixed direction instead of being dropped.
pub const DEGENERATE_REFRACTION: Vec3 = Vec3::X;

/// Reflect an incoming direction about a normal.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract an incoming direction through a surface (Snell's law).
///
/// `eta_t` is the index on the far side of `normal`, `eta_i` the index on
/// the near side. A ray arriving from inside the medium (same side as the
/// normal points away from) is handled by flipping the normal and swapping
/// the indices.
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cosi = -incident.dot(normal).clamp(-1.0, 1.0);
    if cosi < 0.0 {
        return refract(incident, -normal, eta_i, eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        DEGENERATE_REFRACTION
    } else {
        incident * eta + normal * (eta * cosi - k.sqrt())
    }
}

/// Refract from air (index 1) into a medium with the given index.
#[inline]
pub fn refract_from_air(incident: Vec3, normal: Vec3, refractive_index: f32) -> Vec3 {
    refract(incident, normal, refractive_index, 1.0)
}
