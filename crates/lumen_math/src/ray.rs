use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Rays cast by the tracer always carry a unit-length `direction`; the
/// intersection math relies on it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Spawn a secondary ray leaving a surface point.
    ///
    /// The origin is pushed `epsilon` along the normal, towards the side the
    /// new direction travels to, so the ray does not immediately re-hit the
    /// surface it starts on.
    pub fn from_surface(point: Vec3, normal: Vec3, direction: Vec3, epsilon: f32) -> Self {
        let origin = if direction.dot(normal) < 0.0 {
            point - normal * epsilon
        } else {
            point + normal * epsilon
        };
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.origin(), ray.origin);
        assert_eq!(ray.direction(), ray.direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_surface_outward() {
        // Leaving along the normal: origin sits just outside
        let ray = Ray::from_surface(Vec3::ZERO, Vec3::Y, Vec3::new(1.0, 1.0, 0.0), 0.5);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_from_surface_inward() {
        // Heading into the surface: origin sits just inside
        let ray = Ray::from_surface(Vec3::ZERO, Vec3::Y, Vec3::NEG_Y, 0.5);
        assert_eq!(ray.origin, Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(ray.direction, Vec3::NEG_Y);
    }

    #[test]
    fn test_from_surface_tangent_counts_as_outward() {
        let ray = Ray::from_surface(Vec3::ZERO, Vec3::Y, Vec3::X, 0.25);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.25, 0.0));
    }
}
