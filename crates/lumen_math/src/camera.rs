use glam::{DVec3, Vec3};

use crate::Ray;

/// Default vertical field of view (60 degrees).
pub const FIELD_OF_VIEW: f64 = std::f64::consts::FRAC_PI_3;

/// Pinhole camera fixed at the world origin, looking down -Z.
///
/// Generates exactly one primary ray per pixel through the pixel center.
/// Row 0 is the top of the image.
#[derive(Debug, Clone, Copy)]
pub struct PinholeCamera {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in radians
    pub fov_y: f64,
}

impl PinholeCamera {
    /// Create a camera for an image of the given size with the default FOV.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fov_y: FIELD_OF_VIEW,
        }
    }

    /// Distance from the eye to the image plane, measured in pixels.
    fn plane_distance(&self) -> f64 {
        self.height as f64 / (2.0 * (self.fov_y / 2.0).tan())
    }

    /// Unnormalized camera-space direction through the center of pixel (i, j).
    pub fn pixel_direction(&self, i: u32, j: u32) -> Vec3 {
        let dir = DVec3::new(
            (i as f64 + 0.5) - self.width as f64 / 2.0,
            -(j as f64 + 0.5) + self.height as f64 / 2.0, // flips the image vertically
            -self.plane_distance(),
        );
        dir.as_vec3()
    }

    /// Primary ray for pixel (column i, row j).
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        Ray::new(Vec3::ZERO, self.pixel_direction(i, j).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_down_negative_z() {
        // Odd resolution: pixel (1, 1) is exactly centered
        let camera = PinholeCamera::new(3, 3);
        let ray = camera.primary_ray(1, 1);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_row_zero_is_top() {
        let camera = PinholeCamera::new(100, 100);
        let top = camera.primary_ray(50, 0);
        let bottom = camera.primary_ray(50, 99);

        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }

    #[test]
    fn test_column_zero_is_left() {
        let camera = PinholeCamera::new(100, 100);
        assert!(camera.primary_ray(0, 50).direction.x < 0.0);
        assert!(camera.primary_ray(99, 50).direction.x > 0.0);
    }

    #[test]
    fn test_vertical_fov_spans_sixty_degrees() {
        let camera = PinholeCamera::new(1, 1000);
        let dir = camera.pixel_direction(0, 0);

        // Top edge of the frustum is 30 degrees above the view axis
        let angle = (dir.y / -dir.z).atan();
        assert!((angle - 30f32.to_radians()).abs() < 1e-3);
    }

    #[test]
    fn test_primary_rays_are_unit_length() {
        let camera = PinholeCamera::new(64, 48);
        for (i, j) in [(0, 0), (63, 0), (0, 47), (63, 47), (10, 20)] {
            let len = camera.primary_ray(i, j).direction.length();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }
}
