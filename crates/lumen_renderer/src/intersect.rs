//! Ray-sphere intersection.
//!
//! Brute-force linear scan over the scene's spheres; the nearest positive
//! hit wins.

use lumen_core::{Material, Scene, Sphere};
use lumen_math::{Ray, Vec3};

/// Hits at or beyond this distance are outside the visible world.
pub const HORIZON: f32 = 1000.0;

/// Record of the nearest ray-scene intersection.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit<'a> {
    /// Ray parameter of the hit
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit normal of the sphere at `point`
    pub normal: Vec3,
    /// Material of the sphere that was hit
    pub material: &'a Material,
}

/// Distance along `ray` to the first non-negative intersection with `sphere`.
///
/// Uses the projection of the center onto the ray. When the origin is inside
/// the sphere (or the near root is behind it) the far root is returned.
/// `ray.direction` must be unit length.
pub fn sphere_hit(sphere: &Sphere, ray: &Ray) -> Option<f32> {
    let l = sphere.center - ray.origin;
    let tca = l.dot(ray.direction);
    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;

    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// Find the nearest sphere hit by `ray`, if it lies within [`HORIZON`].
///
/// Ties keep the earlier sphere. No offset is applied to the ray origin;
/// callers spawning rays from a surface must do that themselves.
pub fn intersect<'a>(ray: &Ray, scene: &'a Scene) -> Option<SurfaceHit<'a>> {
    let mut nearest: Option<(f32, &Sphere)> = None;

    for sphere in &scene.spheres {
        if let Some(t) = sphere_hit(sphere, ray) {
            if nearest.map_or(true, |(closest, _)| t < closest) {
                nearest = Some((t, sphere));
            }
        }
    }

    let (distance, sphere) = nearest?;
    if distance >= HORIZON {
        return None;
    }

    let point = ray.at(distance);
    Some(SurfaceHit {
        distance,
        point,
        normal: (point - sphere.center).normalize(),
        material: &sphere.material,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Light;

    fn sphere_at(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::ivory())
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let t = sphere_hit(&sphere, &ray).unwrap();
        assert!((t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere_hit(&sphere, &ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = sphere_at(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere_hit(&sphere, &ray).is_none());
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let sphere = sphere_at(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = sphere_hit(&sphere, &ray).unwrap();
        assert!((t - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_central_hit_distance() {
        for (d, r) in [(5.0, 1.0), (16.0, 2.0), (100.0, 37.5)] {
            let scene = Scene::from_parts(vec![sphere_at(Vec3::new(0.0, 0.0, -d), r)], vec![]);
            let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

            let hit = intersect(&ray, &scene).unwrap();
            assert!((hit.distance - (d - r)).abs() < 1e-4, "d={d} r={r} got {}", hit.distance);
            assert!((hit.point - Vec3::new(0.0, 0.0, r - d)).length() < 1e-4);
            assert!((hit.normal - Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn test_nearest_sphere_wins() {
        let near = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::glass());
        let far = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, Material::mirror());

        // Declaration order must not matter
        for spheres in [vec![far, near], vec![near, far]] {
            let scene = Scene::from_parts(spheres, vec![]);
            let hit = intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &scene).unwrap();
            assert!((hit.distance - 4.0).abs() < 1e-5);
            assert_eq!(*hit.material, Material::glass());
        }
    }

    #[test]
    fn test_coincident_spheres_keep_first() {
        let first = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::glass());
        let second = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::mirror());
        let scene = Scene::from_parts(vec![first, second], vec![]);

        let hit = intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &scene).unwrap();
        assert_eq!(*hit.material, Material::glass());
    }

    #[test]
    fn test_beyond_horizon_is_miss() {
        let scene = Scene::from_parts(vec![sphere_at(Vec3::new(0.0, 0.0, -1500.0), 10.0)], vec![]);
        assert!(intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &scene).is_none());
    }

    #[test]
    fn test_empty_scene_is_miss() {
        let scene = Scene::from_parts(vec![], vec![Light::new(Vec3::Y, 1.0)]);
        assert!(intersect(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &scene).is_none());
    }
}
