//! Scene model for Lumen.
//!
//! Spheres, point lights and the Phong-style material they carry. A
//! `Scene` is built once (by the loader or by hand) and is only read
//! while rendering.

use lumen_math::{Vec3, Vec4};

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    /// World-space position
    pub position: Vec3,

    /// Scalar intensity (expected non-negative)
    pub intensity: f32,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Surface description used by the Phong shading model.
///
/// `albedo` weights the four outgoing contributions in order: diffuse,
/// specular, reflection, refraction. The weights do not have to sum to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Index of refraction on the inside of the surface (air is 1.0)
    pub refractive_index: f32,

    /// Weights for diffuse, specular, reflected and refracted light
    pub albedo: Vec4,

    /// Diffuse color (RGB, 0-1)
    pub diffuse_color: Vec3,

    /// Phong shininess
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Vec3::ZERO,
            specular_exponent: 0.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(refractive_index: f32, albedo: Vec4, diffuse_color: Vec3, specular_exponent: f32) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Off-white, mostly diffuse with a soft highlight.
    pub fn ivory() -> Self {
        Self::new(1.0, Vec4::new(0.6, 0.3, 0.1, 0.0), Vec3::new(0.4, 0.4, 0.3), 50.0)
    }

    /// Clear glass with a sharp highlight.
    pub fn glass() -> Self {
        Self::new(1.5, Vec4::new(0.0, 0.5, 0.1, 0.8), Vec3::new(0.6, 0.7, 0.8), 125.0)
    }

    /// Matte red.
    pub fn red_rubber() -> Self {
        Self::new(1.0, Vec4::new(0.9, 0.1, 0.0, 0.0), Vec3::new(0.3, 0.1, 0.1), 10.0)
    }

    /// Near-perfect mirror. The specular weight is deliberately over-driven.
    pub fn mirror() -> Self {
        Self::new(1.0, Vec4::new(0.0, 10.0, 0.8, 0.0), Vec3::ONE, 1425.0)
    }

    /// Weight of the diffuse term.
    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        self.albedo[0]
    }

    /// Weight of the specular term.
    #[inline]
    pub fn specular_weight(&self) -> f32 {
        self.albedo[1]
    }

    /// Weight of the reflected color.
    #[inline]
    pub fn reflect_weight(&self) -> f32 {
        self.albedo[2]
    }

    /// Weight of the refracted color.
    #[inline]
    pub fn refract_weight(&self) -> f32 {
        self.albedo[3]
    }
}

/// A sphere primitive. Owns its material by value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,

    /// Must be positive; the loader rejects anything else
    pub radius: f32,

    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A complete scene: spheres and point lights.
///
/// Order of both lists is preserved. Sphere order only matters as a
/// tie-break for coincident intersections.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Spheres, in declaration order
    pub spheres: Vec<Sphere>,

    /// Point lights, in declaration order
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from sphere and light lists.
    pub fn from_parts(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights }
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check if the scene has no geometry.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// The built-in demo scene: four spheres (ivory, glass, rubber, mirror)
    /// lit by three point lights.
    pub fn demo() -> Self {
        let spheres = vec![
            Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::ivory()),
            Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::glass()),
            Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber()),
            Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()),
        ];
        let lights = vec![
            Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5),
            Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8),
            Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7),
        ];
        Self::from_parts(spheres, lights)
    }
}
