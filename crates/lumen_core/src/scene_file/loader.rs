//! High-level scene file loading.
//!
//! Decodes a JSON scene document, validates every numeric field and
//! builds the immutable [`Scene`] handed to the renderer.

use std::path::Path;

use lumen_math::{Vec3, Vec4};
use thiserror::Error;

use super::types::{ImageSettings, LightDesc, MaterialDesc, MaterialRef, SceneDocument, SphereDesc};
use crate::scene::{Light, Material, Scene, Sphere};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{owner}: unknown material '{name}'")]
    UnknownMaterial { owner: String, name: String },

    #[error("{owner}: {field} must be finite")]
    NonFinite { owner: String, field: &'static str },

    #[error("{owner}: radius must be positive, got {radius}")]
    InvalidRadius { owner: String, radius: f32 },

    #[error("{owner}: {field} must not be negative, got {value}")]
    Negative {
        owner: String,
        field: &'static str,
        value: f32,
    },

    #[error("Image {0} must be greater than zero")]
    ZeroDimension(&'static str),
}

/// Result type for loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A validated scene plus the output settings found in the file.
#[derive(Clone, Debug)]
pub struct SceneFile {
    pub scene: Scene,
    pub image: ImageSettings,
}

/// Load and validate a scene file from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let file = load_scene_from_str(&content)?;

    log::info!(
        "Loaded scene {}: {} spheres, {} lights",
        path.display(),
        file.scene.sphere_count(),
        file.scene.light_count()
    );

    Ok(file)
}

/// Load and validate a scene from JSON text.
pub fn load_scene_from_str(content: &str) -> SceneResult<SceneFile> {
    let document: SceneDocument = serde_json::from_str(content)?;
    build_scene(&document)
}

/// Validate a decoded document and convert it into a [`Scene`].
pub fn build_scene(document: &SceneDocument) -> SceneResult<SceneFile> {
    let image = document.image.clone().unwrap_or_default();
    check_image(&image)?;

    let mut scene = Scene::new();

    for (index, desc) in document.spheres.iter().enumerate() {
        scene.add_sphere(convert_sphere(index, desc, document)?);
    }

    for (index, desc) in document.lights.iter().enumerate() {
        scene.add_light(convert_light(index, desc)?);
    }

    let unused = document
        .materials
        .keys()
        .filter(|name| {
            !document
                .spheres
                .iter()
                .any(|s| matches!(&s.material, MaterialRef::Named(n) if n == *name))
        })
        .count();
    if unused > 0 {
        log::debug!("{} material(s) defined but never referenced", unused);
    }

    Ok(SceneFile { scene, image })
}

fn check_image(image: &ImageSettings) -> SceneResult<()> {
    if image.width == Some(0) {
        return Err(SceneError::ZeroDimension("width"));
    }
    if image.height == Some(0) {
        return Err(SceneError::ZeroDimension("height"));
    }
    Ok(())
}

fn convert_sphere(index: usize, desc: &SphereDesc, document: &SceneDocument) -> SceneResult<Sphere> {
    let owner = format!("sphere {}", index);

    let center = finite_vec3(&owner, "center", desc.center)?;
    let radius = finite(&owner, "radius", desc.radius)?;
    if radius <= 0.0 {
        return Err(SceneError::InvalidRadius { owner, radius });
    }

    let material = match &desc.material {
        MaterialRef::Named(name) => {
            let material_desc = document.materials.get(name).ok_or_else(|| SceneError::UnknownMaterial {
                owner: owner.clone(),
                name: name.clone(),
            })?;
            convert_material(&format!("material '{}'", name), material_desc)?
        }
        MaterialRef::Inline(material_desc) => convert_material(&owner, material_desc)?,
    };

    Ok(Sphere::new(center, radius, material))
}

fn convert_material(owner: &str, desc: &MaterialDesc) -> SceneResult<Material> {
    let refractive_index = finite(owner, "refractive_index", desc.refractive_index)?;
    non_negative(owner, "refractive_index", refractive_index)?;

    let [a0, a1, a2, a3] = desc.albedo;
    for value in desc.albedo {
        finite(owner, "albedo", value)?;
    }

    let diffuse_color = finite_vec3(owner, "diffuse_color", desc.diffuse_color)?;

    let specular_exponent = finite(owner, "specular_exponent", desc.specular_exponent)?;
    non_negative(owner, "specular_exponent", specular_exponent)?;

    Ok(Material::new(
        refractive_index,
        Vec4::new(a0, a1, a2, a3),
        diffuse_color,
        specular_exponent,
    ))
}

fn convert_light(index: usize, desc: &LightDesc) -> SceneResult<Light> {
    let owner = format!("light {}", index);

    let position = finite_vec3(&owner, "position", desc.position)?;
    let intensity = finite(&owner, "intensity", desc.intensity)?;
    non_negative(&owner, "intensity", intensity)?;

    Ok(Light::new(position, intensity))
}

fn finite(owner: &str, field: &'static str, value: f32) -> SceneResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SceneError::NonFinite {
            owner: owner.to_string(),
            field,
        })
    }
}

fn finite_vec3(owner: &str, field: &'static str, value: [f32; 3]) -> SceneResult<Vec3> {
    let v = Vec3::from_array(value);
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SceneError::NonFinite {
            owner: owner.to_string(),
            field,
        })
    }
}

fn non_negative(owner: &str, field: &'static str, value: f32) -> SceneResult<()> {
    if value < 0.0 {
        return Err(SceneError::Negative {
            owner: owner.to_string(),
            field,
            value,
        });
    }
    Ok(())
}
