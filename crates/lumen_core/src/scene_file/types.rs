//! Scene file description types.
//!
//! These mirror the JSON layout one-to-one and are converted to scene
//! model types by the loader.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Top-level scene document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDocument {
    /// Optional output settings
    #[serde(default)]
    pub image: Option<ImageSettings>,

    /// Named materials referenced by spheres
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDesc>,

    #[serde(default)]
    pub spheres: Vec<SphereDesc>,

    #[serde(default)]
    pub lights: Vec<LightDesc>,
}

/// Output settings carried by a scene file.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSettings {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub output: Option<PathBuf>,
}

/// A material as written in the scene file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialDesc {
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f32,

    #[serde(default = "default_albedo")]
    pub albedo: [f32; 4],

    pub diffuse_color: [f32; 3],

    #[serde(default)]
    pub specular_exponent: f32,
}

/// Reference from a sphere to its material.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MaterialRef {
    /// Name of an entry in the document's `materials` table
    Named(String),

    /// Material defined in place
    Inline(MaterialDesc),
}

/// A sphere as written in the scene file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDesc {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: MaterialRef,
}

/// A point light as written in the scene file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDesc {
    pub position: [f32; 3],

    #[serde(default = "default_intensity")]
    pub intensity: f32,
}

fn default_refractive_index() -> f32 {
    1.0
}

fn default_albedo() -> [f32; 4] {
    [1.0, 0.0, 0.0, 0.0]
}

fn default_intensity() -> f32 {
    1.0
}
