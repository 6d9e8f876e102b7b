//! Lumen Core - scene model and scene file loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `Material`
//! - **Scene files**: JSON decoding with validation
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let file = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     file.scene.sphere_count(),
//!     file.scene.light_count());
//! ```

pub mod scene;
pub mod scene_file;

// Re-export commonly used types
pub use scene::{Light, Material, Scene, Sphere};
pub use scene_file::{load_scene, load_scene_from_str, ImageSettings, SceneError, SceneFile, SceneResult};
