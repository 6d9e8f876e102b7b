//! JSON scene description support for Lumen.
//!
//! Scene files are decoded with `serde` into plain description types and
//! then validated and converted into the renderer's [`Scene`](crate::Scene).
//! Malformed numeric data is rejected here so the renderer never has to
//! deal with it.
//!
//! # Format
//!
//! ```json
//! {
//!   "image": { "width": 640, "height": 480, "output": "out.png" },
//!   "materials": {
//!     "ivory": { "refractive_index": 1.0, "albedo": [0.6, 0.3, 0.1, 0.0],
//!                "diffuse_color": [0.4, 0.4, 0.3], "specular_exponent": 50.0 }
//!   },
//!   "spheres": [ { "center": [-3, 0, -16], "radius": 2, "material": "ivory" } ],
//!   "lights": [ { "position": [-20, 20, 20], "intensity": 1.5 } ]
//! }
//! ```
//!
//! A sphere's `material` is either the name of an entry in `materials` or
//! an inline material object.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let file = load_scene("scene.json")?;
//! println!("Loaded {} spheres", file.scene.sphere_count());
//! ```

mod loader;
mod types;

pub use loader::*;
pub use types::*;
