//! Lumen math - vector algebra, rays and the pinhole camera.

// Re-export glam for convenience
pub use glam::*;

mod camera;
mod ray;

pub use camera::{PinholeCamera, FIELD_OF_VIEW};
pub use ray::Ray;
