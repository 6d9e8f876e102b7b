//! Framebuffer storage and tone mapping.

use lumen_math::Vec3;
use rayon::prelude::*;

use crate::Color;

/// Scale a color so its brightest channel is at most 1, then clamp.
///
/// Scaling the whole color preserves hue, unlike clipping channels one by
/// one.
#[inline]
pub fn tone_map_color(color: Color) -> Color {
    let max = color.max_element();
    let scaled = if max > 1.0 { color * (1.0 / max) } else { color };
    scaled.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Quantize one channel in [0, 1] to 8 bits (truncating).
#[inline]
pub fn quantize(channel: f32) -> u8 {
    (255.0 * channel.clamp(0.0, 1.0)) as u8
}

/// Row-major buffer of linear colors, one per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Index of pixel (x, y) in `pixels`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Tone-map every pixel in place. See [`tone_map_color`].
    pub fn tone_map(&mut self) {
        self.pixels.par_iter_mut().for_each(|pixel| *pixel = tone_map_color(*pixel));
    }

    /// Convert to 8-bit RGB triples (for saving).
    pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
        self.pixels
            .par_iter()
            .map(|c| [quantize(c.x), quantize(c.y), quantize(c.z)])
            .collect()
    }
}
