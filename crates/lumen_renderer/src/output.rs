//! Image output.
//!
//! Writes a tone-mapped framebuffer as 8-bit RGB. `.ppm` files are written
//! directly as binary P6; every other extension goes through the `image`
//! crate (PNG, BMP, TGA).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ColorType, ImageFormat};
use thiserror::Error;

use crate::framebuffer::Framebuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Interleaved RGB bytes of a framebuffer.
pub fn rgb_bytes(framebuffer: &Framebuffer) -> Vec<u8> {
    let pixels = framebuffer.to_rgb8();
    bytemuck::cast_slice::<[u8; 3], u8>(&pixels).to_vec()
}

/// Write a binary PPM (P6) image to any writer.
pub fn write_ppm<W: Write>(framebuffer: &Framebuffer, writer: &mut W) -> OutputResult<()> {
    write!(writer, "P6\n{} {}\n255\n", framebuffer.width, framebuffer.height)?;
    writer.write_all(&rgb_bytes(framebuffer))?;
    Ok(())
}

/// Save a framebuffer, choosing the format from the file extension.
pub fn save_image<P: AsRef<Path>>(framebuffer: &Framebuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension == "ppm" {
        let mut writer = BufWriter::new(File::create(path)?);
        write_ppm(framebuffer, &mut writer)?;
        writer.flush()?;
    } else {
        let format = ImageFormat::from_extension(&extension)
            .ok_or_else(|| OutputError::UnsupportedFormat(path.display().to_string()))?;
        image::save_buffer_with_format(
            path,
            &rgb_bytes(framebuffer),
            framebuffer.width,
            framebuffer.height,
            ColorType::Rgb8,
            format,
        )?;
    }

    log::info!("Saved {}x{} image to {}", framebuffer.width, framebuffer.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    fn checker() -> Framebuffer {
        let mut fb = Framebuffer::new(2, 2);
        fb.set(0, 0, Vec3::ONE);
        fb.set(1, 1, Vec3::new(1.0, 0.5, 0.0));
        fb
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("lumen_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_rgb_bytes_interleaved() {
        let bytes = rgb_bytes(&checker());
        assert_eq!(bytes, vec![255, 255, 255, 0, 0, 0, 0, 0, 0, 255, 127, 0]);
    }

    #[test]
    fn test_write_ppm() {
        let mut out = Vec::new();
        write_ppm(&checker(), &mut out).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(out.len(), header.len() + 12);
        assert_eq!(&out[header.len()..header.len() + 3], &[255, 255, 255]);
    }

    #[test]
    fn test_save_ppm() {
        let path = temp_path("out.ppm");
        save_image(&checker(), &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n2 2\n255\n"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_png_roundtrip() {
        let path = temp_path("out.png");
        save_image(&checker(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 127, 0]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = save_image(&checker(), temp_path("out.xyz")).unwrap_err();
        assert!(matches!(err, OutputError::UnsupportedFormat(_)));
    }
}
