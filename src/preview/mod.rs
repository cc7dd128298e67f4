//! # RGB565 to PNG Preview
//!
//! Renders a MinerScreen buffer as a PNG so the logo can be checked without
//! flashing a device.
//!
//! ## Example
//!
//! ```
//! use pugmark::preview::{render_logo, to_png};
//!
//! let pixels = render_logo(320, 240).unwrap();
//! let png_bytes = to_png(&pixels, 320, 240).unwrap();
//! assert!(png_bytes.starts_with(b"\x89PNG"));
//! ```

use std::path::Path;

use image::{ImageEncoder, Rgb, RgbImage};

use crate::error::PugmarkError;
use crate::logo;
use crate::render::color::rgb565_to_rgb;
use crate::render::{Canvas, Palette};

/// Compose the logo on a fresh all-black `width x height` buffer.
pub fn render_logo(width: usize, height: usize) -> Result<Vec<u16>, PugmarkError> {
    let area = width
        .checked_mul(height)
        .ok_or_else(|| PugmarkError::Image(format!("{width}x{height} is too large")))?;
    let mut pixels = vec![0u16; area];
    if let Some(mut canvas) = Canvas::new(&mut pixels, width, height) {
        logo::compose(&mut canvas, &Palette::PUGMINER);
    }
    Ok(pixels)
}

/// Expand an RGB565 buffer into an 8-bit RGB image.
pub fn to_rgb_image(pixels: &[u16], width: usize, height: usize) -> Result<RgbImage, PugmarkError> {
    if width.checked_mul(height) != Some(pixels.len()) {
        return Err(PugmarkError::Image(format!(
            "{} pixels cannot fill a {width}x{height} image",
            pixels.len()
        )));
    }
    let (w, h) = dimensions(width, height)?;
    Ok(RgbImage::from_fn(w, h, |x, y| {
        Rgb(rgb565_to_rgb(pixels[y as usize * width + x as usize]))
    }))
}

/// Encode an RGB565 buffer as PNG bytes.
pub fn to_png(pixels: &[u16], width: usize, height: usize) -> Result<Vec<u8>, PugmarkError> {
    let img = to_rgb_image(pixels, width, height)?;

    let mut png_bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png_bytes)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e: image::ImageError| PugmarkError::Image(e.to_string()))?;
    Ok(png_bytes)
}

/// Save an RGB565 buffer as a PNG file.
pub fn save_png(path: &Path, pixels: &[u16], width: usize, height: usize) -> Result<(), PugmarkError> {
    let png_bytes = to_png(pixels, width, height)?;
    std::fs::write(path, png_bytes)?;
    Ok(())
}

fn dimensions(width: usize, height: usize) -> Result<(u32, u32), PugmarkError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(PugmarkError::Image(format!("{width}x{height} is too large"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_image_colors() {
        let pixels = [0xF800, 0x07E0, 0x001F, 0xFFFF];
        let img = to_rgb_image(&pixels, 2, 2).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([0, 255, 0]));
        assert_eq!(img.get_pixel(0, 1), &Rgb([0, 0, 255]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_rgb_image_rejects_wrong_length() {
        assert!(matches!(to_rgb_image(&[0; 5], 2, 2), Err(PugmarkError::Image(_))));
    }

    #[test]
    fn test_png_round_trip_dimensions() {
        let pixels = render_logo(64, 48).unwrap();
        let png = to_png(&pixels, 64, 48).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (64, 48));
        let [r, g, b] = rgb565_to_rgb(Palette::PUGMINER.border);
        assert_eq!(decoded.get_pixel(2, 2), &Rgb([r, g, b]));
    }

    #[test]
    fn test_render_logo_rejects_overflowing_size() {
        let err = render_logo(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, PugmarkError::Image(msg) if msg.contains("too large")));
        assert_eq!(render_logo(0, 0).unwrap(), Vec::<u16>::new());
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        save_png(&path, &render_logo(40, 30).unwrap(), 40, 30).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }
}
