//! Mask preparation
//!
//! Normalizes an external bitmap into a renderer-compatible mask: exact
//! target dimensions, fully opaque, with transparency flattened to white.
//! White pixels mean "excluded area" to the renderer, so a transparent
//! region in the source ends up excluded rather than silently fillable.

use crate::error::CloudError;
use image::{imageops::FilterType, Rgb, RgbImage, RgbaImage};
use std::path::Path;

/// Load a mask bitmap and normalize it for the renderer.
///
/// The source is stretched (not cropped) to exactly `width` x `height`.
/// A missing or undecodable file surfaces as a Resource error.
pub fn prepare(path: &Path, width: u32, height: u32) -> Result<RgbImage, CloudError> {
    let source = image::open(path).map_err(|e| CloudError::resource(path, e))?;
    let resized = source
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgba8();
    Ok(flatten_to_white(&resized))
}

/// Alpha-composite over a white background and drop the alpha channel.
fn flatten_to_white(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = a as u16;
        let blend = |c: u8| ((c as u16 * alpha + 255 * (255 - alpha)) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_flatten_transparent_pixel_becomes_white() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));
        let flat = flatten_to_white(&img);
        assert_eq!(flat.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_flatten_opaque_pixel_unchanged() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let flat = flatten_to_white(&img);
        assert_eq!(flat.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn test_flatten_partial_alpha_blends_toward_white() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let flat = flatten_to_white(&img);
        let [r, g, b] = flat.get_pixel(0, 0).0;
        // Half-transparent black over white lands near mid-gray.
        for channel in [r, g, b] {
            assert!((120..=135).contains(&channel), "got {}", channel);
        }
    }

    #[test]
    fn test_prepare_resizes_to_exact_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        RgbaImage::from_pixel(30, 70, Rgba([0, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let mask = prepare(&path, 200, 100).unwrap();
        assert_eq!(mask.dimensions(), (200, 100));
    }

    #[test]
    fn test_prepare_missing_file_is_resource_error() {
        let result = prepare(Path::new("/nonexistent/mask.png"), 100, 100);
        assert!(matches!(result, Err(CloudError::Resource { .. })));
    }

    #[test]
    fn test_prepare_corrupt_file_is_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        std::fs::write(&path, b"not an image").unwrap();

        let result = prepare(&path, 100, 100);
        assert!(matches!(result, Err(CloudError::Resource { .. })));
    }
}
