// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from the formats the `image` crate supports.

use crate::error::Result;
use iced::widget::image;
use std::path::Path;
use std::sync::Arc;

/// Dimensions of the generated placeholder shown before any upload.
const PLACEHOLDER_WIDTH: u32 = 64;
const PLACEHOLDER_HEIGHT: u32 = 36;

/// Decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes, kept in an Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

/// Decodes the file at `path` into an `ImageData`.
///
/// Unsupported, truncated, or otherwise undecodable files surface as
/// `Error::Image`; the caller decides whether that is worth telling anyone.
pub fn load_path(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

/// Built-in placeholder shown in the preview before any image is uploaded:
/// a small vertical slate gradient, upscaled by the renderer with cover fit.
#[must_use]
pub fn placeholder() -> ImageData {
    let mut pixels =
        Vec::with_capacity((PLACEHOLDER_WIDTH * PLACEHOLDER_HEIGHT * 4) as usize);
    for y in 0..PLACEHOLDER_HEIGHT {
        let t = y as f32 / (PLACEHOLDER_HEIGHT - 1) as f32;
        let level = (0x58 as f32 - t * (0x58 - 0x2E) as f32) as u8;
        for _x in 0..PLACEHOLDER_WIDTH {
            pixels.extend_from_slice(&[
                level,
                level.saturating_add(6),
                level.saturating_add(14),
                0xFF,
            ]);
        }
    }
    ImageData::from_rgba(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_keeps_dimensions_and_bytes() {
        let pixels = vec![0u8; 2 * 3 * 4];
        let data = ImageData::from_rgba(2, 3, pixels.clone());
        assert_eq!(data.width, 2);
        assert_eq!(data.height, 3);
        assert_eq!(data.rgba_bytes(), pixels.as_slice());
    }

    #[test]
    fn placeholder_is_fully_opaque_and_sized() {
        let data = placeholder();
        assert_eq!(data.width, PLACEHOLDER_WIDTH);
        assert_eq!(data.height, PLACEHOLDER_HEIGHT);
        assert_eq!(
            data.rgba_bytes().len(),
            (PLACEHOLDER_WIDTH * PLACEHOLDER_HEIGHT * 4) as usize
        );
        assert!(data.rgba_bytes().chunks(4).all(|px| px[3] == 0xFF));
    }

    #[test]
    fn placeholder_darkens_top_to_bottom() {
        let data = placeholder();
        let row = (PLACEHOLDER_WIDTH * 4) as usize;
        let first = data.rgba_bytes()[0];
        let last = data.rgba_bytes()[data.rgba_bytes().len() - row];
        assert!(last < first);
    }

    #[test]
    fn load_path_reports_missing_file_as_error() {
        let err = load_path(Path::new("/nonexistent/definitely-not-here.png"));
        assert!(err.is_err());
    }
}
