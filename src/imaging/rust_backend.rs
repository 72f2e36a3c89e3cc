//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header-only) |
//! | Decode (JPEG, PNG, WebP) | `image` crate with format guessing |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{Dimensions, ImageBackend};
use super::params::CoverParams;
use crate::error::CoverError;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode encoded image bytes, guessing the format from magic numbers.
fn decode_image(bytes: &[u8]) -> Result<DynamicImage, CoverError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(CoverError::Io)?
        .decode()
        .map_err(|e| CoverError::UnsupportedFormat(e.to_string()))
}

/// Encode an image as JPEG into an in-memory buffer.
///
/// JPEG has no alpha channel, so the image is flattened to RGB8 first.
fn encode_jpeg(img: &DynamicImage, quality: u32) -> Result<Vec<u8>, CoverError> {
    let rgb = img.to_rgb8();
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality as u8);
    rgb.write_with_encoder(encoder)
        .map_err(|e| CoverError::Encode(format!("JPEG encode failed: {e}")))?;
    Ok(buf)
}

impl ImageBackend for RustBackend {
    fn identify(&self, bytes: &[u8]) -> Result<Dimensions, CoverError> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(CoverError::Io)?
            .into_dimensions()
            .map_err(|e| CoverError::UnsupportedFormat(e.to_string()))?;
        Ok(Dimensions { width, height })
    }

    fn cover(&self, bytes: &[u8], params: &CoverParams) -> Result<Vec<u8>, CoverError> {
        let img = decode_image(bytes)?;

        let scaled = img.resize_exact(
            params.scaled_width,
            params.scaled_height,
            FilterType::Lanczos3,
        );
        let crop = params.crop;
        let cropped = scaled.crop_imm(crop.left, crop.top, crop.width, crop.height);

        // The plan guarantees the box fits inside the scaled image; a
        // mismatch here means the geometry is broken, not the input.
        if cropped.width() != crop.width || cropped.height() != crop.height {
            return Err(CoverError::Encode(format!(
                "crop produced {}x{}, expected {}x{}",
                cropped.width(),
                cropped.height(),
                crop.width,
                crop.height
            )));
        }

        encode_jpeg(&cropped, params.quality.value())
    }
}
