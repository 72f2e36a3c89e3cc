//! Shared test utilities for the covercrop test suite.
//!
//! Synthetic in-memory images: the pipeline works on byte slices, so tests
//! never need files on disk.

use image::{ImageEncoder, RgbImage};

/// A gradient test pattern — distinct pixels so resampling has real work.
fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Encode a small valid JPEG with the given dimensions.
pub fn encode_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = gradient(width, height);
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

/// Encode a small valid PNG with the given dimensions.
pub fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let img = gradient(width, height);
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}
