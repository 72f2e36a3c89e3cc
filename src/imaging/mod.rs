//! Image processing — pure Rust, no system dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Cover fit** | Lanczos3 `resize_exact` + center `crop_imm` |
//! | **Encode** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for cover-fit geometry (unit testable)
//! - **Parameters**: Data structures describing cover operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{Dimensions, ImageBackend};
pub use calculations::{CropBox, center_crop_box, cover_scale_dimensions, resolve_target};
pub use operations::{CoverOutput, cover, plan_cover};
pub use params::{CoverParams, Dimension, Quality, TargetSize};
pub use rust_backend::RustBackend;
