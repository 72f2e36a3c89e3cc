//! High-level cover operations.
//!
//! These functions combine calculations with backend execution: planning
//! validates the inputs and computes the geometry, execution hands the
//! resulting [`CoverParams`] to a backend.

use super::backend::{Dimensions, ImageBackend};
use super::calculations::{center_crop_box, cover_scale_dimensions, resolve_target};
use super::params::{CoverParams, Quality, TargetSize};
use crate::error::CoverError;

/// Result of a cover operation: encoded JPEG plus its dimensions.
#[derive(Debug, Clone)]
pub struct CoverOutput {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Plan a cover operation without executing it.
///
/// Resolves Auto dimensions against the source, computes the intermediate
/// scale and the center-crop box. Fails with
/// [`InvalidDimension`](CoverError::InvalidDimension) when the source or
/// any resolved target dimension is zero.
pub fn plan_cover(
    source: Dimensions,
    size: &TargetSize,
    quality: Quality,
) -> Result<CoverParams, CoverError> {
    if source.width == 0 || source.height == 0 {
        return Err(CoverError::InvalidDimension(format!(
            "source image is {}x{}",
            source.width, source.height
        )));
    }

    let target = resolve_target((source.width, source.height), size.width, size.height);
    if target.0 == 0 || target.1 == 0 {
        return Err(CoverError::InvalidDimension(format!(
            "resolved target is {}x{}",
            target.0, target.1
        )));
    }

    let (scaled_width, scaled_height) =
        cover_scale_dimensions((source.width, source.height), target);
    let crop = center_crop_box((scaled_width, scaled_height), target);

    Ok(CoverParams {
        scaled_width,
        scaled_height,
        crop,
        quality,
    })
}

/// Fit an image to the requested size with the cover policy.
///
/// Identifies the source dimensions, plans the geometry, and executes on
/// the backend. Stateless: every call operates on its own data, so
/// independent call sites need no coordination.
pub fn cover(
    backend: &impl ImageBackend,
    bytes: &[u8],
    size: &TargetSize,
    quality: Quality,
) -> Result<CoverOutput, CoverError> {
    let source = backend.identify(bytes)?;
    let params = plan_cover(source, size, quality)?;
    let jpeg = backend.cover(bytes, &params)?;

    Ok(CoverOutput {
        jpeg,
        width: params.crop.width,
        height: params.crop.height,
    })
}
