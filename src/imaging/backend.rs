//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and cover. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, everything
//! statically linked into the binary.

use super::params::CoverParams;
use crate::error::CoverError;

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Both operations work on encoded image bytes, so the rest of the codebase
/// never holds a decoded bitmap. Backends are `Sync` and stateless between
/// calls: independent call sites may share one instance with no
/// coordination.
pub trait ImageBackend: Sync {
    /// Probe the dimensions of encoded image bytes without a full decode.
    fn identify(&self, bytes: &[u8]) -> Result<Dimensions, CoverError>;

    /// Execute a cover operation: decode, resize to the scaled dimensions,
    /// crop the planned box, encode as JPEG. Returns the encoded bytes.
    fn cover(&self, bytes: &[u8], params: &CoverParams) -> Result<Vec<u8>, CoverError>;
}
