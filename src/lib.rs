//! # covercrop
//!
//! Fetch a remote image, cover-fit it to a target size, and emit JPEG.
//!
//! # Architecture: Fetch → Fit → Wrap
//!
//! ```text
//! 1. Fetch     URI        →  bytes           (HTTP GET, S3-style URLs recognized)
//! 2. Fit       bytes      →  JPEG bytes      (resolve → scale → center-crop → encode)
//! 3. Wrap      JPEG bytes →  file / envelope (raw output or base64 JSON response)
//! ```
//!
//! The interesting part is stage 2, the **cover fit**: scale the source so
//! it fully covers the target box in both dimensions (never letterboxing),
//! then crop the overflow symmetrically. Target dimensions may each be a
//! concrete pixel count or `auto`, in which case they are derived from the
//! source aspect ratio; with both `auto` the source dimensions pass through
//! unchanged.
//!
//! Every invocation is synchronous, stateless, and independent — no shared
//! mutable state, no retries, no partial output. Either a correctly-sized
//! crop comes back or an error does.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Cover-fit geometry, backend trait, pure-Rust pixel work |
//! | [`fetch`] | Source resolution: generic HTTP vs S3 virtual-hosted URLs |
//! | [`envelope`] | Proxy-style JSON response with base64 image body |
//! | [`config`] | Fetch timeout, user agent, and JPEG quality settings |
//! | [`error`] | The [`CoverError`](error::CoverError) taxonomy |
//!
//! # Design Decisions
//!
//! ## Plan/Execute Split
//!
//! [`imaging::plan_cover`] computes the whole geometry — resolved target,
//! scaled dimensions, crop box — as data before any pixel is touched. The
//! backend only executes a [`CoverParams`](imaging::CoverParams). This keeps
//! the geometry exhaustively unit-testable and lets tests run against a
//! recording mock instead of a real decoder.
//!
//! ## Exact-Size Crops
//!
//! The center-crop box carries its own width and height; the far edges are
//! derived by addition from the floored near edges. Independently flooring
//! both edges can lose a pixel when centering on odd dimensions, so the
//! backend re-checks the cropped output against the planned size.
//!
//! ## Pure-Rust Imaging (No ImageMagick)
//!
//! Decode, resize (Lanczos3), crop, and JPEG encode all come from the
//! `image` crate. No system dependencies: the binary is fully
//! self-contained.

pub mod config;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod imaging;

#[cfg(test)]
pub(crate) mod test_helpers;
