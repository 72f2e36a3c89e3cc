//! Parameter types for cover operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which plans the geometry) and the [`backend`](super::backend) (which
//! does the actual pixel work). This separation allows swapping backends
//! (e.g. for testing with a mock) without changing operation logic.

use super::calculations::CropBox;

/// A requested output dimension: a concrete pixel count or "derive from the
/// other dimension and the source aspect ratio".
///
/// An explicit tagged variant rather than an optional integer, so "was this
/// a number or the `auto` token" is settled once, at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Concrete(u32),
    Auto,
}

impl Dimension {
    /// Parse one token of a size string.
    ///
    /// All-ASCII-digit tokens become [`Concrete`](Self::Concrete); anything
    /// else — the literal `auto`, an empty token, garbage — falls back to
    /// [`Auto`](Self::Auto). Zero parses as `Concrete(0)` and is rejected
    /// later at planning time, keeping parsing permissive and validation
    /// central.
    pub fn parse_token(token: &str) -> Self {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            match token.parse::<u32>() {
                Ok(n) => Dimension::Concrete(n),
                Err(_) => Dimension::Auto, // overflows u32
            }
        } else {
            Dimension::Auto
        }
    }
}

/// A requested target size, each dimension independently concrete or Auto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl TargetSize {
    /// Both dimensions Auto — the identity fit.
    pub const AUTO: Self = Self {
        width: Dimension::Auto,
        height: Dimension::Auto,
    };

    /// Parse a `{width|"auto"}x{height|"auto"}` size string.
    ///
    /// A string without an `x` separator is malformed and yields
    /// [`TargetSize::AUTO`] (no target size specified). With a separator,
    /// each token falls back to Auto independently, so `"abcxdef"` also
    /// resolves to both-Auto.
    pub fn parse(s: &str) -> Self {
        match s.split_once('x') {
            Some((w, h)) => Self {
                width: Dimension::parse_token(w),
                height: Dimension::parse_token(h),
            },
            None => Self::AUTO,
        }
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::AUTO
    }
}

/// Quality setting for JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Full specification of one cover operation: scale to these dimensions,
/// crop this box, encode at this quality. Produced by
/// [`plan_cover`](super::operations::plan_cover), consumed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverParams {
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub crop: CropBox,
    pub quality: Quality,
}
