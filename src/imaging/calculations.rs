//! Pure calculation functions for cover-fit geometry.
//!
//! All functions here are pure and testable without any I/O or images.
//! Validation (rejecting zero dimensions) lives in
//! [`operations::plan_cover`](super::operations::plan_cover); these
//! functions just compute.

use super::params::Dimension;

/// Resolve a requested target size against the source dimensions.
///
/// An [`Auto`](Dimension::Auto) dimension is derived from the other,
/// concrete dimension and the source aspect ratio. If both are Auto the
/// source dimensions pass through unchanged (identity fit).
///
/// Rounding is round-half-away-from-zero (`f64::round`). A resolved value
/// can be 0 for degenerate ratios; callers reject that at planning time.
///
/// # Examples
/// ```
/// # use covercrop::imaging::{resolve_target, Dimension};
/// // 800x600 source, height pinned to 300 → width derived as 400
/// assert_eq!(
///     resolve_target((800, 600), Dimension::Auto, Dimension::Concrete(300)),
///     (400, 300)
/// );
/// ```
pub fn resolve_target(source: (u32, u32), width: Dimension, height: Dimension) -> (u32, u32) {
    let (src_w, src_h) = source;

    match (width, height) {
        (Dimension::Concrete(w), Dimension::Concrete(h)) => (w, h),
        (Dimension::Auto, Dimension::Concrete(h)) => {
            let height_ratio = h as f64 / src_h as f64;
            ((src_w as f64 * height_ratio).round() as u32, h)
        }
        (Dimension::Concrete(w), Dimension::Auto) => {
            let width_ratio = w as f64 / src_w as f64;
            (w, (src_h as f64 * width_ratio).round() as u32)
        }
        (Dimension::Auto, Dimension::Auto) => (src_w, src_h),
    }
}

/// Calculate the intermediate scale dimensions for a cover fit.
///
/// Orientation is decided by comparing source width vs height, with the
/// ratio `r = max / min`:
/// - landscape or square source: output height matches the target,
///   width is `round(r * target_height)`
/// - portrait source: output width matches the target, height is
///   `round(r * target_width)`
///
/// When the target's aspect is more extreme than the source's in the same
/// orientation, the primary branch leaves one edge short of the target box;
/// in that case the scale is redone on the short edge (still keeping the
/// source aspect) so the result covers the target in both dimensions and
/// never letterboxes.
pub fn cover_scale_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let ratio = src_w.max(src_h) as f64 / src_w.min(src_h) as f64;

    if src_w >= src_h {
        let scaled_w = (ratio * tgt_h as f64).round() as u32;
        if scaled_w < tgt_w {
            // Target is wider than the source aspect allows at this height.
            (tgt_w, (tgt_w as f64 / ratio).round().max(tgt_h as f64) as u32)
        } else {
            (scaled_w, tgt_h)
        }
    } else {
        let scaled_h = (ratio * tgt_w as f64).round() as u32;
        if scaled_h < tgt_h {
            // Target is taller than the source aspect allows at this width.
            ((tgt_h as f64 / ratio).round().max(tgt_w as f64) as u32, tgt_h)
        } else {
            (tgt_w, scaled_h)
        }
    }
}

/// A crop region on a scaled image.
///
/// The far edges are `left + width` and `top + height` — derived by
/// addition, never floored independently, so the cropped output is exactly
/// `width` x `height` regardless of parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Calculate the symmetric center crop of `target` out of `scaled`.
///
/// `floor(scaled/2 - target/2)` equals `(scaled - target) / 2` in integer
/// arithmetic, which is what we use. Requires `scaled >= target` in both
/// dimensions — guaranteed by [`cover_scale_dimensions`].
pub fn center_crop_box(scaled: (u32, u32), target: (u32, u32)) -> CropBox {
    let (scaled_w, scaled_h) = scaled;
    let (tgt_w, tgt_h) = target;

    CropBox {
        left: (scaled_w - tgt_w) / 2,
        top: (scaled_h - tgt_h) / 2,
        width: tgt_w,
        height: tgt_h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // resolve_target tests
    // =========================================================================

    #[test]
    fn resolve_both_concrete_passes_through() {
        assert_eq!(
            resolve_target((1200, 800), Dimension::Concrete(120), Dimension::Concrete(300)),
            (120, 300)
        );
    }

    #[test]
    fn resolve_auto_width_from_height() {
        // 800x600 with height 300 → width = round(800 * 300/600) = 400
        assert_eq!(
            resolve_target((800, 600), Dimension::Auto, Dimension::Concrete(300)),
            (400, 300)
        );
    }

    #[test]
    fn resolve_auto_height_from_width() {
        // 800x600 with width 400 → height = round(600 * 400/800) = 300
        assert_eq!(
            resolve_target((800, 600), Dimension::Concrete(400), Dimension::Auto),
            (400, 300)
        );
    }

    #[test]
    fn resolve_both_auto_is_identity() {
        assert_eq!(
            resolve_target((1234, 567), Dimension::Auto, Dimension::Auto),
            (1234, 567)
        );
    }

    #[test]
    fn resolve_rounds_half_away_from_zero() {
        // 3x2 with height 1 → width = round(1.5) = 2
        assert_eq!(
            resolve_target((3, 2), Dimension::Auto, Dimension::Concrete(1)),
            (2, 1)
        );
    }

    #[test]
    fn resolve_square_source_keeps_square() {
        assert_eq!(
            resolve_target((600, 600), Dimension::Auto, Dimension::Concrete(200)),
            (200, 200)
        );
    }

    #[test]
    fn resolve_can_round_to_zero() {
        // Degenerate ratio: 1x1000 with height 1 → width rounds to 0.
        // plan_cover rejects this; the pure function just reports it.
        assert_eq!(
            resolve_target((1, 1000), Dimension::Auto, Dimension::Concrete(1)),
            (0, 1)
        );
    }

    // =========================================================================
    // cover_scale_dimensions tests
    // =========================================================================

    #[test]
    fn scale_landscape_matches_height() {
        // 1200x800 (r=1.5) → 120x300 target: height pinned, width = 450
        assert_eq!(cover_scale_dimensions((1200, 800), (120, 300)), (450, 300));
    }

    #[test]
    fn scale_portrait_matches_width() {
        // 800x1200 (r=1.5) → 300x120 target: width pinned, height = 450
        assert_eq!(cover_scale_dimensions((800, 1200), (300, 120)), (300, 450));
    }

    #[test]
    fn scale_square_source() {
        // 600x600 (r=1) → 200x200: both edges land exactly on target
        assert_eq!(cover_scale_dimensions((600, 600), (200, 200)), (200, 200));
    }

    #[test]
    fn scale_landscape_wider_target_rescales_on_width() {
        // 1200x800 (r=1.5) → 500x300: primary branch would give 450x300,
        // leaving width short; rescale on width → 500x333
        assert_eq!(cover_scale_dimensions((1200, 800), (500, 300)), (500, 333));
    }

    #[test]
    fn scale_portrait_taller_target_rescales_on_height() {
        // 800x1200 (r=1.5) → 300x500: primary branch would give 300x450,
        // leaving height short; rescale on height → 333x500
        assert_eq!(cover_scale_dimensions((800, 1200), (300, 500)), (333, 500));
    }

    #[test]
    fn scale_always_covers_target_box() {
        let cases = [
            ((1200, 800), (120, 300)),
            ((1200, 800), (500, 300)),
            ((800, 1200), (300, 500)),
            ((601, 599), (37, 411)),
            ((3, 4000), (17, 17)),
        ];
        for (source, target) in cases {
            let (w, h) = cover_scale_dimensions(source, target);
            assert!(
                w >= target.0 && h >= target.1,
                "{source:?} → {target:?} scaled to ({w}, {h}), does not cover"
            );
        }
    }

    // =========================================================================
    // center_crop_box tests
    // =========================================================================

    #[test]
    fn crop_box_worked_example() {
        // scaled 450x300, target 120x300 → left 165, top 0
        let cb = center_crop_box((450, 300), (120, 300));
        assert_eq!(
            cb,
            CropBox {
                left: 165,
                top: 0,
                width: 120,
                height: 300
            }
        );
    }

    #[test]
    fn crop_box_full_image_when_exact() {
        let cb = center_crop_box((200, 200), (200, 200));
        assert_eq!(cb.left, 0);
        assert_eq!(cb.top, 0);
        assert_eq!((cb.width, cb.height), (200, 200));
    }

    #[test]
    fn crop_box_odd_parity_keeps_exact_size() {
        // 451x301 scaled, 120x300 target: centering floors, size stays exact
        let cb = center_crop_box((451, 301), (120, 300));
        assert_eq!(cb.left, 165);
        assert_eq!(cb.top, 0);
        assert_eq!((cb.width, cb.height), (120, 300));
        assert!(cb.left + cb.width <= 451);
        assert!(cb.top + cb.height <= 301);
    }

    #[test]
    fn crop_box_is_centered() {
        let cb = center_crop_box((1000, 600), (400, 200));
        assert_eq!(cb.left, 300);
        assert_eq!(cb.top, 200);
    }
}
