use crate::foundation::error::{CurveBlurError, CurveBlurResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Create a size from `width x height`.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> CurveBlurResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| CurveBlurError::evaluation("rgba8 buffer size overflow"))
    }

    /// Scale both dimensions, rounding each and never dropping below `1x1`.
    pub fn scaled(self, scale: f64) -> Self {
        fn scale_dim(v: u32, scale: f64) -> u32 {
            let s = (f64::from(v) * scale).round();
            if s.is_finite() && s >= 1.0 {
                s.min(f64::from(u32::MAX)) as u32
            } else {
                1
            }
        }

        Self {
            width: scale_dim(self.width, scale),
            height: scale_dim(self.height, scale),
        }
    }

    /// Fit inside `max_width` preserving aspect ratio. Sizes already narrow enough are unchanged.
    pub fn fit_width(self, max_width: u32) -> Self {
        if self.width <= max_width || self.width == 0 {
            return self;
        }
        let ratio = f64::from(max_width.max(1)) / f64::from(self.width);
        let height = (f64::from(self.height) * ratio).round().max(1.0) as u32;
        Self {
            width: max_width.max(1),
            height,
        }
    }

    /// Full-frame rectangle `(0, 0, width, height)`.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
