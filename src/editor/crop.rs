use crate::foundation::core::{PixelSize, Rect};

/// Default minimum crop edge length in display pixels.
pub const DEFAULT_MIN_CROP_SIZE: f64 = 10.0;

/// One draggable side of the crop rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropEdge {
    /// The `left` edge.
    Left,
    /// The `top` edge.
    Top,
    /// The `right` edge.
    Right,
    /// The `bottom` edge.
    Bottom,
}

/// Axis-aligned crop rectangle in display-space pixels.
///
/// Kept inside `[0, display]` on both axes and never narrower than the minimum crop size (or the
/// display itself, when that is smaller).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropRegion {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl CropRegion {
    /// Full-frame crop for a display of `size`.
    pub fn full(size: PixelSize) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: f64::from(size.width),
            bottom: f64::from(size.height),
        }
    }

    /// Crop width.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Crop height.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// The crop as a `kurbo` rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    /// The crop scaled by `scale` (for export resolutions).
    pub fn scaled(&self, scale: f64) -> Rect {
        Rect::new(
            self.left * scale,
            self.top * scale,
            self.right * scale,
            self.bottom * scale,
        )
    }

    /// Return `true` when the rectangle already satisfies the bounds for `display`.
    pub fn is_valid_for(&self, display: PixelSize, min_size: f64) -> bool {
        *self == self.clamped(display, min_size)
    }

    /// Force the rectangle into bounds for `display`, preserving as much of it as possible.
    pub fn clamped(&self, display: PixelSize, min_size: f64) -> Self {
        let (dw, dh) = (f64::from(display.width), f64::from(display.height));
        let (min_w, min_h) = (min_size.max(0.0).min(dw), min_size.max(0.0).min(dh));

        let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        let left = finite_or(self.left, 0.0).clamp(0.0, dw - min_w);
        let top = finite_or(self.top, 0.0).clamp(0.0, dh - min_h);
        let right = finite_or(self.right, dw).max(left + min_w).min(dw);
        let bottom = finite_or(self.bottom, dh).max(top + min_h).min(dh);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Move one edge to `value` (an x coordinate for left/right, y for top/bottom), clamped so the
    /// rectangle stays inside `display` and at least `min_size` across.
    pub fn drag_edge(&mut self, edge: CropEdge, value: f64, display: PixelSize, min_size: f64) {
        if !value.is_finite() {
            return;
        }
        let (dw, dh) = (f64::from(display.width), f64::from(display.height));
        let (min_w, min_h) = (min_size.max(0.0).min(dw), min_size.max(0.0).min(dh));
        match edge {
            CropEdge::Left => self.left = value.clamp(0.0, (self.right - min_w).max(0.0)),
            CropEdge::Right => self.right = value.clamp((self.left + min_w).min(dw), dw),
            CropEdge::Top => self.top = value.clamp(0.0, (self.bottom - min_h).max(0.0)),
            CropEdge::Bottom => self.bottom = value.clamp((self.top + min_h).min(dh), dh),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/crop.rs"]
mod tests;
