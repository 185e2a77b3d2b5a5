use crate::foundation::core::{Affine, Point};
use crate::foundation::error::{CurveBlurError, CurveBlurResult};

/// Default logical frame edge length.
pub const DEFAULT_FRAME_SIZE: f64 = 200.0;

/// Inserting closer than this (in frame units) to an existing view point is declined.
pub const INSERT_PROXIMITY: f64 = 10.0;

/// Editable motion path in a square logical frame of edge `frame_size`.
///
/// The canonical points are the only mutable state. View points are always derived from them by
/// rotating `rotation_deg` degrees about the frame center, and are recomputed after every edit.
/// Edits made in view space are inverse-rotated before being written back.
#[derive(Clone, Debug, PartialEq)]
pub struct PathModel {
    frame_size: f64,
    canonical: Vec<Point>,
    rotation_deg: f64,
    view: Vec<Point>,
}

impl Default for PathModel {
    fn default() -> Self {
        Self::from_parts_unchecked(
            DEFAULT_FRAME_SIZE,
            vec![
                Point::new(40.0, 160.0),
                Point::new(100.0, 40.0),
                Point::new(160.0, 160.0),
            ],
            0.0,
        )
    }
}

impl PathModel {
    /// Create a path from canonical points.
    ///
    /// Requires a finite, positive frame size and at least two finite points. Points are clamped
    /// into `[0, frame_size]`.
    pub fn new(frame_size: f64, points: Vec<Point>) -> CurveBlurResult<Self> {
        if !frame_size.is_finite() || frame_size <= 0.0 {
            return Err(CurveBlurError::validation("path frame size must be > 0"));
        }
        if points.len() < 2 {
            return Err(CurveBlurError::validation(
                "path requires at least two control points",
            ));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(CurveBlurError::validation("path points must be finite"));
        }
        let points = points
            .into_iter()
            .map(|p| clamp_to_frame(p, frame_size))
            .collect();
        Ok(Self::from_parts_unchecked(frame_size, points, 0.0))
    }

    fn from_parts_unchecked(frame_size: f64, canonical: Vec<Point>, rotation_deg: f64) -> Self {
        let mut model = Self {
            frame_size,
            canonical,
            rotation_deg,
            view: Vec::new(),
        };
        model.refresh_view();
        model
    }

    /// Logical frame edge length.
    pub fn frame_size(&self) -> f64 {
        self.frame_size
    }

    /// Frame center, the pivot for rotation.
    pub fn center(&self) -> Point {
        Point::new(self.frame_size / 2.0, self.frame_size / 2.0)
    }

    /// Current rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation_deg
    }

    /// Points as authored, independent of rotation.
    pub fn canonical_points(&self) -> &[Point] {
        &self.canonical
    }

    /// Points after applying the current rotation.
    pub fn view_points(&self) -> &[Point] {
        &self.view
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// Return `true` when the path holds no points. Constructed paths always hold two or more.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Canonical-to-view transform for the current rotation.
    pub fn view_transform(&self) -> Affine {
        Affine::rotate_about(self.rotation_deg.to_radians(), self.center())
    }

    /// Map a view-space position back into canonical space.
    pub fn to_canonical(&self, view_pos: Point) -> Point {
        Affine::rotate_about(-self.rotation_deg.to_radians(), self.center()) * view_pos
    }

    /// Set the rotation. Canonical points are untouched.
    pub fn set_rotation(&mut self, rotation_deg: f64) {
        if !rotation_deg.is_finite() {
            tracing::debug!(rotation_deg, "ignoring non-finite rotation");
            return;
        }
        self.rotation_deg = rotation_deg;
        self.refresh_view();
    }

    /// Insert a point given in view space and return its index.
    ///
    /// Declined (`None`) when `view_pos` lies within [`INSERT_PROXIMITY`] of an existing view
    /// point. Otherwise the point goes right after the first endpoint of the segment nearest to
    /// it (lowest index on ties).
    ///
    /// Like [`move_point`](Self::move_point), the inverse-rotated position is clamped into
    /// `[0, frame_size]`. In a rotated view a click near a frame corner can map outside the frame,
    /// in which case the stored point lands on the frame edge instead of under the pointer.
    pub fn insert_point(&mut self, view_pos: Point) -> Option<usize> {
        if !view_pos.is_finite() {
            return None;
        }
        if self
            .view
            .iter()
            .any(|p| p.distance(view_pos) < INSERT_PROXIMITY)
        {
            tracing::debug!(x = view_pos.x, y = view_pos.y, "insert declined: too close");
            return None;
        }

        let mut best_seg = 0usize;
        let mut best_dist = f64::INFINITY;
        for (i, w) in self.view.windows(2).enumerate() {
            let d = segment_distance(view_pos, w[0], w[1]);
            if d < best_dist {
                best_dist = d;
                best_seg = i;
            }
        }

        let canonical = clamp_to_frame(self.to_canonical(view_pos), self.frame_size);
        let index = best_seg + 1;
        self.canonical.insert(index, canonical);
        self.refresh_view();
        Some(index)
    }

    /// Remove the point at `index`. Declined when it would leave fewer than two points or the
    /// index is out of range.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if self.canonical.len() <= 2 || index >= self.canonical.len() {
            tracing::debug!(index, len = self.canonical.len(), "remove declined");
            return false;
        }
        self.canonical.remove(index);
        self.refresh_view();
        true
    }

    /// Move the point at `index` to a view-space position, clamped into the frame.
    ///
    /// Returns `false` for an out-of-range index or a non-finite position.
    pub fn move_point(&mut self, index: usize, view_pos: Point) -> bool {
        if index >= self.canonical.len() || !view_pos.is_finite() {
            return false;
        }
        self.canonical[index] = clamp_to_frame(self.to_canonical(view_pos), self.frame_size);
        self.refresh_view();
        true
    }

    /// Index of the first view point whose per-axis distance to `view_pos` is within `radius`.
    pub fn find_nearest(&self, view_pos: Point, radius: f64) -> Option<usize> {
        self.view
            .iter()
            .position(|p| (p.x - view_pos.x).abs() <= radius && (p.y - view_pos.y).abs() <= radius)
    }

    fn refresh_view(&mut self) {
        let xf = self.view_transform();
        self.view.clear();
        self.view.extend(self.canonical.iter().map(|&p| xf * p));
    }
}

fn clamp_to_frame(p: Point, frame_size: f64) -> Point {
    Point::new(p.x.clamp(0.0, frame_size), p.y.clamp(0.0, frame_size))
}

/// Distance from `p` to the segment `a..b` (perpendicular when the foot lies on the segment).
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/path_model.rs"]
mod tests;
