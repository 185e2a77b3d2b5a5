use crate::foundation::core::Point;

/// Resample an open polyline into `count` points spaced evenly by polyline arc length, smoothed
/// with a uniform Catmull-Rom spline through every input point.
///
/// Edge cases:
/// - two input points are returned as-is (a straight segment), whatever `count` is
/// - fewer than two points, or a path of zero total length, come back unchanged
/// - `count == 0` yields no points and `count == 1` yields only the start point
///
/// End segments borrow a virtual neighbor mirrored through the nearest interior point
/// (`2 * near - far`), so the curve leaves its endpoints smoothly.
pub fn sample_curve(points: &[Point], count: usize) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let seg_lens: Vec<f64> = points.windows(2).map(|w| w[0].distance(w[1])).collect();
    let total: f64 = seg_lens.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return points.to_vec();
    }

    match count {
        0 => return Vec::new(),
        1 => return vec![points[0]],
        _ => {}
    }

    let last_seg = seg_lens.len() - 1;
    let mut out = Vec::with_capacity(count);
    for s in 0..count {
        let target = (s as f64 / (count - 1) as f64) * total;

        let mut seg = last_seg;
        let mut start = 0.0;
        for (i, &len) in seg_lens.iter().enumerate() {
            if start + len >= target || i == last_seg {
                seg = i;
                break;
            }
            start += len;
        }

        let len = seg_lens[seg];
        let u = if len > 0.0 {
            ((target - start) / len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let [p0, p1, p2, p3] = segment_controls(points, seg);
        out.push(catmull_rom(p0, p1, p2, p3, u));
    }
    out
}

/// Control points for segment `seg` (between `points[seg]` and `points[seg + 1]`).
fn segment_controls(points: &[Point], seg: usize) -> [Point; 4] {
    let p1 = points[seg];
    let p2 = points[seg + 1];
    let p0 = if seg == 0 {
        mirror(p1, p2)
    } else {
        points[seg - 1]
    };
    let p3 = points.get(seg + 2).copied().unwrap_or_else(|| mirror(p2, p1));
    [p0, p1, p2, p3]
}

/// Reflect `far` through `near`.
fn mirror(near: Point, far: Point) -> Point {
    Point::new(2.0 * near.x - far.x, 2.0 * near.y - far.y)
}

/// Uniform Catmull-Rom (tension 0.5) evaluated per axis.
pub(crate) fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, u: f64) -> Point {
    let axis = |a: f64, b: f64, c: f64, d: f64| {
        let u2 = u * u;
        let u3 = u2 * u;
        0.5 * (2.0 * b
            + (-a + c) * u
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * u2
            + (-a + 3.0 * b - 3.0 * c + d) * u3)
    };
    Point::new(
        axis(p0.x, p1.x, p2.x, p3.x),
        axis(p0.y, p1.y, p2.y, p3.y),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sampler.rs"]
mod tests;
