use crate::curve::sampler::sample_curve;
use crate::foundation::core::{Point, Vec2};

/// Unit tangents along the smoothed path, one per blur accumulation sample.
///
/// Always returns exactly `count` vectors. The final tangent is repeated so the last two entries
/// match. Paths with fewer than two points fall back to `(1, 0)`. A zero-length step yields
/// `(0, 0)` rather than dividing by zero.
pub fn directions(points: &[Point], count: usize) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    if points.len() < 2 {
        return vec![Vec2::new(1.0, 0.0); count];
    }

    let sampled = sample_curve(points, count.max(2));
    let mut out: Vec<Vec2> = sampled.windows(2).map(|w| unit(w[1] - w[0])).collect();

    // Short samples come from the two-point and zero-length shortcuts; stretch the last tangent.
    let last = out.last().copied().unwrap_or(Vec2::new(1.0, 0.0));
    out.resize(count, last);
    if count >= 2 {
        out[count - 1] = out[count - 2];
    }
    out
}

fn unit(v: Vec2) -> Vec2 {
    let len = v.hypot();
    let len = if len == 0.0 { 1.0 } else { len };
    v / len
}

#[cfg(test)]
#[path = "../../tests/unit/curve/direction.rs"]
mod tests;
