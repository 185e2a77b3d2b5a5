use crate::foundation::core::{PixelSize, Vec2};
use crate::foundation::error::{CurveBlurError, CurveBlurResult};
use crate::foundation::math::div_round_u64;
use crate::raster::buffer::RasterImage;

/// Integer pixel offset of each accumulation sample.
///
/// Sample `i` of `K` sits at the signed fraction `f = i / (K - 1) - 0.5` along its own tangent,
/// and is shifted by `round(-dir * radius * f)`. The tangent is negated so the blur trails
/// behind the direction of travel. A single sample is unshifted.
pub fn sample_offsets(directions: &[Vec2], blur_radius: u32) -> Vec<(i32, i32)> {
    let k = directions.len();
    let r = f64::from(blur_radius);
    let limit = i64::from(blur_radius);
    directions
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let f = if k > 1 {
                i as f64 / (k - 1) as f64 - 0.5
            } else {
                0.0
            };
            let shift = |c: f64| ((-c * r * f).round() as i64).clamp(-limit, limit) as i32;
            (shift(d.x), shift(d.y))
        })
        .collect()
}

/// Accumulate one shifted window of `extended` per direction into an `out` sized image.
///
/// `extended` must be the source padded by `blur_radius` on every side (see
/// [`extend_edges`](crate::extend_edges)). Each sample reads the `out`-sized window whose origin is
/// `(blur_radius + off_x, blur_radius + off_y)`, and every sample carries weight exactly `1/K`.
/// The result is the rounded per-channel mean of the premultiplied samples, i.e. the normalized
/// source-over stack of `K` equally weighted layers.
#[tracing::instrument(
    level = "debug",
    skip(extended, directions),
    fields(samples = directions.len(), w = out.width, h = out.height)
)]
pub fn composite_motion_blur(
    extended: &RasterImage,
    directions: &[Vec2],
    blur_radius: u32,
    out: PixelSize,
) -> CurveBlurResult<RasterImage> {
    if directions.is_empty() {
        return Err(CurveBlurError::validation(
            "motion blur needs at least one direction sample",
        ));
    }
    let pad = u64::from(blur_radius) * 2;
    if u64::from(extended.width()) < u64::from(out.width) + pad
        || u64::from(extended.height()) < u64::from(out.height) + pad
    {
        return Err(CurveBlurError::validation(format!(
            "extended image {}x{} is too small for {}x{} output at radius {blur_radius}",
            extended.width(),
            extended.height(),
            out.width,
            out.height
        )));
    }
    if out.is_empty() {
        return RasterImage::transparent(out.width, out.height);
    }

    let row_bytes = (out.width as usize) * 4;
    let mut acc = vec![0u64; out.rgba8_len()?];
    let offsets = sample_offsets(directions, blur_radius);
    for &(dx, dy) in &offsets {
        let ox = (i64::from(blur_radius) + i64::from(dx)) as usize;
        let oy = (i64::from(blur_radius) + i64::from(dy)) as u32;
        for (y, acc_row) in acc.chunks_exact_mut(row_bytes).enumerate() {
            let row = extended.row(oy + y as u32);
            let window = &row[ox * 4..ox * 4 + row_bytes];
            for (a, &s) in acc_row.iter_mut().zip(window) {
                *a += u64::from(s);
            }
        }
    }

    let k = offsets.len() as u64;
    let data = acc.into_iter().map(|s| div_round_u64(s, k)).collect();
    RasterImage::from_premul_rgba8(out.width, out.height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/motion_blur.rs"]
mod tests;
