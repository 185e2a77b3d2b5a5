use crate::foundation::core::PixelSize;
use crate::foundation::error::{CurveBlurError, CurveBlurResult};
use crate::raster::buffer::RasterImage;

/// Pad `src` by `radius` pixels on every side, replicating its outermost rows and columns.
///
/// The output is `(w + 2r) x (h + 2r)`. The center is an exact copy offset by `(r, r)`; the side
/// strips stretch the nearest edge row or column and the corner squares take the corner pixel.
/// Any sample within `radius` of the original border therefore continues the edge instead of
/// reading transparency.
pub fn extend_edges(src: &RasterImage, radius: u32) -> CurveBlurResult<RasterImage> {
    if src.is_empty() {
        return Err(CurveBlurError::validation("cannot extend an empty image"));
    }
    if radius == 0 {
        return Ok(src.clone());
    }

    let r = radius;
    let out_size = PixelSize::new(
        src.width()
            .checked_add(r.saturating_mul(2))
            .ok_or_else(|| CurveBlurError::evaluation("extended width overflow"))?,
        src.height()
            .checked_add(r.saturating_mul(2))
            .ok_or_else(|| CurveBlurError::evaluation("extended height overflow"))?,
    );
    let mut data = Vec::with_capacity(out_size.rgba8_len()?);

    let pad = r as usize;
    for oy in 0..out_size.height {
        let sy = oy.saturating_sub(r).min(src.height() - 1);
        let row = src.row(sy);
        let first = &row[..4];
        let last = &row[row.len() - 4..];

        for _ in 0..pad {
            data.extend_from_slice(first);
        }
        data.extend_from_slice(row);
        for _ in 0..pad {
            data.extend_from_slice(last);
        }
    }

    RasterImage::from_premul_rgba8(out_size.width, out_size.height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/extend.rs"]
mod tests;
