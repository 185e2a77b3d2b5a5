use crate::editor::crop::CropRegion;
use crate::effects::composite::{PremulRgba8, over_solid_in_place};
use crate::foundation::error::CurveBlurResult;
use crate::raster::buffer::RasterImage;

/// Default shade for pixels outside the crop: black at half opacity.
pub const CROP_SHADE: PremulRgba8 = [0, 0, 0, 255];
/// Opacity of [`CROP_SHADE`].
pub const CROP_SHADE_OPACITY: f32 = 0.5;

/// Darken every pixel of a preview that falls outside `crop`.
///
/// Presentation only: exports are cropped, never shaded.
pub fn shade_outside_crop(
    image: &mut RasterImage,
    crop: CropRegion,
    shade: PremulRgba8,
    opacity: f32,
) -> CurveBlurResult<()> {
    if image.is_empty() {
        return Ok(());
    }
    let (w, h) = (image.width(), image.height());
    let edge = |v: f64, max: u32| v.round().clamp(0.0, f64::from(max)) as usize;
    let (x0, x1) = (edge(crop.left, w), edge(crop.right, w));
    let (y0, y1) = (edge(crop.top, h), edge(crop.bottom, h));
    let stride = image.stride();

    for (y, row) in image.data_mut().chunks_exact_mut(stride).enumerate() {
        if y < y0 || y >= y1 {
            over_solid_in_place(row, shade, opacity)?;
            continue;
        }
        let (left, rest) = row.split_at_mut(x0.min(x1) * 4);
        over_solid_in_place(left, shade, opacity)?;
        let right = &mut rest[(x1.saturating_sub(x0)) * 4..];
        over_solid_in_place(right, shade, opacity)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
