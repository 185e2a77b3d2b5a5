use crate::editor::state::EditorState;
use crate::effects::motion_blur::composite_motion_blur;
use crate::foundation::core::{PixelSize, Rect, Vec2};
use crate::foundation::error::{CurveBlurError, CurveBlurResult};
use crate::raster::buffer::RasterImage;
use crate::raster::extend::extend_edges;

/// Fixed export resolutions relative to the display size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportTier {
    /// Display size (scale 1.0).
    Full,
    /// Half the display size (scale 0.5).
    Half,
    /// Quarter of the display size (scale 0.25).
    Quarter,
}

impl ExportTier {
    /// Scale factor relative to the display size.
    pub fn scale(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Half => 0.5,
            Self::Quarter => 0.25,
        }
    }
}

/// Resolved geometry of one export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportPlan {
    /// Scale relative to the display size.
    pub scale: f64,
    /// Size the original is resampled to before blurring.
    pub size: PixelSize,
    /// Blur radius at export resolution, `ceil(radius * scale)`.
    pub blur_radius: u32,
    /// Crop rectangle in export pixels (before per-edge rounding).
    pub crop: Rect,
}

/// Blur radius at a given export scale.
pub fn export_blur_radius(blur_radius: u32, scale: f64) -> u32 {
    let r = (f64::from(blur_radius) * scale).ceil();
    if r.is_finite() && r > 0.0 {
        r.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Work out export geometry. `None` when no source is loaded.
pub fn plan_export(state: &EditorState, scale: f64) -> CurveBlurResult<Option<ExportPlan>> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(CurveBlurError::validation("export scale must be finite and > 0"));
    }
    let Some(display) = state.display_size() else {
        return Ok(None);
    };
    Ok(Some(ExportPlan {
        scale,
        size: display.scaled(scale),
        blur_radius: export_blur_radius(state.params().blur_radius, scale),
        crop: state.crop().scaled(scale),
    }))
}

/// Extend `image` by `blur_radius` and composite one shifted copy per direction.
pub fn blur_image(
    image: &RasterImage,
    directions: &[Vec2],
    blur_radius: u32,
) -> CurveBlurResult<RasterImage> {
    let extended = extend_edges(image, blur_radius)?;
    composite_motion_blur(&extended, directions, blur_radius, image.size())
}

/// Render the blurred display-resolution preview.
///
/// Without a source the result is an empty `0x0` image. Crop shading is not applied here; see
/// [`shade_outside_crop`](crate::shade_outside_crop).
#[tracing::instrument(level = "debug", skip(state))]
pub fn render_preview(state: &EditorState) -> CurveBlurResult<RasterImage> {
    let Some(source) = state.source() else {
        tracing::debug!("no source image; preview is empty");
        return Ok(RasterImage::empty());
    };
    blur_image(
        source.display(),
        &state.directions(),
        state.params().blur_radius,
    )
}

/// Render the preview into a caller-owned surface, replacing its contents.
///
/// Without a source the surface keeps its size and is cleared to transparent.
pub fn render_preview_into(state: &EditorState, surface: &mut RasterImage) -> CurveBlurResult<()> {
    if state.source().is_none() {
        surface.clear();
        return Ok(());
    }
    *surface = render_preview(state)?;
    Ok(())
}

/// Render the cropped export at `scale` times the display size.
///
/// The original is resampled to the scaled display size, the radius becomes
/// `ceil(radius * scale)`, and the blurred result is cropped to the scaled crop rectangle with
/// each edge rounded independently (at least `1x1`). Directions come from the path's logical
/// frame and need no rescaling. Returns `Ok(None)` when no source is loaded.
#[tracing::instrument(level = "debug", skip(state))]
pub fn render_export(state: &EditorState, scale: f64) -> CurveBlurResult<Option<RasterImage>> {
    let Some(plan) = plan_export(state, scale)? else {
        tracing::debug!("no source image; export skipped");
        return Ok(None);
    };
    let Some(source) = state.source() else {
        return Ok(None);
    };

    let resampled = source.resample_for_export(plan.scale)?;
    let blurred = blur_image(&resampled, &state.directions(), plan.blur_radius)?;
    let out = blurred.cropped(plan.crop)?;
    tracing::debug!(
        w = out.width(),
        h = out.height(),
        radius = plan.blur_radius,
        "export rendered"
    );
    Ok(Some(out))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
