//! curveblur renders a directional motion blur whose direction follows an editable curve.
//!
//! A user-authored open path is smoothed with a uniform Catmull-Rom spline, resampled into one
//! unit tangent per accumulation sample, and each tangent shifts one equally weighted copy of an
//! edge-extended source image. Because every sample uses a different direction, the blur bends
//! along the path instead of smearing along a single vector.
//!
//! # Pipeline overview
//!
//! 1. **Edit**: [`PathModel`] keeps canonical points plus a rotation; view points are derived.
//! 2. **Sample**: [`sample_curve`] -> [`directions`] (pure functions of the view points).
//! 3. **Extend**: [`extend_edges`] pads the source by the blur radius with replicated borders.
//! 4. **Composite**: [`composite_motion_blur`] averages the shifted windows.
//! 5. **Render**: [`render_preview`] at display size, [`render_export`] at a scaled size with the
//!    crop applied.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every render is a pure function of the [`EditorState`].
//! - **Premultiplied RGBA8** end-to-end: decode premultiplies, encode un-premultiplies.
//! - **Single-threaded edits**: callers serialize mutations; the drag state machine admits one
//!   active drag at a time.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod curve;
mod editor;
mod effects;
mod foundation;
mod project;
mod raster;
mod render;

pub use assets::decode::{decode_image, encode_png, load_image, to_straight_rgba};
pub use curve::direction::directions;
pub use curve::path_model::{DEFAULT_FRAME_SIZE, INSERT_PROXIMITY, PathModel};
pub use curve::sampler::sample_curve;
pub use editor::crop::{CropEdge, CropRegion, DEFAULT_MIN_CROP_SIZE};
pub use editor::drag::{DragState, POINT_HIT_RADIUS};
pub use editor::state::{
    DEFAULT_BLUR_RADIUS, DEFAULT_MAX_WORKING_WIDTH, DEFAULT_NUM_SAMPLES, EditorOpts, EditorState,
    MAX_NUM_SAMPLES, RenderParameters, SourceImage,
};
pub use effects::composite::{PremulRgba8, over_solid_in_place};
pub use effects::motion_blur::{composite_motion_blur, sample_offsets};
pub use foundation::core::{Affine, PixelSize, Point, Rect, Vec2};
pub use foundation::error::{CurveBlurError, CurveBlurResult};
pub use project::Project;
pub use raster::buffer::RasterImage;
pub use raster::extend::extend_edges;
pub use render::overlay::{CROP_SHADE, CROP_SHADE_OPACITY, shade_outside_crop};
pub use render::pipeline::{
    ExportPlan, ExportTier, blur_image, export_blur_radius, plan_export, render_export,
    render_preview, render_preview_into,
};
