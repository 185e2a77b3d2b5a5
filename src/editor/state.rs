use crate::curve::direction::directions;
use crate::curve::path_model::PathModel;
use crate::editor::crop::{CropEdge, CropRegion, DEFAULT_MIN_CROP_SIZE};
use crate::editor::drag::{DragState, POINT_HIT_RADIUS};
use crate::foundation::core::{PixelSize, Point, Vec2};
use crate::foundation::error::{CurveBlurError, CurveBlurResult};
use crate::raster::buffer::RasterImage;

/// Default number of blur accumulation samples.
pub const DEFAULT_NUM_SAMPLES: usize = 20;
/// Upper bound on blur accumulation samples.
pub const MAX_NUM_SAMPLES: usize = 4096;
/// Default blur radius in display pixels.
pub const DEFAULT_BLUR_RADIUS: u32 = 20;
/// Default maximum width of the working (display) copy of a source image.
pub const DEFAULT_MAX_WORKING_WIDTH: u32 = 600;

/// User-controlled render parameters. Read-only to the render pipeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderParameters {
    /// Blur radius in display pixels.
    pub blur_radius: u32,
    /// Path rotation in degrees.
    pub rotation_deg: f64,
    /// Accumulation samples per render, `K`.
    pub num_samples: usize,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            blur_radius: DEFAULT_BLUR_RADIUS,
            rotation_deg: 0.0,
            num_samples: DEFAULT_NUM_SAMPLES,
        }
    }
}

/// Editor-wide limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorOpts {
    /// Widest display copy kept for previews.
    pub max_working_width: u32,
    /// Smallest allowed crop edge length in display pixels.
    pub min_crop_size: f64,
}

impl Default for EditorOpts {
    fn default() -> Self {
        Self {
            max_working_width: DEFAULT_MAX_WORKING_WIDTH,
            min_crop_size: DEFAULT_MIN_CROP_SIZE,
        }
    }
}

/// A decoded source image plus its display-resolution working copy.
#[derive(Clone, Debug)]
pub struct SourceImage {
    original: RasterImage,
    display: RasterImage,
}

impl SourceImage {
    /// Keep `original` for export and derive a display copy no wider than `max_working_width`.
    pub fn new(original: RasterImage, max_working_width: u32) -> CurveBlurResult<Self> {
        if original.is_empty() {
            return Err(CurveBlurError::validation("source image must be non-empty"));
        }
        let display = original.resized(original.size().fit_width(max_working_width.max(1)))?;
        Ok(Self { original, display })
    }

    /// Full-resolution decoded image.
    pub fn original(&self) -> &RasterImage {
        &self.original
    }

    /// Working copy used for previews.
    pub fn display(&self) -> &RasterImage {
        &self.display
    }

    /// Size of the working copy.
    pub fn display_size(&self) -> PixelSize {
        self.display.size()
    }

    /// Re-derive the display copy for a new working width. Returns `true` when its size changed.
    fn rebuild_display(&mut self, max_working_width: u32) -> CurveBlurResult<bool> {
        let size = self.original.size().fit_width(max_working_width.max(1));
        if size == self.display.size() {
            return Ok(false);
        }
        self.display = self.original.resized(size)?;
        Ok(true)
    }

    /// Resample the original to the display size scaled by `scale`.
    pub fn resample_for_export(&self, scale: f64) -> CurveBlurResult<RasterImage> {
        self.original.resized(self.display_size().scaled(scale))
    }
}

/// Everything a render depends on, with explicit mutation entry points.
///
/// Renders are pure functions of this state. Callers serialize edits: the drag state machine
/// admits one active drag at a time.
#[derive(Clone, Debug)]
pub struct EditorState {
    path: PathModel,
    params: RenderParameters,
    opts: EditorOpts,
    source: Option<SourceImage>,
    crop: CropRegion,
    drag: DragState,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(
            PathModel::default(),
            RenderParameters::default(),
            EditorOpts::default(),
        )
    }
}

impl EditorState {
    /// Create an editor with no source image loaded.
    pub fn new(mut path: PathModel, mut params: RenderParameters, opts: EditorOpts) -> Self {
        if !params.rotation_deg.is_finite() {
            params.rotation_deg = 0.0;
        }
        params.num_samples = params.num_samples.clamp(1, MAX_NUM_SAMPLES);
        path.set_rotation(params.rotation_deg);
        Self {
            path,
            params,
            opts,
            source: None,
            crop: CropRegion::full(PixelSize::new(0, 0)),
            drag: DragState::Idle,
        }
    }

    /// The motion path.
    pub fn path(&self) -> &PathModel {
        &self.path
    }

    /// Current render parameters.
    pub fn params(&self) -> RenderParameters {
        self.params
    }

    /// Editor limits.
    pub fn opts(&self) -> EditorOpts {
        self.opts
    }

    /// Loaded source image, if any.
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// Display size of the loaded source, if any.
    pub fn display_size(&self) -> Option<PixelSize> {
        self.source.as_ref().map(SourceImage::display_size)
    }

    /// Current crop rectangle in display pixels.
    pub fn crop(&self) -> CropRegion {
        self.crop
    }

    /// Active drag.
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Direction sequence for the current path, one per accumulation sample.
    pub fn directions(&self) -> Vec<Vec2> {
        directions(self.path.view_points(), self.params.num_samples)
    }

    /// Set the blur radius in display pixels.
    pub fn set_blur_radius(&mut self, blur_radius: u32) {
        self.params.blur_radius = blur_radius;
    }

    /// Rotate the path. Non-finite angles are ignored.
    pub fn set_rotation(&mut self, rotation_deg: f64) {
        if !rotation_deg.is_finite() {
            return;
        }
        self.params.rotation_deg = rotation_deg;
        self.path.set_rotation(rotation_deg);
    }

    /// Set the accumulation sample count, clamped into `1..=MAX_NUM_SAMPLES`.
    pub fn set_num_samples(&mut self, num_samples: usize) {
        self.params.num_samples = num_samples.clamp(1, MAX_NUM_SAMPLES);
    }

    /// See [`PathModel::insert_point`]. A point being dragged keeps its grip when the insert
    /// lands before it.
    pub fn insert_point(&mut self, view_pos: Point) -> bool {
        let Some(inserted) = self.path.insert_point(view_pos) else {
            return false;
        };
        if let DragState::DraggingPoint(i) = self.drag
            && inserted <= i
        {
            self.drag = DragState::DraggingPoint(i + 1);
        }
        true
    }

    /// See [`PathModel::remove_point`]. Declined while that point is being dragged.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if let DragState::DraggingPoint(i) = self.drag
            && i == index
        {
            return false;
        }
        let removed = self.path.remove_point(index);
        if removed && let DragState::DraggingPoint(i) = self.drag
            && i > index
        {
            self.drag = DragState::DraggingPoint(i - 1);
        }
        removed
    }

    /// See [`PathModel::move_point`].
    pub fn move_point(&mut self, index: usize, view_pos: Point) -> bool {
        self.path.move_point(index, view_pos)
    }

    /// Load a new source image. The crop resets to the full display frame.
    pub fn load_source(&mut self, original: RasterImage) -> CurveBlurResult<()> {
        let source = SourceImage::new(original, self.opts.max_working_width)?;
        tracing::debug!(
            w = source.original().width(),
            h = source.original().height(),
            dw = source.display_size().width,
            dh = source.display_size().height,
            "loaded source image"
        );
        self.crop = CropRegion::full(source.display_size());
        self.source = Some(source);
        self.cancel_crop_drag();
        Ok(())
    }

    /// Drop the source image.
    pub fn clear_source(&mut self) {
        self.source = None;
        self.crop = CropRegion::full(PixelSize::new(0, 0));
        self.cancel_crop_drag();
    }

    /// Change the working width. When the display size changes the crop resets to full frame.
    pub fn set_max_working_width(&mut self, max_working_width: u32) -> CurveBlurResult<()> {
        self.opts.max_working_width = max_working_width.max(1);
        let Some(source) = self.source.as_mut() else {
            return Ok(());
        };
        if source.rebuild_display(self.opts.max_working_width)? {
            self.crop = CropRegion::full(source.display_size());
            self.cancel_crop_drag();
        }
        Ok(())
    }

    /// Replace the crop, clamped into the current display bounds.
    pub fn set_crop(&mut self, crop: CropRegion) {
        let display = self.display_size().unwrap_or(PixelSize::new(0, 0));
        self.crop = crop.clamped(display, self.opts.min_crop_size);
    }

    /// Move one crop edge, clamped. No-op without a source.
    pub fn drag_crop_edge(&mut self, edge: CropEdge, value: f64) {
        let Some(display) = self.display_size() else {
            return;
        };
        self.crop
            .drag_edge(edge, value, display, self.opts.min_crop_size);
    }

    /// Pick up the control point under `view_pos`. Declined while another drag is active or when
    /// nothing is under the pointer.
    pub fn begin_point_drag(&mut self, view_pos: Point) -> bool {
        if !self.drag.is_idle() {
            return false;
        }
        match self.path.find_nearest(view_pos, POINT_HIT_RADIUS) {
            Some(index) => {
                self.drag = DragState::DraggingPoint(index);
                true
            }
            None => false,
        }
    }

    /// Start dragging a crop edge. Declined while another drag is active or without a source.
    pub fn begin_crop_drag(&mut self, edge: CropEdge) -> bool {
        if !self.drag.is_idle() || self.source.is_none() {
            return false;
        }
        self.drag = DragState::DraggingCropEdge(edge);
        true
    }

    /// Feed a pointer position to the active drag.
    ///
    /// Point drags take path frame coordinates; crop drags take display pixels and read `x` for
    /// left/right edges and `y` for top/bottom. Returns `false` when idle.
    pub fn drag_to(&mut self, pos: Point) -> bool {
        match self.drag {
            DragState::Idle => false,
            DragState::DraggingPoint(index) => self.path.move_point(index, pos),
            DragState::DraggingCropEdge(edge) => {
                let value = match edge {
                    CropEdge::Left | CropEdge::Right => pos.x,
                    CropEdge::Top | CropEdge::Bottom => pos.y,
                };
                self.drag_crop_edge(edge, value);
                true
            }
        }
    }

    /// Release the active drag, if any.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    fn cancel_crop_drag(&mut self) {
        if matches!(self.drag, DragState::DraggingCropEdge(_)) {
            self.drag = DragState::Idle;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/state.rs"]
mod tests;
