use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::curve::path_model::{DEFAULT_FRAME_SIZE, PathModel};
use crate::editor::crop::{CropRegion, DEFAULT_MIN_CROP_SIZE};
use crate::editor::state::{
    DEFAULT_BLUR_RADIUS, DEFAULT_MAX_WORKING_WIDTH, DEFAULT_NUM_SAMPLES, EditorOpts, EditorState,
    MAX_NUM_SAMPLES, RenderParameters,
};
use crate::foundation::core::Point;
use crate::foundation::error::{CurveBlurError, CurveBlurResult};
use crate::raster::buffer::RasterImage;

/// Serializable editor settings: the motion path, render parameters, and crop.
///
/// Everything except `points` falls back to the editor defaults when omitted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Edge length of the square logical frame the points live in.
    #[serde(default = "default_frame_size")]
    pub frame_size: f64,
    /// Canonical (unrotated) control points.
    pub points: Vec<Point>,
    /// Path rotation in degrees.
    #[serde(default)]
    pub rotation_deg: f64,
    /// Blur radius in display pixels.
    #[serde(default = "default_blur_radius")]
    pub blur_radius: u32,
    /// Accumulation samples per render.
    #[serde(default = "default_num_samples")]
    pub num_samples: usize,
    /// Widest display copy kept for previews.
    #[serde(default = "default_max_working_width")]
    pub max_working_width: u32,
    /// Smallest allowed crop edge length in display pixels.
    #[serde(default = "default_min_crop_size")]
    pub min_crop_size: f64,
    /// Crop in display pixels; full frame when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropRegion>,
}

fn default_frame_size() -> f64 {
    DEFAULT_FRAME_SIZE
}

fn default_blur_radius() -> u32 {
    DEFAULT_BLUR_RADIUS
}

fn default_num_samples() -> usize {
    DEFAULT_NUM_SAMPLES
}

fn default_max_working_width() -> u32 {
    DEFAULT_MAX_WORKING_WIDTH
}

fn default_min_crop_size() -> f64 {
    DEFAULT_MIN_CROP_SIZE
}

impl Default for Project {
    fn default() -> Self {
        Self::from_state(&EditorState::default())
    }
}

impl Project {
    /// Parse a project from JSON.
    pub fn from_reader(reader: impl Read) -> CurveBlurResult<Self> {
        let project: Self = serde_json::from_reader(reader)?;
        project.validate()?;
        Ok(project)
    }

    /// Read and parse a project file.
    pub fn from_path(path: &Path) -> CurveBlurResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open project '{}'", path.display()))?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Pretty JSON for saving.
    pub fn to_json_pretty(&self) -> CurveBlurResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges.
    pub fn validate(&self) -> CurveBlurResult<()> {
        if !self.frame_size.is_finite() || self.frame_size <= 0.0 {
            return Err(CurveBlurError::validation("frame_size must be > 0"));
        }
        if self.points.len() < 2 {
            return Err(CurveBlurError::validation(
                "points must contain at least two control points",
            ));
        }
        if self.points.iter().any(|p| !p.is_finite()) {
            return Err(CurveBlurError::validation("points must be finite"));
        }
        if !self.rotation_deg.is_finite() {
            return Err(CurveBlurError::validation("rotation_deg must be finite"));
        }
        if self.num_samples == 0 || self.num_samples > MAX_NUM_SAMPLES {
            return Err(CurveBlurError::validation(format!(
                "num_samples must be in 1..={MAX_NUM_SAMPLES}"
            )));
        }
        if self.max_working_width == 0 {
            return Err(CurveBlurError::validation("max_working_width must be >= 1"));
        }
        if !self.min_crop_size.is_finite() || self.min_crop_size < 1.0 {
            return Err(CurveBlurError::validation("min_crop_size must be >= 1"));
        }
        Ok(())
    }

    /// Snapshot an editor's settings.
    pub fn from_state(state: &EditorState) -> Self {
        let params = state.params();
        let opts = state.opts();
        Self {
            frame_size: state.path().frame_size(),
            points: state.path().canonical_points().to_vec(),
            rotation_deg: params.rotation_deg,
            blur_radius: params.blur_radius,
            num_samples: params.num_samples,
            max_working_width: opts.max_working_width,
            min_crop_size: opts.min_crop_size,
            crop: state.source().map(|_| state.crop()),
        }
    }

    /// Build an editor from these settings, optionally loading `source`.
    ///
    /// Points are clamped into the frame and the crop is clamped to the loaded display size.
    pub fn into_editor_state(self, source: Option<RasterImage>) -> CurveBlurResult<EditorState> {
        self.validate()?;
        let path = PathModel::new(self.frame_size, self.points)?;
        let params = RenderParameters {
            blur_radius: self.blur_radius,
            rotation_deg: self.rotation_deg,
            num_samples: self.num_samples,
        };
        let opts = EditorOpts {
            max_working_width: self.max_working_width,
            min_crop_size: self.min_crop_size,
        };
        let mut state = EditorState::new(path, params, opts);
        if let Some(source) = source {
            state.load_source(source)?;
            if let Some(crop) = self.crop {
                state.set_crop(crop);
            }
        }
        Ok(state)
    }
}

#[cfg(test)]
#[path = "../tests/unit/project.rs"]
mod tests;
