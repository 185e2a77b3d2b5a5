use crate::foundation::core::{PixelSize, Rect};
use crate::foundation::error::{CurveBlurError, CurveBlurResult};

/// Premultiplied RGBA8 raster, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap premultiplied RGBA8 bytes. The buffer length must equal `width * height * 4`.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> CurveBlurResult<Self> {
        let expected = PixelSize::new(width, height).rgba8_len()?;
        if data.len() != expected {
            return Err(CurveBlurError::validation(format!(
                "rgba8 buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Fully transparent image of the given size.
    pub fn transparent(width: u32, height: u32) -> CurveBlurResult<Self> {
        let len = PixelSize::new(width, height).rgba8_len()?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Image filled with one premultiplied pixel value.
    pub fn filled(width: u32, height: u32, px: [u8; 4]) -> CurveBlurResult<Self> {
        let n = PixelSize::new(width, height).rgba8_len()? / 4;
        Ok(Self {
            width,
            height,
            data: px.repeat(n),
        })
    }

    /// A `0x0` image, used as the cleared output when nothing can be rendered.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width x height`.
    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Return `true` for a zero-area image.
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Premultiplied pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable premultiplied pixel bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image, returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// One row of pixel bytes.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = (y as usize) * stride;
        &self.data[start..start + stride]
    }

    pub(crate) fn stride(&self) -> usize {
        (self.width as usize) * 4
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x},{y}) out of bounds");
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Resample to `size` with a triangle filter. Same-size requests return a copy.
    ///
    /// Filtering premultiplied data keeps transparent fringes from bleeding color.
    pub fn resized(&self, size: PixelSize) -> CurveBlurResult<Self> {
        if size == self.size() {
            return Ok(self.clone());
        }
        if size.is_empty() || self.is_empty() {
            return Err(CurveBlurError::validation("cannot resize to or from an empty image"));
        }
        let buf = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| CurveBlurError::evaluation("invalid rgba buffer size"))?;
        let out = image::imageops::resize(
            &buf,
            size.width,
            size.height,
            image::imageops::FilterType::Triangle,
        );
        Self::from_premul_rgba8(size.width, size.height, out.into_raw())
    }

    /// Copy the pixels covered by `rect`, rounding each edge to the nearest pixel and clamping into
    /// the image. The result is never smaller than `1x1` for a non-empty image.
    pub fn cropped(&self, rect: Rect) -> CurveBlurResult<Self> {
        if self.is_empty() {
            return Err(CurveBlurError::validation("cannot crop an empty image"));
        }
        let clamp_x = |v: f64| v.round().clamp(0.0, f64::from(self.width)) as u32;
        let clamp_y = |v: f64| v.round().clamp(0.0, f64::from(self.height)) as u32;

        let x0 = clamp_x(rect.x0).min(self.width - 1);
        let y0 = clamp_y(rect.y0).min(self.height - 1);
        let x1 = clamp_x(rect.x1).max(x0 + 1);
        let y1 = clamp_y(rect.y1).max(y0 + 1);
        let (w, h) = (x1 - x0, y1 - y0);

        let mut data = Vec::with_capacity(PixelSize::new(w, h).rgba8_len()?);
        for y in y0..y1 {
            let row = self.row(y);
            data.extend_from_slice(&row[(x0 as usize) * 4..(x1 as usize) * 4]);
        }
        Self::from_premul_rgba8(w, h, data)
    }

    /// Set every byte to zero (transparent black).
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
