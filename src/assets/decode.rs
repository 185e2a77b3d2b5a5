use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{CurveBlurError, CurveBlurResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};
use crate::raster::buffer::RasterImage;

/// Decode encoded image bytes (any format the `image` crate reads) into premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> CurveBlurResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    RasterImage::from_premul_rgba8(width, height, rgba8_premul)
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> CurveBlurResult<RasterImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}

/// Convert a premultiplied raster into a straight-alpha `image` buffer.
pub fn to_straight_rgba(img: &RasterImage) -> CurveBlurResult<image::RgbaImage> {
    let mut straight = img.data().to_vec();
    unpremultiply_rgba8_in_place(&mut straight);
    image::RgbaImage::from_raw(img.width(), img.height(), straight)
        .ok_or_else(|| CurveBlurError::evaluation("invalid rgba buffer size"))
}

/// Encode a premultiplied raster as PNG bytes.
pub fn encode_png(img: &RasterImage) -> CurveBlurResult<Vec<u8>> {
    if img.is_empty() {
        return Err(CurveBlurError::validation("cannot encode an empty image"));
    }
    let straight = to_straight_rgba(img)?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(straight)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
