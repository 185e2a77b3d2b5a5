use crate::foundation::error::{CurveBlurError, CurveBlurResult};
use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Composite one solid premultiplied color over every pixel of `dst` at `opacity`.
///
/// Each channel becomes `src * opacity + dst * (1 - src.a * opacity)`, saturating at 255.
pub fn over_solid_in_place(dst: &mut [u8], src: PremulRgba8, opacity: f32) -> CurveBlurResult<()> {
    if !dst.len().is_multiple_of(4) {
        return Err(CurveBlurError::evaluation(
            "over_solid_in_place expects an rgba8 buffer",
        ));
    }

    let op = (opacity.clamp(0.0, 1.0) * 255.0).round() as u16;
    let scaled = src.map(|c| mul_div255_u8(u16::from(c), op));
    if scaled[3] == 0 {
        return Ok(());
    }
    let inv = 255 - u16::from(scaled[3]);

    for px in dst.chunks_exact_mut(4) {
        for (d, &s) in px.iter_mut().zip(&scaled) {
            *d = s.saturating_add(mul_div255_u8(u16::from(*d), inv));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
