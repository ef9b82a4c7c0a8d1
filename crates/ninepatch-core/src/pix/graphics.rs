//! Graphics rendering functions
//!
//! Filling boxes with a translucent overlay colour. Used to mark the
//! padding area and corrupted patches on rendered previews.

use super::PixMut;
use crate::box_::{Box, Boxa};
use crate::color;
use crate::error::{Error, Result};

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
}

/// Composite `color` at opacity `fract` over `dst` (straight alpha).
fn blend_over(dst: u32, c: Color, fract: f32) -> u32 {
    let (r, g, b, a) = color::extract_rgba(dst);
    let sa = fract;
    let da = a as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);
    if oa <= 0.0 {
        return color::FIXED_MARKER;
    }
    let mix = |s: u8, d: u8| -> u8 {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / oa;
        v.round().clamp(0.0, 255.0) as u8
    };
    color::compose_rgba(
        mix(c.r, r),
        mix(c.g, g),
        mix(c.b, b),
        (oa * 255.0).round() as u8,
    )
}

impl PixMut {
    /// Fill a box with alpha blending.
    ///
    /// `fract` is the blend fraction: 1.0 = fully opaque, 0.0 = no change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `fract` is not finite.
    pub fn fill_box_blend(&mut self, b: &Box, c: Color, fract: f32) -> Result<()> {
        if !fract.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "blend fraction must be finite, got {fract}"
            )));
        }
        let fract = fract.clamp(0.0, 1.0);
        let Some(clipped) = b.clip(self.width() as i32, self.height() as i32) else {
            return Ok(());
        };
        for y in clipped.y..clipped.bottom() {
            let row = self.row_data_mut(y as u32);
            for p in &mut row[clipped.x as usize..clipped.right() as usize] {
                *p = blend_over(*p, c, fract);
            }
        }
        Ok(())
    }

    /// Fill every box of a Boxa with alpha blending.
    pub fn fill_boxa_blend(&mut self, boxa: &Boxa, c: Color, fract: f32) -> Result<()> {
        for b in boxa.iter() {
            self.fill_box_blend(b, c, fract)?;
        }
        Ok(())
    }
}
