//! Rectangle-to-rectangle scaling
//!
//! The renderer resamples each patch independently. Sampling is clamped
//! to the source rectangle so that bilinear filtering never picks up
//! pixels from a neighbouring patch or from the marker border.

use crate::error::{StretchError, StretchResult};
use ninepatch_core::{Box, Pix, PixMut, color};

/// Resampling method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (pixelated, exact colours)
    Sampling,
    /// Bilinear interpolation on premultiplied alpha
    #[default]
    Linear,
}

/// Scale the `src_box` region of `src` into the `dst_box` region of `dst`.
///
/// Destination pixels outside `dst` are skipped. Empty boxes draw
/// nothing. When both boxes have the same size the pixels are copied
/// unchanged whatever the method.
///
/// # Errors
///
/// Returns [`StretchError::InvalidArgument`] if `src_box` is not inside
/// `src`.
pub fn blit_scaled(
    src: &Pix,
    src_box: &Box,
    dst: &mut PixMut,
    dst_box: &Box,
    method: ScaleMethod,
) -> StretchResult<()> {
    let bounds = Box::new_unchecked(0, 0, src.width() as i32, src.height() as i32);
    if !src_box.is_valid() || !bounds.contains_box(src_box) {
        return Err(StretchError::InvalidArgument(format!(
            "source box {:?} is outside the {}x{} image",
            src_box,
            src.width(),
            src.height()
        )));
    }
    if src_box.is_empty() || dst_box.is_empty() || !dst_box.is_valid() {
        return Ok(());
    }
    let Some(visible) = dst_box.clip(dst.width() as i32, dst.height() as i32) else {
        return Ok(());
    };

    if src_box.w == dst_box.w && src_box.h == dst_box.h {
        let dx = src_box.x - dst_box.x;
        let dy = src_box.y - dst_box.y;
        for y in visible.y..visible.bottom() {
            let from = &src.row_data((y + dy) as u32)
                [(visible.x + dx) as usize..(visible.right() + dx) as usize];
            dst.row_data_mut(y as u32)[visible.x as usize..visible.right() as usize]
                .copy_from_slice(from);
        }
        return Ok(());
    }

    match method {
        ScaleMethod::Sampling => {
            let xs: Vec<u32> = (visible.x..visible.right())
                .map(|x| nearest(x - dst_box.x, dst_box.w, src_box.x, src_box.w))
                .collect();
            for y in visible.y..visible.bottom() {
                let sy = nearest(y - dst_box.y, dst_box.h, src_box.y, src_box.h);
                let src_row = src.row_data(sy);
                let row = &mut dst.row_data_mut(y as u32)
                    [visible.x as usize..visible.right() as usize];
                for (out, &sx) in row.iter_mut().zip(&xs) {
                    *out = src_row[sx as usize];
                }
            }
        }
        ScaleMethod::Linear => {
            let xs: Vec<Tap> = (visible.x..visible.right())
                .map(|x| Tap::new(x - dst_box.x, dst_box.w, src_box.x, src_box.w))
                .collect();
            for y in visible.y..visible.bottom() {
                let ty = Tap::new(y - dst_box.y, dst_box.h, src_box.y, src_box.h);
                let row0 = src.row_data(ty.i0);
                let row1 = src.row_data(ty.i1);
                let row = &mut dst.row_data_mut(y as u32)
                    [visible.x as usize..visible.right() as usize];
                for (out, tx) in row.iter_mut().zip(&xs) {
                    *out = interpolate(
                        [
                            row0[tx.i0 as usize],
                            row0[tx.i1 as usize],
                            row1[tx.i0 as usize],
                            row1[tx.i1 as usize],
                        ],
                        tx.frac,
                        ty.frac,
                    );
                }
            }
        }
    }
    Ok(())
}

/// Source index sampled for destination offset `d` (pixel centres).
fn nearest(d: i32, dst_len: i32, src_start: i32, src_len: i32) -> u32 {
    let s = ((2 * d as i64 + 1) * src_len as i64) / (2 * dst_len as i64);
    (src_start as i64 + s.clamp(0, src_len as i64 - 1)) as u32
}

/// Two neighbouring source indices and the weight of the second.
struct Tap {
    i0: u32,
    i1: u32,
    frac: f64,
}

impl Tap {
    fn new(d: i32, dst_len: i32, src_start: i32, src_len: i32) -> Self {
        let max = (src_len - 1) as f64;
        let pos = ((d as f64 + 0.5) * src_len as f64 / dst_len as f64 - 0.5).clamp(0.0, max);
        let base = pos.floor();
        let i0 = base as i32;
        let i1 = (i0 + 1).min(src_len - 1);
        Tap {
            i0: (src_start + i0) as u32,
            i1: (src_start + i1) as u32,
            frac: pos - base,
        }
    }
}

/// Bilinear blend of `[top-left, top-right, bottom-left, bottom-right]`.
fn interpolate(p: [u32; 4], tx: f64, ty: f64) -> u32 {
    if tx == 0.0 && ty == 0.0 {
        return p[0];
    }
    let weights = [
        (1.0 - tx) * (1.0 - ty),
        tx * (1.0 - ty),
        (1.0 - tx) * ty,
        tx * ty,
    ];
    let mut acc = [0.0f64; 4];
    for (&px, &w) in p.iter().zip(&weights) {
        let (r, g, b, a) = color::extract_rgba(px);
        let wa = w * a as f64;
        acc[0] += r as f64 * wa;
        acc[1] += g as f64 * wa;
        acc[2] += b as f64 * wa;
        acc[3] += wa;
    }
    if acc[3] <= f64::EPSILON {
        return color::FIXED_MARKER;
    }
    let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    color::compose_rgba(
        channel(acc[0] / acc[3]),
        channel(acc[1] / acc[3]),
        channel(acc[2] / acc[3]),
        channel(acc[3]),
    )
}
