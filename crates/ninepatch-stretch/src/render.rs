//! Stretch rendering
//!
//! Rendering happens one axis at a time. [`AxisLayout`] decides where
//! each run of an axis lands in the output: fixed runs keep their native
//! extent, and the pixels left over (the *remainder*) are shared between
//! the stretch runs in proportion to their native extent.
//!
//! The share of each stretch run is computed by successive weighted
//! remainder: the run receives `round(own * budget / weight)`, then its
//! share leaves the budget and its extent leaves the weight. The last
//! stretch run therefore gets exactly what is left, and the axis always
//! adds up to the target size.
//!
//! The two layouts are then walked row-major, alternating between fixed
//! and stretch bands, and every patch is resampled into its cell.

use crate::diagnose::find_corrupted_patches;
use crate::error::{StretchError, StretchResult};
use crate::grid::{Patch, PatchGrid, PatchKind};
use crate::scale::{ScaleMethod, blit_scaled};
use crate::scan::{BorderScan, Run};
use ninepatch_core::{Box, Boxa, Pix, PixMut};

/// Options controlling how a nine-patch is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Resampling used for stretched patches
    pub method: ScaleMethod,
    /// Draw resized corrupted stretch patches from their reference
    /// pixels (first column, first row, or top-left pixel). On by
    /// default; a patch drawn at its native size is always copied as is.
    pub flatten_corrupted: bool,
    /// Blend the padding overlay over the content box.
    ///
    /// Only [`crate::NinePatch::render`] knows the padding; the free
    /// [`render`] function ignores this flag.
    pub show_padding: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            method: ScaleMethod::default(),
            flatten_corrupted: true,
            show_padding: false,
        }
    }
}

/// Placement of one run in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// The source run, in content coordinates
    pub run: Run,
    /// Output offset along the axis
    pub offset: u32,
    /// Output extent along the axis
    pub extent: u32,
}

/// Output placement of every run along one axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLayout {
    target: u32,
    remainder: u32,
    patches_sum: u32,
    bands: Vec<Band>,
}

impl AxisLayout {
    /// Lay out the runs of `scan` over `target` pixels.
    ///
    /// If `target` is smaller than the fixed extent, stretch runs get no
    /// pixels and the fixed runs overflow the target.
    pub fn compute(scan: &BorderScan, target: u32) -> Self {
        let remainder = target.saturating_sub(scan.fixed_len());
        let patches_sum = scan.stretch_len();

        let mut budget = remainder as u64;
        let mut weight = patches_sum as u64;
        let mut offset = 0u32;
        let mut bands = Vec::new();
        for run in scan.runs() {
            let extent = if run.is_stretch() {
                let own = run.len() as u64;
                let share = if weight == 0 {
                    0
                } else {
                    (2 * own * budget + weight) / (2 * weight)
                };
                budget -= share;
                weight -= own;
                share as u32
            } else {
                run.len()
            };
            log::trace!("{:?} run {}..{} -> {}+{}", run.kind, run.start, run.end, offset, extent);
            bands.push(Band {
                run,
                offset,
                extent,
            });
            offset += extent;
        }

        AxisLayout {
            target,
            remainder,
            patches_sum,
            bands,
        }
    }

    /// Requested output size
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Pixels distributed among the stretch runs
    pub fn remainder(&self) -> u32 {
        self.remainder
    }

    /// Native extent of all stretch runs
    pub fn patches_sum(&self) -> u32 {
        self.patches_sum
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Sum of all band extents
    pub fn total(&self) -> u32 {
        self.bands.iter().map(|b| b.extent).sum()
    }
}

/// Render a bordered nine-patch `image` at `width` x `height`.
///
/// `grid` must have been built from the borders of `image`.
///
/// # Errors
///
/// Returns [`StretchError::InvalidArgument`] if either dimension is zero
/// or if `grid` does not match `image`.
pub fn render(
    image: &Pix,
    grid: &PatchGrid,
    width: u32,
    height: u32,
    options: &RenderOptions,
) -> StretchResult<Pix> {
    let target = output_box(width, height)?;
    let mut canvas = Pix::new(width, height)?.into_mut();
    render_into(image, grid, &mut canvas, &target, options)?;
    Ok(canvas.into())
}

/// Output box for a `width` x `height` render, checked before anything
/// is allocated.
///
/// # Errors
///
/// Returns [`StretchError::InvalidArgument`] if either dimension is zero
/// or does not fit in an `i32`.
pub(crate) fn output_box(width: u32, height: u32) -> StretchResult<Box> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(Box::new_unchecked(0, 0, w, h)),
        _ => Err(StretchError::InvalidArgument(format!(
            "cannot render at {}x{}",
            width, height
        ))),
    }
}

/// Render a bordered nine-patch `image` into the `target` box of an
/// existing canvas.
///
/// Pixels falling outside the canvas are dropped.
pub fn render_into(
    image: &Pix,
    grid: &PatchGrid,
    canvas: &mut PixMut,
    target: &Box,
    options: &RenderOptions,
) -> StretchResult<()> {
    if target.w <= 0 || target.h <= 0 {
        return Err(StretchError::InvalidArgument(format!(
            "cannot render into {:?}",
            target
        )));
    }
    let (content_w, content_h) = grid.content_size();
    if image.width() != content_w + 2 || image.height() != content_h + 2 {
        return Err(StretchError::InvalidArgument(format!(
            "grid for {}x{} content does not match {}x{} image",
            content_w,
            content_h,
            image.width(),
            image.height()
        )));
    }

    let columns = AxisLayout::compute(grid.horizontal(), target.w as u32);
    let rows = AxisLayout::compute(grid.vertical(), target.h as u32);
    let corrupted = if options.flatten_corrupted {
        find_corrupted_patches(image, grid)
    } else {
        Boxa::new()
    };
    log::debug!(
        "rendering {}x{} content at {}x{} (remainder {}x{})",
        content_w,
        content_h,
        target.w,
        target.h,
        columns.remainder(),
        rows.remainder()
    );

    // Next unused entry of each patch list, indexed by PatchKind.
    let mut cursors = [0usize; 4];
    let mut v_stretch = grid.vertical().starts_with_stretch();
    for row in rows.bands() {
        debug_assert_eq!(v_stretch, row.run.is_stretch());
        let mut h_stretch = grid.horizontal().starts_with_stretch();
        for column in columns.bands() {
            debug_assert_eq!(h_stretch, column.run.is_stretch());
            let (slot, kind, list) = match (v_stretch, h_stretch) {
                (false, false) => (0, PatchKind::Fixed, grid.fixed()),
                (false, true) => (1, PatchKind::StretchH, grid.horizontal_stretch()),
                (true, false) => (2, PatchKind::StretchV, grid.vertical_stretch()),
                (true, true) => (3, PatchKind::StretchBoth, grid.both_stretch()),
            };
            let bounds = *list.get(cursors[slot]).ok_or_else(|| {
                StretchError::InvalidArgument(format!("patch grid is missing a {:?} patch", kind))
            })?;
            cursors[slot] += 1;

            let patch = Patch { bounds, kind };
            let cell = Box::new_unchecked(
                target.x + column.offset as i32,
                target.y + row.offset as i32,
                column.extent as i32,
                row.extent as i32,
            );
            let resized = cell.w != bounds.w || cell.h != bounds.h;
            let source = if resized && corrupted.boxes().contains(&bounds) {
                patch.reference_box()
            } else {
                bounds
            };
            blit_scaled(image, &source.translate(1, 1), canvas, &cell, options.method)?;
            h_stretch = !h_stretch;
        }
        v_stretch = !v_stretch;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_border;
    use ninepatch_core::color::{self, FIXED_MARKER as T, STRETCH_MARKER as B};

    fn extents(layout: &AxisLayout) -> Vec<u32> {
        layout.bands().iter().map(|b| b.extent).collect()
    }

    #[test]
    fn test_layout_distributes_remainder() {
        // fixed 1, stretch 1, fixed 2, stretch 2, fixed 1
        let scan = scan_border(&[T, T, B, T, T, B, B, T, T]).unwrap();
        let layout = AxisLayout::compute(&scan, 13);
        assert_eq!(layout.remainder(), 9);
        assert_eq!(layout.patches_sum(), 3);
        assert_eq!(extents(&layout), vec![1, 3, 2, 6, 1]);
        assert_eq!(layout.total(), 13);
        let offsets: Vec<u32> = layout.bands().iter().map(|b| b.offset).collect();
        assert_eq!(offsets, vec![0, 1, 4, 6, 12]);
    }

    #[test]
    fn test_layout_rounding_sums_to_target() {
        let scan = scan_border(&[T, B, T, B, T, B, T]).unwrap();
        for target in 2..40 {
            let layout = AxisLayout::compute(&scan, target);
            assert_eq!(layout.total(), target, "target {}", target);
        }
    }

    #[test]
    fn test_layout_native_size_is_identity() {
        let scan = scan_border(&[T, B, T, T, B, B, B, T, T]).unwrap();
        let layout = AxisLayout::compute(&scan, scan.len());
        for band in layout.bands() {
            assert_eq!(band.extent, band.run.len());
            assert_eq!(band.offset, band.run.start);
        }
    }

    #[test]
    fn test_layout_below_fixed_extent() {
        let scan = scan_border(&[T, T, T, B, T, T, T]).unwrap();
        let layout = AxisLayout::compute(&scan, 3);
        assert_eq!(layout.remainder(), 0);
        assert_eq!(extents(&layout), vec![2, 0, 2]);
    }

    #[test]
    fn test_render_rejects_zero_size() {
        let image = Pix::new_filled(3, 3, color::FIXED_MARKER).unwrap();
        let grid = PatchGrid::build(
            scan_border(&[T, T, T]).unwrap(),
            scan_border(&[T, T, T]).unwrap(),
        );
        let opts = RenderOptions::default();
        assert!(matches!(
            render(&image, &grid, 0, 5, &opts),
            Err(StretchError::InvalidArgument(_))
        ));
        assert!(render(&image, &grid, 5, 5, &opts).is_ok());
    }

    #[test]
    fn test_output_box_rejects_oversized_targets() {
        assert_eq!(output_box(7, 3).unwrap(), Box::new_unchecked(0, 0, 7, 3));
        let too_wide = i32::MAX as u32 + 1;
        assert!(matches!(
            output_box(too_wide, 1),
            Err(StretchError::InvalidArgument(_))
        ));
        assert!(output_box(1, u32::MAX).is_err());
        assert!(output_box(0, 1).is_err());

        let image = Pix::new_filled(3, 3, color::FIXED_MARKER).unwrap();
        let grid = PatchGrid::build(
            scan_border(&[T, T, T]).unwrap(),
            scan_border(&[T, T, T]).unwrap(),
        );
        assert!(matches!(
            render(&image, &grid, u32::MAX, u32::MAX, &RenderOptions::default()),
            Err(StretchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_render_rejects_mismatched_grid() {
        let image = Pix::new(6, 6).unwrap();
        let grid = PatchGrid::build(
            scan_border(&[T, T, T]).unwrap(),
            scan_border(&[T, T, T]).unwrap(),
        );
        assert!(render(&image, &grid, 4, 4, &RenderOptions::default()).is_err());
    }
}
