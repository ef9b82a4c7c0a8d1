//! Patch grid construction
//!
//! Crossing the vertical runs (left border) with the horizontal runs (top
//! border) cuts the content area into rectangles. Each rectangle is
//! classified by which axes it stretches along:
//!
//! | vertical run | horizontal run | kind          |
//! |--------------|----------------|---------------|
//! | fixed        | fixed          | `Fixed`       |
//! | fixed        | stretch        | `StretchH`    |
//! | stretch      | fixed          | `StretchV`    |
//! | stretch      | stretch        | `StretchBoth` |
//!
//! When one axis has no fixed runs, its single stretch run spans the whole
//! axis, so the rectangles crossing it become full-width (or full-height)
//! strips and the `Fixed` list is empty.

use crate::scan::{BorderScan, Run};
use ninepatch_core::{Box, Boxa};

/// How a patch behaves when the image is resized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchKind {
    /// Copied at native size
    Fixed,
    /// Stretches horizontally only; height stays native
    StretchH,
    /// Stretches vertically only; width stays native
    StretchV,
    /// Stretches along both axes
    StretchBoth,
}

impl PatchKind {
    /// Kind of the patch at the crossing of a vertical and a horizontal run.
    pub fn from_runs(vertical: &Run, horizontal: &Run) -> Self {
        match (vertical.is_stretch(), horizontal.is_stretch()) {
            (false, false) => Self::Fixed,
            (false, true) => Self::StretchH,
            (true, false) => Self::StretchV,
            (true, true) => Self::StretchBoth,
        }
    }

    #[inline]
    pub fn stretches_horizontally(self) -> bool {
        matches!(self, Self::StretchH | Self::StretchBoth)
    }

    #[inline]
    pub fn stretches_vertically(self) -> bool {
        matches!(self, Self::StretchV | Self::StretchBoth)
    }
}

/// One rectangle of the grid, in content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Patch {
    pub bounds: Box,
    pub kind: PatchKind,
}

impl Patch {
    /// The part of the patch whose pixels represent the whole patch when
    /// it is stretched: its first column for `StretchH`, its first row for
    /// `StretchV`, its top-left pixel for `StretchBoth`.
    pub fn reference_box(&self) -> Box {
        let b = self.bounds;
        match self.kind {
            PatchKind::Fixed => b,
            PatchKind::StretchH => Box::new_unchecked(b.x, b.y, b.w.min(1), b.h),
            PatchKind::StretchV => Box::new_unchecked(b.x, b.y, b.w, b.h.min(1)),
            PatchKind::StretchBoth => Box::new_unchecked(b.x, b.y, b.w.min(1), b.h.min(1)),
        }
    }
}

/// The categorized patch rectangles of a nine-patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchGrid {
    horizontal: BorderScan,
    vertical: BorderScan,
    fixed: Boxa,
    both_stretch: Boxa,
    horizontal_stretch: Boxa,
    vertical_stretch: Boxa,
}

impl PatchGrid {
    /// Build the grid from the top-border (`horizontal`) and left-border
    /// (`vertical`) scans.
    ///
    /// Each list is in row-major order.
    pub fn build(horizontal: BorderScan, vertical: BorderScan) -> Self {
        let mut grid = PatchGrid {
            horizontal,
            vertical,
            fixed: Boxa::new(),
            both_stretch: Boxa::new(),
            horizontal_stretch: Boxa::new(),
            vertical_stretch: Boxa::new(),
        };
        for patch in grid.patches() {
            let list = match patch.kind {
                PatchKind::Fixed => &mut grid.fixed,
                PatchKind::StretchH => &mut grid.horizontal_stretch,
                PatchKind::StretchV => &mut grid.vertical_stretch,
                PatchKind::StretchBoth => &mut grid.both_stretch,
            };
            list.push(patch.bounds);
        }
        log::debug!(
            "patch grid {}x{}: {} fixed, {} both, {} horizontal, {} vertical",
            grid.horizontal.len(),
            grid.vertical.len(),
            grid.fixed.len(),
            grid.both_stretch.len(),
            grid.horizontal_stretch.len(),
            grid.vertical_stretch.len()
        );
        grid
    }

    /// Scan of the top border
    pub fn horizontal(&self) -> &BorderScan {
        &self.horizontal
    }

    /// Scan of the left border
    pub fn vertical(&self) -> &BorderScan {
        &self.vertical
    }

    pub fn fixed(&self) -> &Boxa {
        &self.fixed
    }

    pub fn both_stretch(&self) -> &Boxa {
        &self.both_stretch
    }

    pub fn horizontal_stretch(&self) -> &Boxa {
        &self.horizontal_stretch
    }

    pub fn vertical_stretch(&self) -> &Boxa {
        &self.vertical_stretch
    }

    /// Content size `(width, height)` the grid covers
    pub fn content_size(&self) -> (u32, u32) {
        (self.horizontal.len(), self.vertical.len())
    }

    /// Smallest size the grid renders without clipping fixed patches
    pub fn min_size(&self) -> (u32, u32) {
        (self.horizontal.fixed_len(), self.vertical.fixed_len())
    }

    /// Every patch tagged with its kind, row-major.
    pub fn patches(&self) -> Vec<Patch> {
        let columns = self.horizontal.runs();
        let mut patches = Vec::new();
        for v in self.vertical.runs() {
            for h in &columns {
                patches.push(Patch {
                    bounds: Box::new_unchecked(
                        h.start as i32,
                        v.start as i32,
                        h.len() as i32,
                        v.len() as i32,
                    ),
                    kind: PatchKind::from_runs(&v, h),
                });
            }
        }
        patches
    }

    /// Check that the four patch lists together cover a `width` x
    /// `height` area exactly once.
    pub fn is_tiling(&self, width: u32, height: u32) -> bool {
        let area = Box::new_unchecked(0, 0, width as i32, height as i32);
        let boxa: Boxa = [
            &self.fixed,
            &self.both_stretch,
            &self.horizontal_stretch,
            &self.vertical_stretch,
        ]
        .into_iter()
        .flatten()
        .copied()
        .collect();
        boxa.iter().all(|b| area.contains_box(b))
            && !boxa.has_overlap()
            && boxa.total_area() == area.area()
    }
}
