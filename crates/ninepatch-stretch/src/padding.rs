//! Content padding
//!
//! The bottom row and right column of the border describe where content
//! (text, child views) may be placed inside the stretched image. The
//! insets are read off the *fixed* runs of those borders.

use crate::scan::BorderScan;
use ninepatch_core::Box;

/// Content insets, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The box left for content inside an image of `width` x `height`.
    ///
    /// Returns `None` when the insets leave no room.
    pub fn content_box(&self, width: u32, height: u32) -> Option<Box> {
        let w = width.checked_sub(self.left)?.checked_sub(self.right)?;
        let h = height.checked_sub(self.top)?.checked_sub(self.bottom)?;
        if w == 0 || h == 0 {
            return None;
        }
        Some(Box::new_unchecked(
            self.left as i32,
            self.top as i32,
            w as i32,
            h as i32,
        ))
    }
}

/// Leading and trailing inset for one axis.
///
/// With a single fixed run the inset goes on the side it touches. With
/// more than two fixed runs only the first and last count.
pub fn axis_padding(scan: &BorderScan) -> (u32, u32) {
    match scan.fixed_runs() {
        [] => (0, 0),
        [only] if only.start == 0 => (only.len(), 0),
        [only] => (0, only.len()),
        [first, .., last] => (first.len(), last.len()),
    }
}

/// Padding from the bottom-border (`horizontal`) and right-border
/// (`vertical`) scans.
pub fn extract_padding(bottom: &BorderScan, right: &BorderScan) -> Padding {
    let (left, right_inset) = axis_padding(bottom);
    let (top, bottom_inset) = axis_padding(right);
    Padding::new(left, top, right_inset, bottom_inset)
}
