//! Border scanning
//!
//! A nine-patch carries its layout in a one-pixel border: opaque black
//! pixels on the top row and left column mark the stretchable runs,
//! everything else is fixed. The corners belong to neither axis.
//!
//! Runs are reported in *content* coordinates, i.e. border index minus
//! one, so that they can be used directly against the image with its
//! border removed.

use crate::error::{StretchError, StretchResult};
use ninepatch_core::color;

/// Classification of a border run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// Copied at native size
    Fixed,
    /// Stretched to absorb extra pixels
    Stretch,
}

/// A half-open run `[start, end)` along one axis of the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: u32,
    pub end: u32,
    pub kind: RunKind,
}

impl Run {
    pub const fn new(start: u32, end: u32, kind: RunKind) -> Self {
        Self { start, end, kind }
    }

    /// Run extent in pixels
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn is_stretch(&self) -> bool {
        self.kind == RunKind::Stretch
    }
}

/// Result of scanning one border strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderScan {
    len: u32,
    fixed_runs: Vec<Run>,
    stretch_runs: Vec<Run>,
    starts_with_stretch: bool,
}

impl BorderScan {
    /// Content length covered by the runs (strip length minus the corners)
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Non-marker runs, in order
    pub fn fixed_runs(&self) -> &[Run] {
        &self.fixed_runs
    }

    /// Marker runs, in order
    pub fn stretch_runs(&self) -> &[Run] {
        &self.stretch_runs
    }

    /// Whether the first run along the axis is a stretch run
    #[inline]
    pub fn starts_with_stretch(&self) -> bool {
        self.starts_with_stretch
    }

    /// All runs merged in axis order.
    ///
    /// Consecutive runs always differ in kind.
    pub fn runs(&self) -> Vec<Run> {
        let mut runs: Vec<Run> = self
            .fixed_runs
            .iter()
            .chain(self.stretch_runs.iter())
            .copied()
            .collect();
        runs.sort_by_key(|r| r.start);
        runs
    }

    /// Summed extent of the fixed runs
    pub fn fixed_len(&self) -> u32 {
        self.fixed_runs.iter().map(Run::len).sum()
    }

    /// Summed extent of the stretch runs
    pub fn stretch_len(&self) -> u32 {
        self.stretch_runs.iter().map(Run::len).sum()
    }
}

/// Scan a border strip into fixed and stretch runs.
///
/// `strip` is the full top row or left column, corners included; only
/// indices `1 .. len-1` are classified. A pixel belongs to a stretch run
/// iff it equals [`color::STRETCH_MARKER`].
///
/// When the strip has no marker pixel at all, the whole content length
/// becomes a single stretch run and the fixed runs are dropped.
///
/// # Errors
///
/// Returns [`StretchError::InvalidArgument`] if the strip is shorter
/// than two pixels.
pub fn scan_border(strip: &[u32]) -> StretchResult<BorderScan> {
    if strip.len() < 2 {
        return Err(StretchError::InvalidArgument(format!(
            "border strip of {} pixels has no room for corners",
            strip.len()
        )));
    }

    let content = &strip[1..strip.len() - 1];
    let len = content.len() as u32;
    let mut fixed_runs = Vec::new();
    let mut stretch_runs = Vec::new();
    let mut starts_with_stretch = false;

    if let Some(&first) = content.first() {
        let mut run_start = 0u32;
        let mut run_stretch = first == color::STRETCH_MARKER;
        starts_with_stretch = run_stretch;

        let mut close = |start: u32, end: u32, stretch: bool| {
            if stretch {
                stretch_runs.push(Run::new(start, end, RunKind::Stretch));
            } else {
                fixed_runs.push(Run::new(start, end, RunKind::Fixed));
            }
        };

        for (i, &p) in content.iter().enumerate().skip(1) {
            let stretch = p == color::STRETCH_MARKER;
            if stretch != run_stretch {
                close(run_start, i as u32, run_stretch);
                run_start = i as u32;
                run_stretch = stretch;
            }
        }
        close(run_start, len, run_stretch);
    }

    if stretch_runs.is_empty() {
        stretch_runs.push(Run::new(0, len, RunKind::Stretch));
        fixed_runs.clear();
        starts_with_stretch = true;
    }

    log::trace!(
        "scanned border of {}: {} fixed, {} stretch",
        len,
        fixed_runs.len(),
        stretch_runs.len()
    );
    Ok(BorderScan {
        len,
        fixed_runs,
        stretch_runs,
        starts_with_stretch,
    })
}
