//! Border editing
//!
//! An [`EditSession`] holds one nine-patch whose border is being painted.
//! Only border pixels other than the four corners can be changed; the
//! content area is locked. Every accepted stroke recomputes the patch
//! layout and, when enabled, the corrupted-patch list.

use crate::error::{StretchError, StretchResult};
use crate::ninepatch::NinePatch;
use ninepatch_core::{Boxa, color};
use std::path::{Path, PathBuf};

/// What a border stroke paints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Opaque black: the run under it stretches
    Stretch,
    /// Transparent: the run under it is fixed
    Fixed,
}

impl Marker {
    /// Pixel value written to the border
    pub fn pixel(self) -> u32 {
        match self {
            Self::Stretch => color::STRETCH_MARKER,
            Self::Fixed => color::FIXED_MARKER,
        }
    }
}

/// An editable nine-patch
#[derive(Debug, Clone)]
pub struct EditSession {
    patch: NinePatch,
    path: Option<PathBuf>,
    show_bad_patches: bool,
    corrupted: Option<Boxa>,
    modified: bool,
}

impl EditSession {
    pub fn new(patch: NinePatch) -> Self {
        EditSession {
            patch,
            path: None,
            show_bad_patches: false,
            corrupted: None,
            modified: false,
        }
    }

    /// Open a PNG for editing, converting plain bitmaps.
    pub fn open<P: AsRef<Path>>(path: P) -> StretchResult<Self> {
        let path = path.as_ref();
        // convert = true never yields None
        let patch = NinePatch::open(path, true)?.ok_or_else(|| {
            StretchError::InvalidArgument(format!("{} is not a nine-patch", path.display()))
        })?;
        let mut session = Self::new(patch);
        session.path = Some(path.to_path_buf());
        Ok(session)
    }

    pub fn patch(&self) -> &NinePatch {
        &self.patch
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether any stroke was accepted since the last save
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Whether `(x, y)` is a paintable border pixel (not a corner)
    pub fn is_border(&self, x: u32, y: u32) -> bool {
        let (w, h) = (self.patch.image().width(), self.patch.image().height());
        ((x == 0 || x == w - 1) && y > 0 && y < h - 1)
            || (x > 0 && x < w - 1 && (y == 0 || y == h - 1))
    }

    /// Whether `(x, y)` lies in the locked content area
    pub fn is_locked(&self, x: u32, y: u32) -> bool {
        let (w, h) = (self.patch.image().width(), self.patch.image().height());
        x > 0 && x < w - 1 && y > 0 && y < h - 1
    }

    /// Paint `marker` at `(x, y)` of the bordered bitmap.
    ///
    /// Returns `false`, leaving everything unchanged, if the pixel is not
    /// a paintable border pixel.
    pub fn paint(&mut self, x: u32, y: u32, marker: Marker) -> StretchResult<bool> {
        if !self.is_border(x, y) {
            log::trace!("ignored stroke at ({}, {})", x, y);
            return Ok(false);
        }
        self.patch.set_pixel(x, y, marker.pixel())?;
        self.modified = true;
        if self.show_bad_patches {
            self.corrupted = Some(self.patch.corrupted_patches());
        }
        Ok(true)
    }

    /// Toggle corrupted-patch tracking; returns the new state.
    pub fn toggle_bad_patches(&mut self) -> bool {
        self.show_bad_patches = !self.show_bad_patches;
        self.corrupted = self
            .show_bad_patches
            .then(|| self.patch.corrupted_patches());
        self.show_bad_patches
    }

    /// Corrupted patches, if tracking is on
    pub fn bad_patches(&self) -> Option<&Boxa> {
        self.corrupted.as_ref()
    }

    /// Save to `path`, or to the path the session was opened from.
    ///
    /// The file name always ends in `.9.png`. Returns the path written.
    pub fn save(&mut self, path: Option<&Path>) -> StretchResult<PathBuf> {
        let target = match (path, self.path.as_deref()) {
            (Some(p), _) | (None, Some(p)) => p.to_path_buf(),
            (None, None) => {
                return Err(StretchError::InvalidArgument(
                    "session has no file name".to_string(),
                ));
            }
        };
        let written = self.patch.save(&target)?;
        self.path = Some(written.clone());
        self.modified = false;
        Ok(written)
    }
}
