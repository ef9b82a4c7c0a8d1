//! Rectangle clipping operations for images
//!
//! Extracting rectangular sub-regions from images and checking whether a
//! region is uniform.

use super::Pix;
use crate::Box;
use crate::error::{Error, Result};

impl Pix {
    /// Extract a rectangular sub-region from the image.
    ///
    /// If the rectangle extends beyond the image bounds, it is clipped to
    /// the valid region.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested width or height is 0
    /// - The rectangle is entirely outside the image bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use ninepatch_core::Pix;
    ///
    /// let pix = Pix::new(100, 80).unwrap();
    /// let clipped = pix.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!(clipped.width(), 20);
    /// assert_eq!(clipped.height(), 20);
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Pix> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let src_w = self.width();
        let src_h = self.height();

        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside image bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);

        let mut pixd = Pix::new(clip_w, clip_h)?.into_mut();
        pixd.set_informat(self.informat());
        for dy in 0..clip_h {
            let src = &self.row_data(y + dy)[x as usize..(x + clip_w) as usize];
            pixd.row_data_mut(dy).copy_from_slice(src);
        }
        Ok(pixd.into())
    }

    /// Check whether every pixel inside `b` equals the pixel at its top-left.
    ///
    /// An empty box or a box outside the image is trivially uniform.
    pub fn is_uniform_in_box(&self, b: &Box) -> bool {
        let Some(c) = b.clip(self.width() as i32, self.height() as i32) else {
            return true;
        };
        let reference = self.get_pixel_unchecked(c.x as u32, c.y as u32);
        (c.y..c.bottom()).all(|y| {
            self.row_data(y as u32)[c.x as usize..c.right() as usize]
                .iter()
                .all(|&p| p == reference)
        })
    }
}
