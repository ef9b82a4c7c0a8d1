//! Border operations for images
//!
//! Adding and removing borders around images. A nine-patch is a plain
//! bitmap wrapped in a 1-pixel marker border, so converting in and out of
//! the format is a border add or remove.

use super::Pix;
use crate::error::{Error, Result};

impl Pix {
    /// Add a uniform border around the image.
    ///
    /// Creates a new image with `npix` pixels of border on all sides,
    /// filled with `val`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting dimensions would overflow.
    pub fn add_border(&self, npix: u32, val: u32) -> Result<Pix> {
        self.add_border_general(npix, npix, npix, npix, val)
    }

    /// Add a general border with different sizes per side.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + left + right, height + top + bot)`.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: u32,
    ) -> Result<Pix> {
        let w = self.width();
        let h = self.height();
        let wd = w
            .checked_add(left)
            .and_then(|v| v.checked_add(right))
            .ok_or(Error::InvalidDimension {
                width: u32::MAX,
                height: h,
            })?;
        let hd = h
            .checked_add(top)
            .and_then(|v| v.checked_add(bot))
            .ok_or(Error::InvalidDimension {
                width: w,
                height: u32::MAX,
            })?;

        let mut pixd = Pix::new_filled(wd, hd, val)?.into_mut();
        pixd.set_informat(self.informat());
        for y in 0..h {
            let dst_row = pixd.row_data_mut(y + top);
            dst_row[left as usize..(left + w) as usize].copy_from_slice(self.row_data(y));
        }
        Ok(pixd.into())
    }

    /// Remove a uniform border from the image.
    ///
    /// # Errors
    ///
    /// Returns an error if the border is as large as the image.
    pub fn remove_border(&self, npix: u32) -> Result<Pix> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove a general border with different sizes per side.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - left - right, height - top - bot)`.
    pub fn remove_border_general(&self, left: u32, right: u32, top: u32, bot: u32) -> Result<Pix> {
        let w = self.width();
        let h = self.height();
        let horiz = u64::from(left) + u64::from(right);
        let vert = u64::from(top) + u64::from(bot);
        if horiz >= u64::from(w) || vert >= u64::from(h) {
            return Err(Error::InvalidParameter(format!(
                "border ({left}, {right}, {top}, {bot}) leaves nothing of {w}x{h} image"
            )));
        }
        self.clip_rectangle(left, top, w - horiz as u32, h - vert as u32)
    }
}
