//! The nine-patch context
//!
//! [`NinePatch`] owns a bordered bitmap together with everything derived
//! from its border: the two run scans, the patch grid and the padding.
//! The derived state is recomputed wholesale from the bitmap whenever the
//! border changes.

use crate::diagnose::{self, find_corrupted_patches};
use crate::error::{StretchError, StretchResult};
use crate::grid::PatchGrid;
use crate::padding::{Padding, extract_padding};
use crate::render::{RenderOptions, output_box, render_into};
use crate::scan::{BorderScan, scan_border};
use ninepatch_core::{Boxa, Pix, color};
use ninepatch_io::{ImageFormat, is_nine_patch_path, nine_patch_file_name};
use std::path::{Path, PathBuf};

/// Scan the four borders of a bordered bitmap.
///
/// # Errors
///
/// Returns [`StretchError::NotBordered`] if the bitmap is smaller than
/// 3x3.
pub fn analyze(image: &Pix) -> StretchResult<(PatchGrid, Padding)> {
    let (w, h) = (image.width(), image.height());
    if w < 3 || h < 3 {
        return Err(StretchError::NotBordered {
            width: w,
            height: h,
        });
    }
    let horizontal = scan_border(&image.extract_row(0)?)?;
    let vertical = scan_border(&image.extract_column(0)?)?;
    let bottom = scan_border(&image.extract_row(h - 1)?)?;
    let right = scan_border(&image.extract_column(w - 1)?)?;

    let padding = extract_padding(&bottom, &right);
    Ok((PatchGrid::build(horizontal, vertical), padding))
}

/// Replace every border pixel that is neither a stretch nor a fixed
/// marker with the fixed marker.
pub fn ensure_nine_patch(image: Pix) -> Pix {
    let (w, h) = (image.width(), image.height());
    let mut pm = image.into_mut();
    let mut cleaned = 0usize;
    let border = (0..w)
        .flat_map(|x| [(x, 0), (x, h - 1)])
        .chain((0..h).flat_map(|y| [(0, y), (w - 1, y)]));
    for (x, y) in border {
        let p = pm.get_pixel_unchecked(x, y);
        if !color::is_marker(p) {
            pm.set_pixel_unchecked(x, y, color::FIXED_MARKER);
            cleaned += 1;
        }
    }
    if cleaned > 0 {
        log::debug!("cleared {} stray border pixels", cleaned);
    }
    pm.into()
}

/// Wrap a plain bitmap in a transparent one-pixel border.
pub fn convert_to_nine_patch(image: &Pix) -> StretchResult<Pix> {
    Ok(image.add_border(1, color::FIXED_MARKER)?)
}

/// A bordered bitmap and its derived patch layout
#[derive(Debug, Clone)]
pub struct NinePatch {
    image: Pix,
    grid: PatchGrid,
    padding: Padding,
}

impl NinePatch {
    /// Analyze a bordered bitmap.
    ///
    /// The border is taken as is; see [`NinePatch::load`] for sanitizing.
    pub fn new(image: Pix) -> StretchResult<Self> {
        let (grid, padding) = analyze(&image)?;
        Ok(NinePatch {
            image,
            grid,
            padding,
        })
    }

    /// Load a bitmap that may or may not carry a nine-patch border.
    ///
    /// A nine-patch has its stray border pixels cleared. A plain bitmap
    /// gets an empty border when `convert` is set and yields `None`
    /// otherwise.
    pub fn load(image: Pix, is_nine_patch: bool, convert: bool) -> StretchResult<Option<Self>> {
        let image = if is_nine_patch {
            ensure_nine_patch(image)
        } else if convert {
            convert_to_nine_patch(&image)?
        } else {
            return Ok(None);
        };
        Self::new(image).map(Some)
    }

    /// Read a PNG file; it is a nine-patch if its name ends in `.9.png`.
    pub fn open<P: AsRef<Path>>(path: P, convert: bool) -> StretchResult<Option<Self>> {
        let path = path.as_ref();
        let image = ninepatch_io::read_image(path)?;
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Self::load(image, is_nine_patch_path(path), convert)
    }

    /// Write the bordered bitmap as PNG under its nine-patch file name.
    ///
    /// Returns the path actually written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> StretchResult<PathBuf> {
        let target = nine_patch_file_name(path.as_ref());
        ninepatch_io::write_image(&self.image, &target, ImageFormat::Png)?;
        log::info!("saved {}", target.display());
        Ok(target)
    }

    /// Re-derive the grid and padding from the current border.
    pub fn recompute(&mut self) -> StretchResult<()> {
        let (grid, padding) = analyze(&self.image)?;
        self.grid = grid;
        self.padding = padding;
        Ok(())
    }

    /// Overwrite one pixel of the bordered bitmap and recompute.
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> StretchResult<()> {
        self.image.update_pixel(x, y, val)?;
        self.recompute()
    }

    /// The bordered bitmap
    pub fn image(&self) -> &Pix {
        &self.image
    }

    pub fn into_image(self) -> Pix {
        self.image
    }

    /// The bitmap without its border
    pub fn content(&self) -> StretchResult<Pix> {
        Ok(self.image.remove_border(1)?)
    }

    /// Content width
    pub fn width(&self) -> u32 {
        self.image.width() - 2
    }

    /// Content height
    pub fn height(&self) -> u32 {
        self.image.height() - 2
    }

    /// Scan of the top border
    pub fn horizontal_scan(&self) -> &BorderScan {
        self.grid.horizontal()
    }

    /// Scan of the left border
    pub fn vertical_scan(&self) -> &BorderScan {
        self.grid.vertical()
    }

    pub fn grid(&self) -> &PatchGrid {
        &self.grid
    }

    pub fn padding(&self) -> &Padding {
        &self.padding
    }

    /// Smallest size that shows every fixed patch whole
    pub fn min_size(&self) -> (u32, u32) {
        self.grid.min_size()
    }

    /// Stretch patches whose pixels are not constant along their
    /// stretched axis, in content coordinates.
    pub fn corrupted_patches(&self) -> Boxa {
        find_corrupted_patches(&self.image, &self.grid)
    }

    /// Render the content at `width` x `height`.
    pub fn render(&self, width: u32, height: u32, options: &RenderOptions) -> StretchResult<Pix> {
        let target = output_box(width, height)?;
        let mut canvas = Pix::new(width, height)?.into_mut();
        render_into(&self.image, &self.grid, &mut canvas, &target, options)?;
        if options.show_padding {
            diagnose::highlight_padding(&mut canvas, &self.padding)?;
        }
        Ok(canvas.into())
    }

    /// Output size of a preview at `scale` times the content size.
    pub fn preview_size(&self, scale: f32) -> (u32, u32) {
        let scaled = |n: u32| (n as f64 * scale as f64).max(0.0) as u32;
        (scaled(self.width()), scaled(self.height()))
    }

    /// Preview stretched horizontally only.
    pub fn render_horizontal(&self, scale: f32, options: &RenderOptions) -> StretchResult<Pix> {
        let (w, _) = self.preview_size(scale);
        self.render(w, self.height(), options)
    }

    /// Preview stretched vertically only.
    pub fn render_vertical(&self, scale: f32, options: &RenderOptions) -> StretchResult<Pix> {
        let (_, h) = self.preview_size(scale);
        self.render(self.width(), h, options)
    }

    /// Preview stretched along both axes.
    pub fn render_both(&self, scale: f32, options: &RenderOptions) -> StretchResult<Pix> {
        let (w, h) = self.preview_size(scale);
        self.render(w, h, options)
    }

    /// The bordered bitmap with the editor overlays: stretch patches,
    /// and corrupted patches when `show_corrupted` is set.
    pub fn annotated(&self, show_corrupted: bool) -> StretchResult<Pix> {
        let mut canvas = self.image.to_mut();
        diagnose::highlight_patches(&mut canvas, &self.grid, (1, 1))?;
        if show_corrupted {
            diagnose::highlight_corrupted(&mut canvas, &self.corrupted_patches(), (1, 1))?;
        }
        Ok(canvas.into())
    }
}
