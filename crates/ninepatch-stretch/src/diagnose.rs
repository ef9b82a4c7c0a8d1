//! Patch diagnostics and overlays
//!
//! A stretch patch only scales cleanly when its pixels are constant along
//! the stretched axis. Patches that violate this are reported as
//! *corrupted*; they are a warning for the artist, never an error.

use crate::error::StretchResult;
use crate::grid::PatchGrid;
use crate::padding::Padding;
use ninepatch_core::{Box, Boxa, Color, Pix, PixMut};

/// Overlay colour of the padding (content) box
pub const PADDING_COLOR: Color = Color::new(94, 94, 255);
/// Opacity of the padding overlay
pub const PADDING_FRACT: f32 = 0.5;
/// Overlay colour of corrupted patches
pub const CORRUPTED_COLOR: Color = Color::RED;
/// Opacity of the corrupted-patch overlay
pub const CORRUPTED_FRACT: f32 = 0.7;
/// Overlay colour of patches stretching along both axes
pub const PATCH_COLOR: Color = Color::new(255, 94, 252);
/// Overlay colour of patches stretching along one axis
pub const PATCH_ONEWAY_COLOR: Color = Color::new(94, 255, 94);
/// Opacity of the patch overlays
pub const PATCH_FRACT: f32 = 0.5;

/// Find the stretch patches of `image` whose pixels would smear when
/// stretched.
///
/// `image` is the bordered nine-patch. The returned boxes are in content
/// coordinates, both-axis patches first, then horizontal, then vertical.
pub fn find_corrupted_patches(image: &Pix, grid: &PatchGrid) -> Boxa {
    let mut corrupted = Boxa::new();
    let inside = |b: &Box| b.translate(1, 1);

    corrupted.extend(
        grid.both_stretch()
            .iter()
            .filter(|b| !image.is_uniform_in_box(&inside(*b)))
            .copied(),
    );
    corrupted.extend(
        grid.horizontal_stretch()
            .iter()
            .filter(|b| !columns_match(image, &inside(*b)))
            .copied(),
    );
    corrupted.extend(
        grid.vertical_stretch()
            .iter()
            .filter(|b| !rows_match(image, &inside(*b)))
            .copied(),
    );

    if !corrupted.is_empty() {
        log::debug!("{} corrupted patches", corrupted.len());
    }
    corrupted
}

/// Every column of `b` equals its first column.
fn columns_match(image: &Pix, b: &Box) -> bool {
    if b.is_empty() {
        return true;
    }
    (b.y..b.bottom()).all(|y| {
        let row = &image.row_data(y as u32)[b.x as usize..b.right() as usize];
        row.iter().all(|&p| p == row[0])
    })
}

/// Every row of `b` equals its first row.
fn rows_match(image: &Pix, b: &Box) -> bool {
    if b.is_empty() {
        return true;
    }
    let span = b.x as usize..b.right() as usize;
    let reference = &image.row_data(b.y as u32)[span.clone()];
    (b.y + 1..b.bottom()).all(|y| &image.row_data(y as u32)[span.clone()] == reference)
}

/// Blend the corrupted-patch overlay over content-coordinate boxes of a
/// canvas whose origin is at content `(0, 0)` plus `origin`.
pub fn highlight_corrupted(
    canvas: &mut PixMut,
    corrupted: &Boxa,
    origin: (i32, i32),
) -> StretchResult<()> {
    let shifted: Boxa = corrupted
        .iter()
        .map(|b| b.translate(origin.0, origin.1))
        .collect();
    canvas.fill_boxa_blend(&shifted, CORRUPTED_COLOR, CORRUPTED_FRACT)?;
    Ok(())
}

/// Blend the stretch-patch overlays over a canvas whose content origin is
/// at `origin`.
pub fn highlight_patches(
    canvas: &mut PixMut,
    grid: &PatchGrid,
    origin: (i32, i32),
) -> StretchResult<()> {
    let shift = |boxa: &Boxa| -> Boxa {
        boxa.iter()
            .map(|b| b.translate(origin.0, origin.1))
            .collect()
    };
    canvas.fill_boxa_blend(&shift(grid.both_stretch()), PATCH_COLOR, PATCH_FRACT)?;
    canvas.fill_boxa_blend(
        &shift(grid.horizontal_stretch()),
        PATCH_ONEWAY_COLOR,
        PATCH_FRACT,
    )?;
    canvas.fill_boxa_blend(
        &shift(grid.vertical_stretch()),
        PATCH_ONEWAY_COLOR,
        PATCH_FRACT,
    )?;
    Ok(())
}

/// Blend the padding overlay over the content box of a rendered image.
///
/// Nothing is drawn when the padding leaves no content area.
pub fn highlight_padding(canvas: &mut PixMut, padding: &Padding) -> StretchResult<()> {
    if let Some(content) = padding.content_box(canvas.width(), canvas.height()) {
        canvas.fill_box_blend(&content, PADDING_COLOR, PADDING_FRACT)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_border;
    use ninepatch_core::color::{self, FIXED_MARKER as T, STRETCH_MARKER as B};

    /// 5x5 bordered image: content 3x3 with one stretch column and row in
    /// the middle, all content pixels white.
    fn plus_patch() -> (PixMut, PatchGrid) {
        let mut pm = Pix::new(5, 5).unwrap().into_mut();
        let white = color::compose_rgb(255, 255, 255);
        for y in 1..4 {
            for x in 1..4 {
                pm.set_pixel(x, y, white).unwrap();
            }
        }
        pm.set_pixel(2, 0, B).unwrap();
        pm.set_pixel(0, 2, B).unwrap();
        let grid = PatchGrid::build(
            scan_border(&[T, T, B, T, T]).unwrap(),
            scan_border(&[T, T, B, T, T]).unwrap(),
        );
        (pm, grid)
    }

    #[test]
    fn test_clean_patch_has_no_corruption() {
        let (pm, grid) = plus_patch();
        let image: Pix = pm.into();
        assert!(find_corrupted_patches(&image, &grid).is_empty());
    }

    #[test]
    fn test_fixed_pixels_never_corrupt() {
        let (mut pm, grid) = plus_patch();
        pm.set_pixel(1, 1, color::compose_rgb(1, 2, 3)).unwrap();
        let image: Pix = pm.into();
        assert!(find_corrupted_patches(&image, &grid).is_empty());
    }

    #[test]
    fn test_uniform_one_pixel_patches() {
        // Single-pixel stretch patches are trivially uniform along
        // their stretch axis.
        let (mut pm, grid) = plus_patch();
        pm.set_pixel(2, 1, color::compose_rgb(9, 9, 9)).unwrap();
        let image: Pix = pm.into();
        assert!(find_corrupted_patches(&image, &grid).is_empty());
    }

    #[test]
    fn test_wide_patches_detect_gradients() {
        // content 4x4, stretch columns 1..3 and rows 1..3
        let mut pm = Pix::new_filled(6, 6, color::compose_rgb(255, 255, 255))
            .unwrap()
            .into_mut();
        let grid = PatchGrid::build(
            scan_border(&[T, T, B, B, T, T]).unwrap(),
            scan_border(&[T, T, B, B, T, T]).unwrap(),
        );
        // top edge patch (StretchH) gets a horizontal gradient
        pm.set_pixel(3, 1, color::compose_rgb(0, 0, 0)).unwrap();
        // left edge patch (StretchV) gets a vertical gradient
        pm.set_pixel(1, 3, color::compose_rgb(0, 0, 0)).unwrap();
        let image: Pix = pm.into();
        let corrupted = find_corrupted_patches(&image, &grid);
        assert_eq!(
            corrupted.boxes(),
            &[Box::new_unchecked(1, 0, 2, 1), Box::new_unchecked(0, 1, 1, 2)]
        );
    }

    #[test]
    fn test_highlight_overlays() {
        let mut canvas = Pix::new_filled(4, 4, color::compose_rgb(255, 255, 255))
            .unwrap()
            .into_mut();
        let boxa: Boxa = [Box::new_unchecked(0, 0, 1, 1)].into_iter().collect();
        highlight_corrupted(&mut canvas, &boxa, (1, 1)).unwrap();
        let (r, g, b, _) = color::extract_rgba(canvas.get_pixel(1, 1).unwrap());
        assert!(r == 255 && g < 255 && b < 255);
        assert_eq!(canvas.get_pixel(0, 0), Some(color::compose_rgb(255, 255, 255)));

        highlight_padding(&mut canvas, &Padding::new(1, 1, 1, 1)).unwrap();
        let (_, _, b, _) = color::extract_rgba(canvas.get_pixel(2, 2).unwrap());
        assert_eq!(b, 255);
        assert_eq!(canvas.get_pixel(3, 3), Some(color::compose_rgb(255, 255, 255)));
    }

    #[test]
    fn test_highlight_patches_leaves_fixed_alone() {
        let (_, grid) = plus_patch();
        let white = color::compose_rgb(255, 255, 255);
        let mut canvas = Pix::new_filled(5, 5, white).unwrap().into_mut();
        highlight_patches(&mut canvas, &grid, (1, 1)).unwrap();
        assert_eq!(canvas.get_pixel(1, 1), Some(white));
        assert_ne!(canvas.get_pixel(2, 2), Some(white));
        assert_ne!(canvas.get_pixel(2, 1), Some(white));
        assert_ne!(canvas.get_pixel(1, 2), Some(white));
        assert_ne!(canvas.get_pixel(2, 2), canvas.get_pixel(2, 1));
    }
}
