//! ninepatch-core - Basic data structures for nine-patch processing
//!
//! This crate provides the fundamental data structures used throughout
//! the nine-patch library:
//!
//! - [`Pix`] / [`PixMut`] - 32-bit RGBA image container (immutable / mutable)
//! - [`Box`] / [`Boxa`] - Rectangle regions
//! - [`Color`] - Overlay colour used when highlighting regions
//!
//! # Pixel format
//!
//! Every pixel is one 32-bit word laid out as `0xRRGGBBAA`. The two
//! nine-patch border markers are therefore [`color::STRETCH_MARKER`]
//! (opaque black, `0x000000FF`) and [`color::FIXED_MARKER`] (fully
//! transparent, `0x00000000`).

pub mod box_;
pub mod error;
pub mod pix;

pub use box_::{Box, Boxa};
pub use error::{Error, Result};
pub use pix::{Color, ImageFormat, Pix, PixMut};

/// Color channel indices and helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Border marker for a stretchable run: fully opaque black.
    pub const STRETCH_MARKER: u32 = 0x0000_00FF;

    /// Border marker for a fixed run: fully transparent.
    pub const FIXED_MARKER: u32 = 0x0000_0000;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Check whether a pixel is a valid border marker.
    ///
    /// Only [`STRETCH_MARKER`] and [`FIXED_MARKER`] are meaningful on the
    /// border of a nine-patch; anything else is noise left over from editing.
    #[inline]
    pub fn is_marker(pixel: u32) -> bool {
        pixel == STRETCH_MARKER || pixel == FIXED_MARKER
    }

}
