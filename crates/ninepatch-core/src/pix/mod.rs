//! PIX - The main image container
//!
//! `Pix` is the image type every nine-patch operation works on. It is
//! always 32 bits per pixel in `0xRRGGBBAA` order, which is what the
//! border markers and the renderer need; decoders expand other PNG
//! colour types on the way in.
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod border;
mod clip;
pub mod graphics;

pub use graphics::Color;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format (image built in memory)
    #[default]
    Unknown,
    /// PNG format
    Png,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
        }
    }
}

/// Internal PIX data
#[derive(Debug, Clone)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Input file format
    informat: ImageFormat,
    /// The image data, one RGBA word per pixel, row-major
    data: Vec<u32>,
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use ninepatch_core::Pix;
///
/// let pix = Pix::new(64, 48).unwrap();
/// assert_eq!(pix.width(), 64);
/// assert_eq!(pix.height(), 48);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// The image data is initialized to zero (fully transparent).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new PIX with every pixel set to `val`.
    pub fn new_filled(width: u32, height: u32, val: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                informat: ImageFormat::Unknown,
                data: vec![val; size],
            }),
        })
    }

    /// Create a PIX from raw row-major RGBA words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len()` is not
    /// `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            let rows = (data.len() / width as usize) as u32;
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: (width, rows),
            });
        }
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                informat: ImageFormat::Unknown,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the pixels of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Check if two PIX hold identical pixels.
    pub fn equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other) && self.inner.data == other.inner.data
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`PixMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Get mutable access, copying only when the data is shared.
    pub fn into_mut(self) -> PixMut {
        match self.try_into_mut() {
            Ok(pix_mut) => pix_mut,
            Err(shared) => shared.to_mut(),
        }
    }

    /// Set a pixel in place (copy-on-write).
    ///
    /// The pixel data is cloned first only if another `Pix` shares it,
    /// so holders of earlier clones keep seeing the old pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn update_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        let inner = Arc::make_mut(&mut self.inner);
        inner.data[y as usize * inner.width as usize + x as usize] = val;
        Ok(())
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the input format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Set the input format.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixels of a specific row.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
