//! ninepatch-stretch - Nine-patch layout and stretch rendering
//!
//! A nine-patch is a bitmap framed by a one-pixel marker border. The top
//! and left borders mark which columns and rows stretch; the bottom and
//! right borders mark the content padding. This crate provides:
//!
//! - Border scanning into fixed and stretch runs
//! - The patch grid (fixed, horizontal, vertical and two-way patches)
//! - Padding extraction
//! - Rendering at any size, with nearest or bilinear resampling
//! - Corrupted-patch diagnostics and editor overlays
//! - An edit session for painting border markers
//!
//! # Example
//!
//! ```
//! use ninepatch_core::{Pix, color};
//! use ninepatch_stretch::{NinePatch, RenderOptions};
//!
//! let mut pm = Pix::new_filled(5, 5, color::compose_rgb(255, 255, 255))
//!     .unwrap()
//!     .add_border(1, color::FIXED_MARKER)
//!     .unwrap()
//!     .into_mut();
//! pm.set_pixel(3, 0, color::STRETCH_MARKER).unwrap();
//! pm.set_pixel(0, 3, color::STRETCH_MARKER).unwrap();
//!
//! let patch = NinePatch::new(pm.into()).unwrap();
//! let out = patch.render(40, 12, &RenderOptions::default()).unwrap();
//! assert_eq!((out.width(), out.height()), (40, 12));
//! ```

pub mod diagnose;
mod error;
pub mod grid;
pub mod ninepatch;
pub mod padding;
pub mod render;
pub mod scale;
pub mod scan;
pub mod session;

pub use diagnose::find_corrupted_patches;
pub use error::{StretchError, StretchResult};
pub use grid::{Patch, PatchGrid, PatchKind};
pub use ninepatch::{NinePatch, analyze, convert_to_nine_patch, ensure_nine_patch};
pub use padding::{Padding, axis_padding, extract_padding};
pub use render::{AxisLayout, Band, RenderOptions, render, render_into};
pub use scale::{ScaleMethod, blit_scaled};
pub use scan::{BorderScan, Run, RunKind, scan_border};
pub use session::{EditSession, Marker};
