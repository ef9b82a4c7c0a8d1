//! ninepatch - Nine-patch images for Rust
//!
//! A nine-patch is a PNG bitmap framed by a one-pixel marker border that
//! says which rows and columns may stretch and where content sits. This
//! crate ties the workspace together:
//!
//! - Image types (re-exported from `ninepatch-core`)
//! - PNG I/O and `.9.png` naming (`io`)
//! - Scanning, patch layout, padding and rendering (`stretch`)
//! - TOML render configuration ([`RenderConfig`])
//! - The `ninepatch-render` command line ([`cli`])
//!
//! # Example
//!
//! ```
//! use ninepatch::{NinePatch, Pix, RenderConfig, color};
//!
//! let mut pm = Pix::new_filled(4, 4, color::compose_rgb(40, 80, 120))
//!     .unwrap()
//!     .add_border(1, color::FIXED_MARKER)
//!     .unwrap()
//!     .into_mut();
//! pm.set_pixel(2, 0, color::STRETCH_MARKER).unwrap();
//! pm.set_pixel(0, 2, color::STRETCH_MARKER).unwrap();
//!
//! let config = RenderConfig::from_toml_str("method = \"sampling\"").unwrap();
//! let patch = NinePatch::new(pm.into()).unwrap();
//! let out = patch.render(16, 9, &config.render_options()).unwrap();
//! assert_eq!((out.width(), out.height()), (16, 9));
//! ```

pub mod cli;
pub mod config;

pub use config::{CONFIG_ENV, ConfigError, Method, RenderConfig};

// Re-export core types (primary data structures used everywhere)
pub use ninepatch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ninepatch_io as io;
pub use ninepatch_stretch as stretch;

pub use ninepatch_stretch::{
    EditSession, Marker, NinePatch, Padding, PatchGrid, PatchKind, RenderOptions, ScaleMethod,
    StretchError,
};
