//! ninepatch-test - Regression test framework for the nine-patch library
//!
//! Provides [`RegParams`], which counts and records comparisons so that a
//! regression test reports every mismatch instead of stopping at the
//! first, plus helpers to build bordered fixtures from marker strings.
//!
//! # Usage
//!
//! ```ignore
//! use ninepatch_test::{RegParams, bordered};
//!
//! let mut rp = RegParams::new("render");
//! rp.compare_values(12.0, out.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display"; display mode
//!   writes rendered images to `tests/regout`

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use ninepatch_core::{Pix, color};

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "button.9.png")
pub fn load_test_image(name: &str) -> TestResult<Pix> {
    let path = test_data_path(name);
    ninepatch_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // ninepatch-test is at crates/ninepatch-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Marker pixels for a pattern string: `#` is a stretch marker, anything
/// else a fixed marker.
pub fn marker_strip(pattern: &str) -> Vec<u32> {
    pattern
        .chars()
        .map(|c| {
            if c == '#' {
                color::STRETCH_MARKER
            } else {
                color::FIXED_MARKER
            }
        })
        .collect()
}

/// Wrap `content` in a marker border described by four pattern strings.
///
/// `top`/`bottom` must be as long as the content is wide, `left`/`right`
/// as long as it is tall. Corners are fixed markers.
pub fn bordered(content: &Pix, top: &str, left: &str, bottom: &str, right: &str) -> TestResult<Pix> {
    let (w, h) = (content.width(), content.height());
    for (name, pattern, len) in [
        ("top", top, w),
        ("bottom", bottom, w),
        ("left", left, h),
        ("right", right, h),
    ] {
        if pattern.chars().count() != len as usize {
            return Err(TestError::Fixture(format!(
                "{} pattern {:?} does not match length {}",
                name, pattern, len
            )));
        }
    }

    let mut pm = content.add_border(1, color::FIXED_MARKER)?.into_mut();
    for (i, p) in marker_strip(top).into_iter().enumerate() {
        pm.set_pixel(i as u32 + 1, 0, p)?;
    }
    for (i, p) in marker_strip(bottom).into_iter().enumerate() {
        pm.set_pixel(i as u32 + 1, h + 1, p)?;
    }
    for (i, p) in marker_strip(left).into_iter().enumerate() {
        pm.set_pixel(0, i as u32 + 1, p)?;
    }
    for (i, p) in marker_strip(right).into_iter().enumerate() {
        pm.set_pixel(w + 1, i as u32 + 1, p)?;
    }
    Ok(pm.into())
}

/// Content image whose every pixel is distinct and opaque.
pub fn checker_content(width: u32, height: u32) -> TestResult<Pix> {
    let data = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            color::compose_rgb((x * 17 % 251) as u8, (y * 29 % 251) as u8, ((x + y) % 256) as u8)
        })
        .collect();
    Ok(Pix::from_data(width, height, data)?)
}
