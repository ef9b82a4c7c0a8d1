//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header,
//! and applies the `.9.png` file naming rules.

use crate::{IoError, IoResult};
use ninepatch_core::ImageFormat;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// File suffix that marks a PNG as a nine-patch.
pub const NINE_PATCH_EXTENSION: &str = ".9.png";

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 8 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}

/// Check whether a path names a nine-patch (`*.9.png`, any case).
pub fn is_nine_patch_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .to_string_lossy()
        .to_lowercase()
        .ends_with(NINE_PATCH_EXTENSION)
}

/// Name under which a bitmap is saved as a nine-patch.
///
/// Paths already ending in `.9.png` are kept, `name.png` becomes
/// `name.9.png`, and anything else gets `.9.png` appended.
pub fn nine_patch_file_name<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if is_nine_patch_path(path) {
        return path.to_path_buf();
    }
    let s = path.to_string_lossy();
    match s.strip_suffix(".png") {
        Some(stem) => PathBuf::from(format!("{stem}{NINE_PATCH_EXTENSION}")),
        None => PathBuf::from(format!("{s}{NINE_PATCH_EXTENSION}")),
    }
}
