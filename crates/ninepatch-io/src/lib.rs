//! ninepatch-io - Image I/O for the nine-patch library
//!
//! PNG is the only container a nine-patch lives in, so this crate reads
//! and writes PNG through the `png` crate and knows the `.9.png` naming
//! rules.
//!
//! # Example
//!
//! ```no_run
//! use ninepatch_io::{ImageFormat, read_image, write_image};
//!
//! let pix = read_image("button.9.png").unwrap();
//! write_image(&pix, "copy.9.png", ImageFormat::Png).unwrap();
//! ```

mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{
    NINE_PATCH_EXTENSION, detect_format, detect_format_from_bytes, is_nine_patch_path,
    nine_patch_file_name,
};
pub use ninepatch_core::ImageFormat;

use ninepatch_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    match detect_format(path)? {
        ImageFormat::Png => {
            let file = File::open(path)?;
            let pix = crate::png::read_png(BufReader::new(file))?;
            log::debug!(
                "read {} ({}x{})",
                path.display(),
                pix.width(),
                pix.height()
            );
            Ok(pix)
        }
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Read an image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    match detect_format_from_bytes(data)? {
        ImageFormat::Png => crate::png::read_png(Cursor::new(data)),
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat("in-memory image".to_string())),
    }
}

/// Write an image to a file path
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    match format {
        ImageFormat::Png => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            crate::png::write_png(pix, &mut writer)?;
            writer.flush()?;
            log::debug!("wrote {}", path.display());
            Ok(())
        }
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(format!(
            "cannot write {} without a format",
            path.display()
        ))),
    }
}

/// Write an image to memory
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    match format {
        ImageFormat::Png => {
            let mut buffer = Vec::new();
            crate::png::write_png(pix, &mut buffer)?;
            Ok(buffer)
        }
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(
            "cannot encode without a format".to_string(),
        )),
    }
}
