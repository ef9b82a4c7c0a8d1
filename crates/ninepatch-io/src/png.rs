//! PNG image format support
//!
//! Every PNG colour type is decoded into the 32-bit RGBA layout of
//! [`Pix`]. Palette and low-bit grayscale images are expanded by the
//! decoder (including `tRNS` transparency), 16-bit samples keep their
//! high byte. Output is always 8-bit RGBA so border markers survive a
//! save/load cycle exactly.

use crate::{IoError, IoResult};
use ninepatch_core::{ImageFormat, Pix, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpanded PNG palette at {:?}",
                bit_depth
            )));
        }
    };
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpanded PNG bit depth: {:?} {:?}",
                color_type, other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let stride = samples * bytes_per_sample;
    if bytes_per_row < width as usize * stride {
        return Err(IoError::InvalidData(format!(
            "PNG row of {} bytes is too short for {} pixels",
            bytes_per_row, width
        )));
    }

    let mut pix_mut = Pix::new(width, height)?.into_mut();
    pix_mut.set_informat(ImageFormat::Png);

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        let dst = pix_mut.row_data_mut(y);
        for (x, out) in dst.iter_mut().enumerate() {
            let idx = row_start + x * stride;
            // High byte of each sample, whatever the sample width.
            let s = |i: usize| data[idx + i * bytes_per_sample];
            *out = match samples {
                1 => color::compose_rgb(s(0), s(0), s(0)),
                2 => color::compose_rgba(s(0), s(0), s(0), s(1)),
                3 => color::compose_rgb(s(0), s(1), s(2)),
                _ => color::compose_rgba(s(0), s(1), s(2), s(3)),
            };
        }
    }

    log::debug!(
        "decoded PNG {}x{} ({:?}, {:?})",
        width,
        height,
        color_type,
        bit_depth
    );
    Ok(pix_mut.into())
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for &pixel in pix.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
