//! JPEG encoding straight into the final output path

use std::io::{self, Write};
use std::path::Path;

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};

use crate::common::fs::write_atomic;
use crate::error::{self, Result};

/// Encode `img` as a JPEG at `quality` into `output`, returning the output size in bytes.
///
/// Huffman tables are optimized for the image. The encoder writes into a
/// temp file next to `output`; a failed encode leaves neither a partial
/// output nor the temp file behind.
pub fn write_jpeg(img: &RgbImage, quality: u8, output: &Path) -> Result<u64> {
    write_atomic(output, |out| encode(img, quality, true, out))
        .map_err(|e| error::image::encode_failed(output.display().to_string(), e.to_string()))?;

    let size = std::fs::metadata(output)
        .map_err(|e| error::fs::read_failed(output.display().to_string(), e.to_string()))?
        .len();
    Ok(size)
}

fn encode(img: &RgbImage, quality: u8, optimize: bool, out: &mut dyn Write) -> io::Result<()> {
    let too_large = |_| io::Error::other("image is too large for JPEG (65535 pixels max)");
    let width = u16::try_from(img.width()).map_err(too_large)?;
    let height = u16::try_from(img.height()).map_err(too_large)?;

    let mut encoder = Encoder::new(out, quality);
    encoder.set_optimized_huffman_tables(optimize);
    encoder
        .encode(img.as_raw(), width, height, ColorType::Rgb)
        .map_err(io::Error::other)
}
