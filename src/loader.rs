//! PNG loading into a [`PixelGrid`]
//!
//! Every PNG color type is normalized to 8-bit RGB:
//!
//! - Palette and low bit-depth images are expanded by the decoder
//! - 16-bit channels are stripped to their high byte
//! - Grayscale `v` becomes `(v, v, v)`
//! - Alpha is dropped without compositing

use crate::error::LoadError;
use pixel_lut::{PixelGrid, Rgb};
use std::path::Path;

/// Read and decode the PNG file at `path`
pub fn load_png(path: &Path) -> Result<PixelGrid, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let grid = decode_png(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "Decoded image"
    );
    Ok(grid)
}

/// Decode in-memory PNG data (first frame only)
pub fn decode_png(data: &[u8]) -> Result<PixelGrid, LoadError> {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    let width = info.width as usize;
    let height = info.height as usize;
    if info.bit_depth != png::BitDepth::Eight {
        return Err(LoadError::Unsupported(format!(
            "bit depth {:?} after normalization",
            info.bit_depth
        )));
    }

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(LoadError::Unsupported(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    let row_bytes = width * channels;
    let mut pixels = Vec::with_capacity(width * height);
    for row in buf[..info.buffer_size()]
        .chunks(info.line_size)
        .take(height)
    {
        let row = row.get(..row_bytes).ok_or_else(|| {
            LoadError::Decode(format!(
                "short row: expected {} bytes, got {}",
                row_bytes,
                row.len()
            ))
        })?;
        pixels.extend(row.chunks_exact(channels).map(to_rgb));
    }

    Ok(PixelGrid::new(width, height, pixels)?)
}

/// Map one normalized pixel (1 to 4 channels) to RGB
fn to_rgb(px: &[u8]) -> Rgb {
    match *px {
        [v] | [v, _] => Rgb::new(v, v, v),
        [r, g, b] | [r, g, b, _] => Rgb::new(r, g, b),
        _ => Rgb::default(),
    }
}
