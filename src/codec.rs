//! PNG rasterization and data-URI transport for pixel grids.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::color::Color;
use crate::edit::Point;
use crate::grid::{GridError, PixelGrid};

/// Prefix of the data URIs carrying PNG bytes across the surface boundary.
/// Always strip this constant rather than a hard-coded length.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("not a PNG data uri")]
    MalformedDataUri,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Decodes PNG bytes into a grid, one cell per source pixel. No scaling is
/// performed and alpha is preserved.
pub fn decode_png(bytes: &[u8]) -> Result<PixelGrid, CodecError> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(CodecError::Decode)?
        .into_rgba8();
    log::debug!("decoded {}x{} image", img.width(), img.height());

    let mut grid = PixelGrid::new(img.width(), img.height())?;
    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        grid.set(Point::new(x as i32, y as i32), Color::new(r, g, b, a));
    }
    Ok(grid)
}

/// Encodes a grid to PNG bytes, one image pixel per grid cell.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, CodecError> {
    let mut img = RgbaImage::new(grid.width(), grid.height());
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = grid.get(Point::new(x as i32, y as i32))?;
        *pixel = image::Rgba(color.into());
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(CodecError::Encode)?;
    Ok(bytes)
}

/// Packs raw PNG bytes into the transport data URI.
pub fn to_data_uri(bytes: &[u8]) -> String {
    format!("{DATA_URI_PREFIX}{}", STANDARD.encode(bytes))
}

/// Unpacks a transport data URI back into raw PNG bytes.
pub fn from_data_uri(uri: &str) -> Result<Vec<u8>, CodecError> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or(CodecError::MalformedDataUri)?;
    Ok(STANDARD.decode(payload)?)
}
