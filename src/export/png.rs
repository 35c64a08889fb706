use std::io::Cursor;

use crate::foundation::error::{BoothError, BoothResult};
use crate::render::raster::RasterBuffer;

/// Encoded PNG bytes plus the pixel dimensions they describe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// PNG file contents.
    pub bytes: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Encode `buffer` as a straight-alpha RGBA8 PNG.
///
/// Fails with [`BoothError::Encoding`] for a zero-size buffer or if the encoder rejects the data.
#[tracing::instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
pub fn encode_png(buffer: &RasterBuffer) -> BoothResult<EncodedImage> {
    let size = buffer.size();
    if size.is_empty() {
        return Err(BoothError::encoding(format!(
            "cannot encode a {}x{} buffer",
            size.width, size.height
        )));
    }

    let img = image::RgbaImage::from_raw(size.width, size.height, buffer.to_straight_rgba8())
        .ok_or_else(|| BoothError::encoding("buffer length does not match its dimensions"))?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| BoothError::encoding(format!("png: {e}")))?;

    tracing::debug!(bytes = bytes.len(), "encoded png");
    Ok(EncodedImage {
        bytes,
        width: size.width,
        height: size.height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
