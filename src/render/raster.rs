use crate::foundation::core::{FrameSize, Rgba8Premul};
use crate::foundation::error::BoothResult;
use crate::foundation::math::{over_in_place, unpremultiply_rgba8_in_place};

/// Owned, mutable premultiplied RGBA8 surface that every compositing layer writes into.
///
/// Created fresh per capture and consumed once by the export step. Dimensions are limited to the
/// `u16` range supported by the rasterizer; zero-size buffers are allowed and simply receive no
/// layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    size: FrameSize,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Allocate a transparent buffer.
    pub fn new(width: u32, height: u32) -> BoothResult<Self> {
        let size = FrameSize::new(width, height);
        size.to_u16()?;
        let len = size.rgba8_len()?;
        Ok(Self {
            size,
            data: vec![0; len],
        })
    }

    /// Pixel dimensions.
    pub fn size(&self) -> FrameSize {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Read one pixel; `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = ((y as usize) * (self.size.width as usize) + (x as usize)) * 4;
        let px = &self.data[idx..idx + 4];
        Some(Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Source-over a same-sized premultiplied layer onto this buffer.
    pub(crate) fn composite_over(&mut self, layer: &[u8]) -> BoothResult<()> {
        over_in_place(&mut self.data, layer)
    }

    /// Copy of the pixels with alpha divided back out, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
