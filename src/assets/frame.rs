use std::sync::Arc;

use crate::foundation::core::{FrameSize, Rgba8};
use crate::foundation::error::{BoothError, BoothResult};
use crate::foundation::math::premultiply_rgba8_in_place;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Decoded raster in premultiplied RGBA8 form.
///
/// Used for camera frames, render-surface snapshots, and the overlay logo. Pixel data is shared
/// behind an `Arc`, so clones are cheap.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Wrap already premultiplied bytes, validating the length.
    pub fn from_premul_rgba8(width: u32, height: u32, bytes: Vec<u8>) -> BoothResult<Self> {
        let expected = FrameSize::new(width, height).rgba8_len()?;
        if bytes.len() != expected {
            return Err(BoothError::invalid_dimensions(format!(
                "image byte len {} does not match {width}x{height}",
                bytes.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(bytes),
        })
    }

    /// Premultiply straight RGBA8 bytes and wrap them.
    pub fn from_straight_rgba8(width: u32, height: u32, mut bytes: Vec<u8>) -> BoothResult<Self> {
        premultiply_rgba8_in_place(&mut bytes);
        Self::from_premul_rgba8(width, height, bytes)
    }

    /// A single-color image.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> BoothResult<Self> {
        let len = FrameSize::new(width, height).rgba8_len()?;
        let px = color.premultiplied().to_array();
        let mut bytes = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            bytes.extend_from_slice(&px);
        }
        Self::from_premul_rgba8(width, height, bytes)
    }

    /// Pixel dimensions.
    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }
}
