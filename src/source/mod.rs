//! Read-only pixel sources the compositor observes: decoded frames and the live camera feed.

use crate::foundation::core::{FrameSize, Rect};
use crate::foundation::error::BoothResult;
use crate::render::raster::RasterBuffer;

/// Camera feed with front/back switching.
pub mod camera;
mod frame;

/// A rectangular image with intrinsic dimensions that can be drawn into a destination rectangle.
///
/// Intrinsic dimensions are queried at draw time because they may change between captures
/// (device switch). A source with no frame yet reports `0`.
pub trait PixelSource {
    /// Intrinsic width in pixels, `0` when unavailable.
    fn intrinsic_width(&self) -> u32;

    /// Intrinsic height in pixels, `0` when unavailable.
    fn intrinsic_height(&self) -> u32;

    /// Draw the current frame scaled to cover `rect` in `dst`.
    fn draw_into(&self, dst: &mut RasterBuffer, rect: Rect) -> BoothResult<()>;

    /// Both intrinsic dimensions.
    fn intrinsic_size(&self) -> FrameSize {
        FrameSize::new(self.intrinsic_width(), self.intrinsic_height())
    }
}
