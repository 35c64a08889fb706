use crate::assets::frame::PreparedImage;
use crate::foundation::core::Rect;
use crate::foundation::error::BoothResult;
use crate::render::painter::LayerPainter;
use crate::render::raster::RasterBuffer;
use crate::source::PixelSource;

impl PixelSource for PreparedImage {
    fn intrinsic_width(&self) -> u32 {
        self.width
    }

    fn intrinsic_height(&self) -> u32 {
        self.height
    }

    fn draw_into(&self, dst: &mut RasterBuffer, rect: Rect) -> BoothResult<()> {
        let Some(mut painter) = LayerPainter::for_size(dst.size())? else {
            return Ok(());
        };
        painter.draw_image(self, rect)?;
        painter.composite_onto(dst)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/frame.rs"]
mod tests;
