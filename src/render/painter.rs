use std::sync::Arc;

use crate::assets::frame::PreparedImage;
use crate::assets::text::{FontFace, ShapedText};
use crate::foundation::core::{Affine, FrameSize, Rect, Rgba8, Vec2};
use crate::foundation::error::BoothResult;
use crate::render::raster::RasterBuffer;

/// Draws one layer with `vello_cpu` into a private surface and then source-overs it onto a
/// [`RasterBuffer`].
///
/// Each layer gets its own surface so that layer order is decided by the compositor alone.
pub(crate) struct LayerPainter {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl LayerPainter {
    /// A painter sized like `size`, or `None` for an empty size (nothing could be drawn).
    pub(crate) fn for_size(size: FrameSize) -> BoothResult<Option<Self>> {
        if size.is_empty() {
            return Ok(None);
        }
        let (width, height) = size.to_u16()?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.reset();
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(Some(Self { ctx, width, height }))
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        if color.is_invisible() || rect.is_zero_area() {
            return;
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Draw `image` scaled to exactly cover `rect`.
    pub(crate) fn draw_image(&mut self, image: &PreparedImage, rect: Rect) -> BoothResult<()> {
        if image.size().is_empty() || rect.is_zero_area() {
            return Ok(());
        }
        let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        let w = f64::from(image.width);
        let h = f64::from(image.height);
        let tr = Affine::translate(Vec2::new(rect.x0, rect.y0))
            * Affine::scale_non_uniform(rect.width() / w, rect.height() / h);

        self.ctx.set_transform(affine_to_cpu(tr));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        Ok(())
    }

    /// Fill the glyphs of `text` with its top-left corner at `origin`.
    ///
    /// `color` overrides the layout brush so the same shaping serves both shadow and text.
    pub(crate) fn fill_text(
        &mut self,
        text: &ShapedText,
        font: &FontFace,
        origin: Vec2,
        color: Rgba8,
    ) {
        if color.is_invisible() {
            return;
        }
        let blob = vello_cpu::peniko::Blob::from(font.bytes.to_vec());
        let font = vello_cpu::peniko::FontData::new(blob, 0);
        self.ctx.set_transform(affine_to_cpu(Affine::translate(origin)));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        for line in text.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize everything drawn so far and return the premultiplied layer bytes.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }

    /// Rasterize and source-over the layer onto `dst`.
    pub(crate) fn composite_onto(self, dst: &mut RasterBuffer) -> BoothResult<()> {
        let layer = self.finish();
        dst.composite_over(&layer)
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> BoothResult<vello_cpu::Pixmap> {
    let (w, h) = FrameSize::new(width, height).to_u16()?;
    if bytes.len() != FrameSize::new(width, height).rgba8_len()? {
        return Err(crate::BoothError::invalid_dimensions("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}
