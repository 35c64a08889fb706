use std::sync::Arc;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{BoothError, BoothResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Raw font file bytes (TTF/OTF) used for overlay text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontFace {
    /// Font file contents.
    pub bytes: Arc<Vec<u8>>,
}

impl FontFace {
    /// Wrap font file bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::new(bytes),
        }
    }
}

/// One shaped line of text with its measured extent.
pub struct ShapedText {
    /// Parley layout holding positioned glyph runs.
    pub layout: parley::Layout<TextBrushRgba8>,
    /// Measured advance of the widest line, in pixels.
    pub width: f64,
    /// Sum of line heights (ascent + descent + leading), in pixels.
    pub height: f64,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape a single unwrapped line and measure it.
    pub fn shape_line(
        &mut self,
        text: &str,
        font: &FontFace,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> BoothResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BoothError::validation("text size_px must be finite and > 0"));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            BoothError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BoothError::validation("registered font family has no name"))?
            .to_string();

        let mut builder = self.layout_ctx.ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let mut width = 0.0f64;
        let mut height = 0.0f64;
        for line in layout.lines() {
            let m = line.metrics();
            width = width.max(f64::from(m.advance));
            height += f64::from(m.ascent + m.descent + m.leading);
        }

        Ok(ShapedText {
            layout,
            width,
            height,
        })
    }
}

/// Left edge that horizontally centers text of `text_width` in a buffer of `buffer_width`.
///
/// Negative when the text is wider than the buffer; the text then renders clipped on both sides.
pub fn center_x(buffer_width: f64, text_width: f64) -> f64 {
    (buffer_width - text_width) / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
