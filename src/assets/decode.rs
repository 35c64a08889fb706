use anyhow::Context;

use crate::{
    assets::frame::PreparedImage,
    foundation::error::{BoothError, BoothResult},
};

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> BoothResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PreparedImage::from_straight_rgba8(width, height, rgba.into_raw())
}

/// Parse SVG bytes into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> BoothResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize an SVG tree into a `width x height` premultiplied image, scaling it to fill the box.
pub fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> BoothResult<PreparedImage> {
    let size = tree.size();
    if !(size.width() > 0.0 && size.height() > 0.0) {
        return Err(BoothError::invalid_dimensions("svg has invalid width/height"));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BoothError::invalid_dimensions("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    // tiny-skia pixmaps are already premultiplied RGBA8.
    PreparedImage::from_premul_rgba8(width, height, pixmap.data().to_vec())
}

/// Decode a logo from bytes, rasterizing SVG input at the requested box size.
pub fn decode_logo(bytes: &[u8], is_svg: bool, box_px: u32) -> BoothResult<PreparedImage> {
    if is_svg {
        let tree = parse_svg(bytes)?;
        rasterize_svg(&tree, box_px.max(1), box_px.max(1))
    } else {
        decode_image(bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
