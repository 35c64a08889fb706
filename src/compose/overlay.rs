use std::path::Path;

use anyhow::Context;

use crate::assets::decode::decode_logo;
use crate::assets::frame::PreparedImage;
use crate::assets::ready::Deferred;
use crate::assets::text::{FontFace, ShapedText, TextBrushRgba8, TextLayoutEngine, center_x};
use crate::compose::config::OverlayConfig;
use crate::compose::report::{LayerOutcome, OverlayReport};
use crate::foundation::core::{Rect, Rgba8, Vec2};
use crate::foundation::error::BoothResult;
use crate::render::blur::gaussian_blur_in_place;
use crate::render::painter::LayerPainter;
use crate::render::raster::RasterBuffer;

/// Decorative overlay drawn on top of every capture.
///
/// Immutable for the duration of a capture. The logo and font are [`Deferred`] handles: a capture
/// taken before they finish loading simply omits them.
#[derive(Clone, Debug)]
pub struct OverlaySpec {
    /// Header band height in pixels.
    pub header_height: f64,
    /// Footer band height in pixels.
    pub footer_height: f64,
    /// Band fill color.
    pub band_color: Rgba8,
    /// Band border color.
    pub border_color: Rgba8,
    /// Border width in pixels.
    pub border_width: f64,
    /// Logo drawn inside the header band.
    pub logo: Deferred<PreparedImage>,
    /// Logo distance from the top-left corner.
    pub logo_inset: f64,
    /// Logo edge length.
    pub logo_size: f64,
    /// Header text.
    pub header_text: String,
    /// Footer lines (at most two).
    pub footer_lines: Vec<String>,
    /// Font used for all overlay text.
    pub font: Deferred<FontFace>,
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Text fill color.
    pub text_color: Rgba8,
    /// Shadow color.
    pub shadow_color: Rgba8,
    /// Canvas-style shadow blur.
    pub shadow_blur: f64,
    /// Shadow offset in pixels.
    pub shadow_offset: Vec2,
}

impl Default for OverlaySpec {
    fn default() -> Self {
        Self::with_pending_assets(&OverlayConfig::default())
    }
}

impl OverlaySpec {
    /// An overlay that draws nothing.
    pub fn empty() -> Self {
        Self {
            header_height: 0.0,
            footer_height: 0.0,
            logo_size: 0.0,
            ..Self::default()
        }
    }

    /// Copy the plain fields of `cfg` and leave the logo and font pending.
    pub fn with_pending_assets(cfg: &OverlayConfig) -> Self {
        Self {
            header_height: cfg.header_height,
            footer_height: cfg.footer_height,
            band_color: cfg.band_color,
            border_color: cfg.border_color,
            border_width: cfg.border_width,
            logo: Deferred::pending(),
            logo_inset: cfg.logo_inset,
            logo_size: cfg.logo_size,
            header_text: cfg.header_text.clone(),
            footer_lines: cfg.footer_lines.clone(),
            font: Deferred::pending(),
            font_size_px: cfg.font_size_px,
            text_color: cfg.text_color,
            shadow_color: cfg.shadow_color,
            shadow_blur: cfg.shadow_blur,
            shadow_offset: Vec2::new(cfg.shadow_offset[0], cfg.shadow_offset[1]),
        }
    }

    /// Validate `cfg` and load its logo and font from `assets_root`.
    ///
    /// A logo or font that cannot be read or decoded is logged and left pending, so captures
    /// still succeed without it.
    pub fn from_config(cfg: &OverlayConfig, assets_root: impl AsRef<Path>) -> BoothResult<Self> {
        cfg.validate()?;
        let root = assets_root.as_ref();
        let spec = Self::with_pending_assets(cfg);

        if let Some(rel) = &cfg.logo_path {
            let path = root.join(rel);
            let box_px = cfg.logo_size.ceil().max(1.0) as u32;
            match load_logo(&path, box_px) {
                Ok(img) => spec.logo.fulfill(img)?,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "logo unavailable")
                }
            }
        }

        if let Some(rel) = &cfg.font_path {
            let path = root.join(rel);
            match std::fs::read(&path) {
                Ok(bytes) => spec.font.fulfill(FontFace::new(bytes))?,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "font unavailable")
                }
            }
        }

        Ok(spec)
    }
}

fn load_logo(path: &Path, box_px: u32) -> BoothResult<PreparedImage> {
    let bytes = std::fs::read(path).with_context(|| format!("read logo '{}'", path.display()))?;
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    decode_logo(&bytes, is_svg, box_px)
}

/// Draw header/footer bands, logo, and centered text onto `buffer`.
///
/// Never fails: elements whose resources are missing are left out and reported.
#[tracing::instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
pub fn draw_overlay(buffer: &mut RasterBuffer, spec: &OverlaySpec) -> OverlayReport {
    let mut report = OverlayReport {
        footer_lines: vec![LayerOutcome::Disabled; spec.footer_lines.len()],
        ..OverlayReport::default()
    };
    if buffer.size().is_empty() {
        return report;
    }

    if let Err(err) = draw_bands_and_logo(buffer, spec, &mut report) {
        tracing::warn!(error = %err, "overlay bands skipped");
        let reason = err.to_string();
        for outcome in [
            &mut report.header_band,
            &mut report.footer_band,
            &mut report.logo,
        ] {
            if outcome.is_drawn() {
                *outcome = LayerOutcome::Skipped(reason.clone());
            }
        }
    }

    draw_text(buffer, spec, &mut report);
    report
}

fn draw_bands_and_logo(
    buffer: &mut RasterBuffer,
    spec: &OverlaySpec,
    report: &mut OverlayReport,
) -> BoothResult<()> {
    let Some(mut painter) = LayerPainter::for_size(buffer.size())? else {
        return Ok(());
    };
    let width = f64::from(buffer.width());
    let height = f64::from(buffer.height());

    if spec.header_height > 0.0 {
        let band = Rect::new(0.0, 0.0, width, spec.header_height.min(height));
        paint_band(&mut painter, band, spec);
        report.header_band = LayerOutcome::Drawn;
    }
    if spec.footer_height > 0.0 {
        let band = Rect::new(0.0, (height - spec.footer_height).max(0.0), width, height);
        paint_band(&mut painter, band, spec);
        report.footer_band = LayerOutcome::Drawn;
    }

    if spec.logo_size > 0.0 {
        match spec.logo.require("logo") {
            Ok(logo) => {
                let rect = Rect::new(
                    spec.logo_inset,
                    spec.logo_inset,
                    spec.logo_inset + spec.logo_size,
                    spec.logo_inset + spec.logo_size,
                );
                painter.draw_image(&logo, rect)?;
                report.logo = LayerOutcome::Drawn;
            }
            Err(err) => {
                tracing::debug!(error = %err, "logo omitted");
                report.logo = LayerOutcome::Skipped(err.to_string());
            }
        }
    }

    painter.composite_onto(buffer)
}

/// Fill `band` and stroke its inner border.
fn paint_band(painter: &mut LayerPainter, band: Rect, spec: &OverlaySpec) {
    painter.fill_rect(band, spec.band_color);

    let bw = spec.border_width.min(band.width() / 2.0).min(band.height() / 2.0);
    if bw <= 0.0 {
        return;
    }
    let edges = [
        Rect::new(band.x0, band.y0, band.x1, band.y0 + bw),
        Rect::new(band.x0, band.y1 - bw, band.x1, band.y1),
        Rect::new(band.x0, band.y0 + bw, band.x0 + bw, band.y1 - bw),
        Rect::new(band.x1 - bw, band.y0 + bw, band.x1, band.y1 - bw),
    ];
    for edge in edges {
        painter.fill_rect(edge, spec.border_color);
    }
}

struct PlacedLine {
    shaped: ShapedText,
    origin: Vec2,
}

fn draw_text(buffer: &mut RasterBuffer, spec: &OverlaySpec, report: &mut OverlayReport) {
    // Text is only laid out inside a band that is actually drawn.
    let header = (spec.header_height > 0.0 && !spec.header_text.is_empty())
        .then_some(spec.header_text.as_str());
    let footer: Vec<(usize, &str)> = if spec.footer_height > 0.0 {
        spec.footer_lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| (idx, line.as_str()))
            .collect()
    } else {
        Vec::new()
    };
    if header.is_none() && footer.is_empty() {
        return;
    }

    let font = match spec.font.require("overlay font") {
        Ok(font) => font,
        Err(err) => {
            tracing::debug!(error = %err, "overlay text omitted");
            let reason = err.to_string();
            if header.is_some() {
                report.header_text = LayerOutcome::Skipped(reason.clone());
            }
            for &(idx, _) in &footer {
                report.footer_lines[idx] = LayerOutcome::Skipped(reason.clone());
            }
            return;
        }
    };

    let width = f64::from(buffer.width());
    let height = f64::from(buffer.height());
    let brush = TextBrushRgba8::from(spec.text_color);
    let mut engine = TextLayoutEngine::new();
    let mut placed = Vec::<PlacedLine>::new();

    if let Some(text) = header {
        match engine.shape_line(text, &font, spec.font_size_px, brush) {
            Ok(shaped) => {
                let origin = Vec2::new(
                    center_x(width, shaped.width),
                    (spec.header_height - shaped.height) / 2.0,
                );
                placed.push(PlacedLine { shaped, origin });
                report.header_text = LayerOutcome::Drawn;
            }
            Err(err) => {
                tracing::warn!(error = %err, "header text skipped");
                report.header_text = LayerOutcome::Skipped(err.to_string());
            }
        }
    }

    let mut stack = Vec::<(usize, ShapedText)>::new();
    for (idx, line) in footer {
        match engine.shape_line(line, &font, spec.font_size_px, brush) {
            Ok(shaped) => stack.push((idx, shaped)),
            Err(err) => {
                tracing::warn!(line = idx, error = %err, "footer line skipped");
                report.footer_lines[idx] = LayerOutcome::Skipped(err.to_string());
            }
        }
    }
    let stack_height: f64 = stack.iter().map(|(_, s)| s.height).sum();
    let mut y = height - spec.footer_height + (spec.footer_height - stack_height) / 2.0;
    for (idx, shaped) in stack {
        let origin = Vec2::new(center_x(width, shaped.width), y);
        y += shaped.height;
        placed.push(PlacedLine { shaped, origin });
        report.footer_lines[idx] = LayerOutcome::Drawn;
    }

    if placed.is_empty() {
        return;
    }
    if let Err(err) = paint_text_layers(buffer, spec, &font, &placed) {
        tracing::warn!(error = %err, "overlay text skipped");
        let reason = err.to_string();
        let outcomes = std::iter::once(&mut report.header_text).chain(&mut report.footer_lines);
        for outcome in outcomes {
            if outcome.is_drawn() {
                *outcome = LayerOutcome::Skipped(reason.clone());
            }
        }
    }
}

fn paint_text_layers(
    buffer: &mut RasterBuffer,
    spec: &OverlaySpec,
    font: &FontFace,
    placed: &[PlacedLine],
) -> BoothResult<()> {
    if !spec.shadow_color.is_invisible() {
        if let Err(err) = paint_text_shadow(buffer, spec, font, placed) {
            tracing::warn!(error = %err, "text shadow skipped");
        }
    }

    let Some(mut painter) = LayerPainter::for_size(buffer.size())? else {
        return Ok(());
    };
    for line in placed {
        painter.fill_text(&line.shaped, font, line.origin, spec.text_color);
    }
    painter.composite_onto(buffer)
}

/// Offset, blurred copy of the glyphs; leaves `buffer` untouched on failure.
fn paint_text_shadow(
    buffer: &mut RasterBuffer,
    spec: &OverlaySpec,
    font: &FontFace,
    placed: &[PlacedLine],
) -> BoothResult<()> {
    let mut shadow = RasterBuffer::new(buffer.width(), buffer.height())?;
    let Some(mut painter) = LayerPainter::for_size(shadow.size())? else {
        return Ok(());
    };
    for line in placed {
        let origin = line.origin + spec.shadow_offset;
        painter.fill_text(&line.shaped, font, origin, spec.shadow_color);
    }
    painter.composite_onto(&mut shadow)?;
    // Canvas shadowBlur is twice the gaussian standard deviation.
    gaussian_blur_in_place(&mut shadow, spec.shadow_blur / 2.0)?;
    buffer.composite_over(shadow.data())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/overlay.rs"]
mod tests;
