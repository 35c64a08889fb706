use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{BoothError, BoothResult};

/// File form of the decorative overlay, as supplied by the UI layer.
///
/// Asset paths are resolved against an assets root by
/// [`OverlaySpec::from_config`](crate::OverlaySpec::from_config).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Header band height in pixels; `0` disables the band.
    pub header_height: f64,
    /// Footer band height in pixels; `0` disables the band.
    pub footer_height: f64,
    /// Band fill color.
    pub band_color: Rgba8,
    /// Band border color.
    pub border_color: Rgba8,
    /// Border width in pixels, drawn inside each band.
    pub border_width: f64,
    /// Logo image (PNG/JPEG/... or `.svg`), relative to the assets root.
    pub logo_path: Option<PathBuf>,
    /// Logo distance from the top-left corner.
    pub logo_inset: f64,
    /// Logo edge length; the logo is drawn as a square.
    pub logo_size: f64,
    /// Text centered in the header band.
    pub header_text: String,
    /// Up to two lines centered in the footer band.
    pub footer_lines: Vec<String>,
    /// TTF/OTF font file, relative to the assets root.
    pub font_path: Option<PathBuf>,
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Text fill color.
    pub text_color: Rgba8,
    /// Text shadow color.
    pub shadow_color: Rgba8,
    /// Shadow blur, in the same units as a 2D canvas `shadowBlur`; at most [`MAX_SHADOW_BLUR`].
    pub shadow_blur: f64,
    /// Shadow offset `[x, y]` in pixels.
    pub shadow_offset: [f64; 2],
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            header_height: 100.0,
            footer_height: 100.0,
            band_color: Rgba8::new(255, 255, 255, 204),
            border_color: Rgba8::opaque(0, 0, 0),
            border_width: 4.0,
            logo_path: None,
            logo_inset: 10.0,
            logo_size: 80.0,
            header_text: String::new(),
            footer_lines: Vec::new(),
            font_path: None,
            font_size_px: 28.0,
            text_color: Rgba8::opaque(255, 255, 255),
            shadow_color: Rgba8::new(0, 0, 0, 128),
            shadow_blur: 4.0,
            shadow_offset: [2.0, 2.0],
        }
    }
}

/// Most lines the footer band holds.
pub const MAX_FOOTER_LINES: usize = 2;

/// Largest accepted `shadow_blur`.
pub const MAX_SHADOW_BLUR: f64 = 64.0;

impl OverlayConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> BoothResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| BoothError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse, and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> BoothResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read overlay config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check sizes and line counts.
    pub fn validate(&self) -> BoothResult<()> {
        for (name, v) in [
            ("header_height", self.header_height),
            ("footer_height", self.footer_height),
            ("border_width", self.border_width),
            ("logo_inset", self.logo_inset),
            ("logo_size", self.logo_size),
            ("shadow_blur", self.shadow_blur),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(BoothError::validation(format!("{name} must be finite and >= 0")));
            }
        }
        if self.shadow_blur > MAX_SHADOW_BLUR {
            return Err(BoothError::validation(format!(
                "shadow_blur must be <= {MAX_SHADOW_BLUR} (got {})",
                self.shadow_blur
            )));
        }
        if !self.shadow_offset.iter().all(|v| v.is_finite()) {
            return Err(BoothError::validation("shadow_offset must be finite"));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(BoothError::validation("font_size_px must be finite and > 0"));
        }
        if self.footer_lines.len() > MAX_FOOTER_LINES {
            return Err(BoothError::validation(format!(
                "footer_lines holds at most {MAX_FOOTER_LINES} lines (got {})",
                self.footer_lines.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/config.rs"]
mod tests;
