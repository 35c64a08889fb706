use crate::foundation::core::Rect;
use crate::foundation::error::{BoothError, BoothResult};

/// Where a source should be drawn inside a destination to preserve its aspect ratio.
///
/// The placement is a contain-fit: the source is never cropped, and the margins on the
/// non-fitting axis are split evenly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterboxPlacement {
    /// Width of the drawn source in destination pixels.
    pub draw_width: f64,
    /// Height of the drawn source in destination pixels.
    pub draw_height: f64,
    /// Left margin.
    pub x_offset: f64,
    /// Top margin.
    pub y_offset: f64,
}

impl LetterboxPlacement {
    /// Destination rectangle covered by the source.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x_offset,
            self.y_offset,
            self.x_offset + self.draw_width,
            self.y_offset + self.draw_height,
        )
    }

    /// `true` when the placement leaves no margin on either axis.
    pub fn fills_destination(&self) -> bool {
        self.x_offset == 0.0 && self.y_offset == 0.0
    }
}

/// Compute a contain-fit placement of a `source_width x source_height` source inside a
/// `dest_width x dest_height` destination.
///
/// Fails with [`BoothError::InvalidDimensions`] when any side is zero, negative, or non-finite,
/// which is what a camera reports before its stream metadata is available.
pub fn compute_placement(
    source_width: f64,
    source_height: f64,
    dest_width: f64,
    dest_height: f64,
) -> BoothResult<LetterboxPlacement> {
    for (name, v) in [
        ("source width", source_width),
        ("source height", source_height),
        ("destination width", dest_width),
        ("destination height", dest_height),
    ] {
        if !v.is_finite() || v <= 0.0 {
            return Err(BoothError::invalid_dimensions(format!(
                "{name} must be finite and > 0 (got {v})"
            )));
        }
    }

    // Compare aspect ratios without dividing so equal ratios hit the exact path.
    let source_span = source_width * dest_height;
    let dest_span = dest_width * source_height;

    if source_span == dest_span {
        return Ok(LetterboxPlacement {
            draw_width: dest_width,
            draw_height: dest_height,
            x_offset: 0.0,
            y_offset: 0.0,
        });
    }

    if source_span > dest_span {
        let draw_height = dest_width * source_height / source_width;
        Ok(LetterboxPlacement {
            draw_width: dest_width,
            draw_height,
            x_offset: 0.0,
            y_offset: (dest_height - draw_height) / 2.0,
        })
    } else {
        let draw_width = dest_height * source_width / source_height;
        Ok(LetterboxPlacement {
            draw_width,
            draw_height: dest_height,
            x_offset: (dest_width - draw_width) / 2.0,
            y_offset: 0.0,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/letterbox.rs"]
mod tests;
