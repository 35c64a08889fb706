use crate::compose::compositor::CaptureContext;
use crate::compose::overlay::OverlaySpec;
use crate::compose::report::CompositeReport;
use crate::export::png::{EncodedImage, encode_png};
use crate::export::sink::DownloadSink;
use crate::foundation::error::BoothResult;

/// What the user asked to capture. Both modes composite the same layers; they differ only in the
/// offered filename.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    /// Screenshot button.
    Screenshot,
    /// Photo button.
    Photo,
}

impl CaptureMode {
    /// Fixed download filename.
    pub fn filename(self) -> &'static str {
        match self {
            Self::Screenshot => "screenshot.png",
            Self::Photo => "captured-photo-with-model.png",
        }
    }
}

/// Outcome of a successful capture.
#[derive(Clone, Debug)]
pub struct CaptureResult {
    /// Filename the image was offered under.
    pub filename: &'static str,
    /// Encoded image.
    pub image: EncodedImage,
    /// Which layers made it into the image.
    pub layers: CompositeReport,
}

/// Compose, encode, and offer one capture.
///
/// Layer problems only degrade the image. Encoding and sink failures are returned, and nothing is
/// offered when encoding fails.
#[tracing::instrument(skip_all, fields(mode = ?mode))]
pub fn capture(
    mode: CaptureMode,
    ctx: &mut CaptureContext<'_>,
    overlay: &OverlaySpec,
    sink: &mut dyn DownloadSink,
) -> BoothResult<CaptureResult> {
    let layers = ctx.compose(overlay);
    let image = encode_png(ctx.buffer())?;
    let filename = mode.filename();
    sink.offer(filename, &image)?;
    tracing::debug!(filename, bytes = image.bytes.len(), "capture offered");
    Ok(CaptureResult {
        filename,
        image,
        layers,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/capture.rs"]
mod tests;
