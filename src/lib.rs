//! arbooth is the frame compositing core of an AR photobooth.
//!
//! On each capture it draws, back to front, a letterboxed live camera frame, a snapshot of the 3D
//! render surface, and a decorative header/footer overlay into one premultiplied RGBA8 buffer,
//! then encodes that buffer as PNG and offers it to a download target.
//!
//! - Build an [`OverlaySpec`] (directly or from an [`OverlayConfig`] JSON file)
//! - Create a [`CaptureContext`] per capture from a [`PixelSource`] camera and a snapshot closure
//! - Call [`capture`] with a [`CaptureMode`] and a [`DownloadSink`]
//!
//! Optional visuals (camera, logo, text) degrade gracefully when unavailable; only encoding and
//! the download offer can fail a capture.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

/// Capture-time compositing.
pub mod compose;
/// Encoding and download targets.
pub mod export;
/// Placement math.
pub mod geometry;
/// Raster surfaces.
pub mod render;
/// Pixel sources.
pub mod source;

pub use crate::foundation::core::{Affine, FrameSize, Point, Rect, Rgba8, Rgba8Premul, Vec2};
pub use crate::foundation::error::{BoothError, BoothResult};

pub use crate::assets::decode::{decode_image, decode_logo, parse_svg, rasterize_svg};
pub use crate::assets::frame::PreparedImage;
pub use crate::assets::ready::Deferred;
pub use crate::assets::text::{FontFace, ShapedText, TextBrushRgba8, TextLayoutEngine, center_x};

pub use crate::compose::compositor::{CaptureContext, RenderSnapshot, compose};
pub use crate::compose::config::{MAX_FOOTER_LINES, MAX_SHADOW_BLUR, OverlayConfig};
pub use crate::compose::overlay::{OverlaySpec, draw_overlay};
pub use crate::compose::report::{CompositeReport, LayerOutcome, OverlayReport};
pub use crate::export::capture::{CaptureMode, CaptureResult, capture};
pub use crate::export::png::{EncodedImage, encode_png};
pub use crate::export::sink::{DirectoryDownloads, DownloadSink, InMemoryDownloads};
pub use crate::geometry::letterbox::{LetterboxPlacement, compute_placement};
pub use crate::render::raster::RasterBuffer;
pub use crate::source::PixelSource;
pub use crate::source::camera::{CameraDevice, CameraFacing, CameraFeed};
