use crate::assets::frame::PreparedImage;
use crate::compose::overlay::{OverlaySpec, draw_overlay};
use crate::compose::report::{CompositeReport, LayerOutcome};
use crate::foundation::error::{BoothError, BoothResult};
use crate::geometry::letterbox::compute_placement;
use crate::render::raster::RasterBuffer;
use crate::source::PixelSource;

/// Snapshot of the 3D render surface, taken at draw time.
pub type RenderSnapshot<'a> = dyn FnMut() -> BoothResult<PreparedImage> + 'a;

/// Composite one frame into `buffer`, back to front:
/// letterboxed camera, stretched render surface, decorative overlay.
///
/// Never fails. A layer whose source is unavailable is skipped, logged, and reported.
#[tracing::instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
pub fn compose(
    buffer: &mut RasterBuffer,
    camera: &dyn PixelSource,
    render_snapshot: &mut RenderSnapshot<'_>,
    overlay: &OverlaySpec,
) -> CompositeReport {
    buffer.clear();

    let camera_outcome = match draw_camera(buffer, camera) {
        Ok(()) => LayerOutcome::Drawn,
        Err(err) => {
            tracing::warn!(error = %err, "camera layer skipped");
            LayerOutcome::Skipped(err.to_string())
        }
    };

    let render_outcome = match draw_render_surface(buffer, render_snapshot) {
        Ok(()) => LayerOutcome::Drawn,
        Err(err) => {
            tracing::warn!(error = %err, "render surface layer skipped");
            LayerOutcome::Skipped(err.to_string())
        }
    };

    let overlay_report = draw_overlay(buffer, overlay);

    CompositeReport {
        camera: camera_outcome,
        render_surface: render_outcome,
        overlay: overlay_report,
    }
}

fn draw_camera(buffer: &mut RasterBuffer, camera: &dyn PixelSource) -> BoothResult<()> {
    let src = camera.intrinsic_size();
    if src.is_empty() {
        return Err(BoothError::invalid_dimensions(format!(
            "camera reports {}x{}",
            src.width, src.height
        )));
    }
    let dst = buffer.size();
    let placement = compute_placement(
        f64::from(src.width),
        f64::from(src.height),
        f64::from(dst.width),
        f64::from(dst.height),
    )?;
    tracing::debug!(
        draw_width = placement.draw_width,
        draw_height = placement.draw_height,
        x_offset = placement.x_offset,
        y_offset = placement.y_offset,
        "camera placement"
    );
    camera.draw_into(buffer, placement.rect())
}

fn draw_render_surface(
    buffer: &mut RasterBuffer,
    render_snapshot: &mut RenderSnapshot<'_>,
) -> BoothResult<()> {
    let snapshot = render_snapshot()?;
    if snapshot.size().is_empty() {
        return Err(BoothError::invalid_dimensions("render surface snapshot is empty"));
    }
    let rect = buffer.size().to_rect();
    snapshot.draw_into(buffer, rect)
}

/// Everything one capture needs: a fresh destination buffer, the camera, and the render surface.
///
/// Owns its buffer exclusively; sources are only observed.
pub struct CaptureContext<'a> {
    buffer: RasterBuffer,
    camera: &'a dyn PixelSource,
    render_snapshot: Box<RenderSnapshot<'a>>,
}

impl<'a> CaptureContext<'a> {
    /// Allocate a transparent `width x height` buffer bound to `camera` and `render_snapshot`.
    pub fn new(
        width: u32,
        height: u32,
        camera: &'a dyn PixelSource,
        render_snapshot: impl FnMut() -> BoothResult<PreparedImage> + 'a,
    ) -> BoothResult<Self> {
        Ok(Self {
            buffer: RasterBuffer::new(width, height)?,
            camera,
            render_snapshot: Box::new(render_snapshot),
        })
    }

    /// Run [`compose`] on this context's buffer.
    pub fn compose(&mut self, overlay: &OverlaySpec) -> CompositeReport {
        compose(
            &mut self.buffer,
            self.camera,
            self.render_snapshot.as_mut(),
            overlay,
        )
    }

    /// The destination buffer.
    pub fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }

    /// Take the destination buffer.
    pub fn into_buffer(self) -> RasterBuffer {
        self.buffer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
