use crate::assets::frame::PreparedImage;
use crate::foundation::core::Rect;
use crate::foundation::error::BoothResult;
use crate::render::raster::RasterBuffer;
use crate::source::PixelSource;

/// Which physical camera the feed uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraFacing {
    /// Front camera, facing the user.
    User,
    /// Back camera, facing the scene.
    #[default]
    Environment,
}

impl CameraFacing {
    /// The other camera.
    pub fn toggled(self) -> Self {
        match self {
            Self::User => Self::Environment,
            Self::Environment => Self::User,
        }
    }
}

/// Platform camera owned by the host application.
///
/// Frames are not pulled through this trait; the host pushes them into [`CameraFeed::push_frame`]
/// as they arrive.
pub trait CameraDevice {
    /// Start streaming from the camera with the given facing.
    fn start(&mut self, facing: CameraFacing) -> BoothResult<()>;

    /// Stop streaming. Stopping an idle device is a no-op.
    fn stop(&mut self);
}

/// Latest frame of the live camera stream plus the facing it came from.
///
/// Reports `0x0` until the first frame after a start or switch has been pushed, so a capture
/// that races camera startup composites without the camera layer.
#[derive(Debug, Clone, Default)]
pub struct CameraFeed {
    facing: CameraFacing,
    streaming: bool,
    frame: Option<PreparedImage>,
}

impl CameraFeed {
    /// An idle feed that will use `facing` when started.
    pub fn new(facing: CameraFacing) -> Self {
        Self {
            facing,
            streaming: false,
            frame: None,
        }
    }

    /// Currently selected camera.
    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    /// `true` after a successful start and until stop or a failed switch.
    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Latest frame, if one has arrived.
    pub fn current_frame(&self) -> Option<&PreparedImage> {
        self.frame.as_ref()
    }

    /// Start the device with the current facing.
    pub fn start(&mut self, device: &mut dyn CameraDevice) -> BoothResult<()> {
        self.frame = None;
        self.streaming = false;
        device.start(self.facing)?;
        self.streaming = true;
        tracing::debug!(facing = ?self.facing, "camera started");
        Ok(())
    }

    /// Replace the latest frame. Frames pushed while stopped are ignored.
    pub fn push_frame(&mut self, frame: PreparedImage) {
        if self.streaming {
            self.frame = Some(frame);
        }
    }

    /// Stop the device and drop the latest frame.
    pub fn stop(&mut self, device: &mut dyn CameraDevice) {
        device.stop();
        self.streaming = false;
        self.frame = None;
    }

    /// Switch to the opposite camera.
    ///
    /// On failure the feed stays stopped with the new facing selected, so a retry targets the
    /// camera the user asked for.
    pub fn switch_facing(&mut self, device: &mut dyn CameraDevice) -> BoothResult<CameraFacing> {
        self.stop(device);
        self.facing = self.facing.toggled();
        if let Err(err) = self.start(device) {
            tracing::warn!(facing = ?self.facing, error = %err, "camera switch failed");
            return Err(err);
        }
        Ok(self.facing)
    }
}

impl PixelSource for CameraFeed {
    fn intrinsic_width(&self) -> u32 {
        self.frame.as_ref().map_or(0, |f| f.width)
    }

    fn intrinsic_height(&self) -> u32 {
        self.frame.as_ref().map_or(0, |f| f.height)
    }

    fn draw_into(&self, dst: &mut RasterBuffer, rect: Rect) -> BoothResult<()> {
        match &self.frame {
            Some(frame) => frame.draw_into(dst, rect),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/camera.rs"]
mod tests;
