use super::*;
use crate::foundation::core::Rgba8;
use crate::foundation::error::BoothError;

#[derive(Default)]
struct MockDevice {
    calls: Vec<String>,
    fail_on: Option<CameraFacing>,
}

impl CameraDevice for MockDevice {
    fn start(&mut self, facing: CameraFacing) -> BoothResult<()> {
        self.calls.push(format!("start:{facing:?}"));
        if self.fail_on == Some(facing) {
            return Err(BoothError::device(format!("{facing:?} camera unavailable")));
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.calls.push("stop".to_string());
    }
}

fn frame(w: u32, h: u32) -> PreparedImage {
    PreparedImage::solid(w, h, Rgba8::opaque(10, 20, 30)).unwrap()
}

#[test]
fn facing_toggles_and_deserializes() {
    assert_eq!(CameraFacing::User.toggled(), CameraFacing::Environment);
    assert_eq!(CameraFacing::Environment.toggled(), CameraFacing::User);
    let f: CameraFacing = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(f, CameraFacing::User);
}

#[test]
fn idle_feed_reports_zero_dimensions() {
    let feed = CameraFeed::new(CameraFacing::User);
    assert_eq!(feed.intrinsic_width(), 0);
    assert_eq!(feed.intrinsic_height(), 0);
    assert!(!feed.is_streaming());
}

#[test]
fn frames_are_ignored_until_started() {
    let mut dev = MockDevice::default();
    let mut feed = CameraFeed::new(CameraFacing::Environment);
    feed.push_frame(frame(640, 480));
    assert!(feed.current_frame().is_none());

    feed.start(&mut dev).unwrap();
    feed.push_frame(frame(640, 480));
    assert_eq!(feed.intrinsic_size().width, 640);
    assert_eq!(feed.intrinsic_size().height, 480);
}

#[test]
fn switch_drops_frame_and_restarts_opposite_camera() {
    let mut dev = MockDevice::default();
    let mut feed = CameraFeed::new(CameraFacing::Environment);
    feed.start(&mut dev).unwrap();
    feed.push_frame(frame(1280, 720));

    let now = feed.switch_facing(&mut dev).unwrap();
    assert_eq!(now, CameraFacing::User);
    assert!(feed.is_streaming());
    // Dimensions are unknown until the new camera delivers a frame.
    assert_eq!(feed.intrinsic_width(), 0);

    feed.push_frame(frame(720, 1280));
    assert_eq!(feed.intrinsic_width(), 720);
    assert_eq!(
        dev.calls,
        vec!["start:Environment", "stop", "start:User"]
    );
}

#[test]
fn failed_switch_leaves_feed_stopped() {
    let mut dev = MockDevice {
        fail_on: Some(CameraFacing::User),
        ..MockDevice::default()
    };
    let mut feed = CameraFeed::new(CameraFacing::Environment);
    feed.start(&mut dev).unwrap();
    feed.push_frame(frame(10, 10));

    let err = feed.switch_facing(&mut dev).unwrap_err();
    assert!(matches!(err, BoothError::Device(_)));
    assert!(!feed.is_streaming());
    assert_eq!(feed.facing(), CameraFacing::User);
    assert_eq!(feed.intrinsic_width(), 0);
}

#[test]
fn stop_clears_frame() {
    let mut dev = MockDevice::default();
    let mut feed = CameraFeed::new(CameraFacing::User);
    feed.start(&mut dev).unwrap();
    feed.push_frame(frame(4, 4));
    feed.stop(&mut dev);
    assert!(feed.current_frame().is_none());
    assert!(!feed.is_streaming());
}
