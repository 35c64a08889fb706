use std::cell::Cell;

use super::*;
use crate::assets::ready::Deferred;
use crate::foundation::core::Rgba8;
use crate::source::camera::{CameraFacing, CameraFeed};

fn close(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (i16::from(*x) - i16::from(*y)).abs() <= 2)
}

fn clear_snapshot() -> BoothResult<PreparedImage> {
    PreparedImage::solid(1, 1, Rgba8::new(0, 0, 0, 0))
}

#[test]
fn wide_camera_is_letterboxed_vertically() {
    let camera = PreparedImage::solid(20, 10, Rgba8::opaque(255, 0, 0)).unwrap();
    let mut buf = RasterBuffer::new(40, 40).unwrap();
    let report = compose(&mut buf, &camera, &mut clear_snapshot, &OverlaySpec::empty());

    assert!(report.camera.is_drawn());
    assert!(close(buf.pixel(20, 20).unwrap().to_array(), [255, 0, 0, 255]));
    assert!(close(buf.pixel(2, 12).unwrap().to_array(), [255, 0, 0, 255]));
    assert_eq!(buf.pixel(20, 5).unwrap().a, 0);
    assert_eq!(buf.pixel(20, 34).unwrap().a, 0);
}

#[test]
fn camera_without_frame_is_skipped_and_render_still_drawn() {
    let camera = CameraFeed::new(CameraFacing::Environment);
    let mut snapshot = || PreparedImage::solid(2, 2, Rgba8::opaque(0, 0, 255));
    let mut buf = RasterBuffer::new(16, 16).unwrap();
    let report = compose(&mut buf, &camera, &mut snapshot, &OverlaySpec::empty());

    assert!(report.camera.is_skipped());
    assert!(report.render_surface.is_drawn());
    assert!(close(buf.pixel(0, 0).unwrap().to_array(), [0, 0, 255, 255]));
    assert!(close(buf.pixel(15, 15).unwrap().to_array(), [0, 0, 255, 255]));
}

#[test]
fn layers_are_drawn_back_to_front() {
    let camera = PreparedImage::solid(4, 4, Rgba8::opaque(255, 0, 0)).unwrap();
    let mut snapshot = || PreparedImage::solid(4, 4, Rgba8::new(0, 0, 255, 128));
    let overlay = OverlaySpec {
        header_height: 4.0,
        band_color: Rgba8::opaque(0, 255, 0),
        border_width: 0.0,
        ..OverlaySpec::empty()
    };
    let mut buf = RasterBuffer::new(16, 16).unwrap();
    let report = compose(&mut buf, &camera, &mut snapshot, &overlay);

    assert!(report.camera.is_drawn());
    assert!(report.render_surface.is_drawn());
    assert!(report.overlay.header_band.is_drawn());
    // Render surface blended over the camera.
    assert!(close(buf.pixel(8, 10).unwrap().to_array(), [127, 0, 128, 255]));
    // Overlay band over both.
    assert!(close(buf.pixel(8, 1).unwrap().to_array(), [0, 255, 0, 255]));
}

#[test]
fn compose_clears_previous_contents() {
    let camera = CameraFeed::new(CameraFacing::User);
    let mut buf = RasterBuffer::new(8, 8).unwrap();
    buf.data_mut().fill(255);
    compose(&mut buf, &camera, &mut clear_snapshot, &OverlaySpec::empty());
    assert!(buf.data().iter().all(|&b| b == 0));
}

#[test]
fn repeated_composes_are_pixel_identical() {
    let camera = PreparedImage::solid(30, 17, Rgba8::opaque(200, 30, 60)).unwrap();
    let mut snapshot = || PreparedImage::solid(5, 5, Rgba8::new(10, 200, 90, 100));
    let overlay = OverlaySpec {
        header_height: 6.0,
        footer_height: 6.0,
        border_width: 1.0,
        logo_inset: 2.0,
        logo_size: 3.0,
        logo: Deferred::ready(PreparedImage::solid(3, 3, Rgba8::opaque(0, 0, 0)).unwrap()),
        ..OverlaySpec::empty()
    };

    let mut a = RasterBuffer::new(25, 25).unwrap();
    let mut b = RasterBuffer::new(25, 25).unwrap();
    let ra = compose(&mut a, &camera, &mut snapshot, &overlay);
    let rb = compose(&mut b, &camera, &mut snapshot, &overlay);
    assert_eq!(a, b);
    assert_eq!(ra, rb);
}

#[test]
fn failing_snapshot_is_skipped() {
    let camera = PreparedImage::solid(4, 4, Rgba8::opaque(255, 0, 0)).unwrap();
    let mut snapshot = || -> BoothResult<PreparedImage> {
        Err(BoothError::not_ready("renderer has no frame"))
    };
    let mut buf = RasterBuffer::new(8, 8).unwrap();
    let report = compose(&mut buf, &camera, &mut snapshot, &OverlaySpec::empty());

    assert!(report.camera.is_drawn());
    assert!(matches!(&report.render_surface, LayerOutcome::Skipped(r) if r.contains("renderer")));
    assert!(close(buf.pixel(4, 4).unwrap().to_array(), [255, 0, 0, 255]));
}

#[test]
fn capture_context_samples_snapshot_once_per_compose() {
    let calls = Cell::new(0u32);
    let camera = CameraFeed::new(CameraFacing::Environment);
    let mut ctx = CaptureContext::new(6, 4, &camera, || {
        calls.set(calls.get() + 1);
        PreparedImage::solid(1, 1, Rgba8::opaque(9, 9, 9))
    })
    .unwrap();

    ctx.compose(&OverlaySpec::empty());
    ctx.compose(&OverlaySpec::empty());
    assert_eq!(ctx.buffer().width(), 6);
    assert!(close(ctx.buffer().pixel(5, 3).unwrap().to_array(), [9, 9, 9, 255]));

    let buf = ctx.into_buffer();
    assert_eq!(buf.height(), 4);
    assert_eq!(calls.get(), 2);
}

#[test]
fn oversized_context_is_rejected() {
    let camera = CameraFeed::new(CameraFacing::Environment);
    assert!(matches!(
        CaptureContext::new(70_000, 10, &camera, clear_snapshot),
        Err(BoothError::InvalidDimensions(_))
    ));
}
