use super::*;

const EPS: f64 = 1e-9;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPS, "{a} != {b}");
}

#[test]
fn wide_source_into_square_fits_width() {
    let p = compute_placement(1920.0, 1080.0, 1000.0, 1000.0).unwrap();
    assert_close(p.draw_width, 1000.0);
    assert_close(p.draw_height, 562.5);
    assert_close(p.x_offset, 0.0);
    assert_close(p.y_offset, 218.75);
}

#[test]
fn tall_source_into_square_fits_height() {
    let p = compute_placement(1080.0, 1920.0, 1000.0, 1000.0).unwrap();
    assert_close(p.draw_width, 562.5);
    assert_close(p.draw_height, 1000.0);
    assert_close(p.x_offset, 218.75);
    assert_close(p.y_offset, 0.0);
}

#[test]
fn equal_aspect_returns_exact_destination() {
    let p = compute_placement(640.0, 480.0, 1280.0, 960.0).unwrap();
    assert_eq!(
        p,
        LetterboxPlacement {
            draw_width: 1280.0,
            draw_height: 960.0,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    );
    assert!(p.fills_destination());

    // 1/3 style ratios that do not survive a division round trip exactly.
    let p = compute_placement(3.0, 9.0, 7.0, 21.0).unwrap();
    assert_eq!(p.rect(), Rect::new(0.0, 0.0, 7.0, 21.0));
}

#[test]
fn placement_preserves_aspect_and_stays_in_bounds() {
    let sides = [1.0, 3.0, 17.0, 480.0, 640.0, 1080.0, 1920.0, 4001.0];
    for &sw in &sides {
        for &sh in &sides {
            for &dw in &sides {
                for &dh in &sides {
                    let p = compute_placement(sw, sh, dw, dh).unwrap();
                    let source_ar = sw / sh;
                    let drawn_ar = p.draw_width / p.draw_height;
                    assert!(
                        (drawn_ar - source_ar).abs() <= 1e-9 * source_ar.max(1.0),
                        "aspect drift for {sw}x{sh} -> {dw}x{dh}"
                    );
                    assert!(p.x_offset >= 0.0 && p.y_offset >= 0.0);
                    assert!(p.x_offset + p.draw_width <= dw + 1e-9);
                    assert!(p.y_offset + p.draw_height <= dh + 1e-9);
                    // One axis always touches both edges.
                    assert!(p.x_offset == 0.0 || p.y_offset == 0.0);
                }
            }
        }
    }
}

#[test]
fn placement_is_idempotent() {
    let a = compute_placement(1280.0, 720.0, 390.0, 844.0).unwrap();
    let b = compute_placement(1280.0, 720.0, 390.0, 844.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_or_invalid_dimensions_are_rejected() {
    for args in [
        (1920.0, 0.0, 100.0, 100.0),
        (0.0, 1080.0, 100.0, 100.0),
        (1920.0, 1080.0, 100.0, 0.0),
        (1920.0, 1080.0, -5.0, 100.0),
        (f64::NAN, 1080.0, 100.0, 100.0),
        (1920.0, f64::INFINITY, 100.0, 100.0),
    ] {
        let err = compute_placement(args.0, args.1, args.2, args.3).unwrap_err();
        assert!(matches!(err, BoothError::InvalidDimensions(_)), "{args:?}");
    }
}

#[test]
fn rect_matches_offsets_and_sizes() {
    let p = compute_placement(200.0, 100.0, 100.0, 100.0).unwrap();
    assert_eq!(p.rect(), Rect::new(0.0, 25.0, 100.0, 75.0));
    assert!(!p.fills_destination());
}
