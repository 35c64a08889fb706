use super::*;

#[test]
fn center_x_splits_remaining_width() {
    assert_eq!(center_x(1000.0, 400.0), 300.0);
    assert_eq!(center_x(390.0, 389.0), 0.5);
    assert_eq!(center_x(100.0, 100.0), 0.0);
}

#[test]
fn center_x_goes_negative_for_wide_text() {
    assert_eq!(center_x(100.0, 300.0), -100.0);
}

#[test]
fn shape_line_rejects_bad_size() {
    let mut engine = TextLayoutEngine::new();
    let font = FontFace::new(Vec::new());
    let brush = TextBrushRgba8::default();
    assert!(matches!(
        engine.shape_line("hi", &font, 0.0, brush),
        Err(BoothError::Validation(_))
    ));
    assert!(matches!(
        engine.shape_line("hi", &font, f32::NAN, brush),
        Err(BoothError::Validation(_))
    ));
}

#[test]
fn shape_line_rejects_bytes_that_are_not_a_font() {
    let mut engine = TextLayoutEngine::new();
    let font = FontFace::new(b"not a font".to_vec());
    assert!(matches!(
        engine.shape_line("hi", &font, 24.0, TextBrushRgba8::default()),
        Err(BoothError::Validation(_))
    ));
}

#[test]
fn brush_from_straight_color_keeps_channels() {
    let b = TextBrushRgba8::from(Rgba8::new(1, 2, 3, 4));
    assert_eq!(
        b,
        TextBrushRgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 4
        }
    );
}
