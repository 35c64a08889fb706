use super::*;

#[test]
fn empty_document_uses_defaults() {
    let cfg = OverlayConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, OverlayConfig::default());
    assert_eq!(cfg.header_height, 100.0);
    assert_eq!(cfg.shadow_offset, [2.0, 2.0]);
}

#[test]
fn parses_full_document() {
    let cfg = OverlayConfig::from_json_str(
        r##"{
            "header_height": 60,
            "footer_height": 80,
            "band_color": "#112233",
            "border_color": [1.0, 0.0, 0.0],
            "border_width": 2,
            "logo_path": "brand/logo.svg",
            "logo_inset": 8,
            "logo_size": 44,
            "header_text": "Meet the avatar",
            "footer_lines": ["line one", "line two"],
            "font_path": "fonts/Inter.ttf",
            "font_size_px": 24,
            "text_color": "#fff",
            "shadow_color": {"r": 0, "g": 0, "b": 0, "a": 0.5},
            "shadow_blur": 6,
            "shadow_offset": [1, 3]
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.band_color, Rgba8::opaque(0x11, 0x22, 0x33));
    assert_eq!(cfg.border_color, Rgba8::opaque(255, 0, 0));
    assert_eq!(cfg.logo_path.as_deref(), Some(Path::new("brand/logo.svg")));
    assert_eq!(cfg.footer_lines.len(), 2);
    assert_eq!(cfg.shadow_color, Rgba8::new(0, 0, 0, 128));
    assert_eq!(cfg.shadow_offset, [1.0, 3.0]);
}

#[test]
fn unknown_fields_are_serde_errors() {
    assert!(matches!(
        OverlayConfig::from_json_str(r#"{"header_hieght": 10}"#),
        Err(BoothError::Serde(_))
    ));
}

#[test]
fn three_footer_lines_are_rejected() {
    let err = OverlayConfig::from_json_str(r#"{"footer_lines": ["a", "b", "c"]}"#).unwrap_err();
    assert!(matches!(err, BoothError::Validation(msg) if msg.contains("footer_lines")));
}

#[test]
fn negative_or_non_finite_sizes_are_rejected() {
    let cfg = OverlayConfig {
        border_width: -1.0,
        ..OverlayConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = OverlayConfig {
        font_size_px: 0.0,
        ..OverlayConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = OverlayConfig {
        shadow_offset: [f64::NAN, 0.0],
        ..OverlayConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn oversized_shadow_blur_is_rejected() {
    let cfg = OverlayConfig {
        shadow_blur: 1e10,
        ..OverlayConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, BoothError::Validation(msg) if msg.contains("shadow_blur")));

    let cfg = OverlayConfig {
        shadow_blur: MAX_SHADOW_BLUR,
        ..OverlayConfig::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_round_trips_through_json() {
    let cfg = OverlayConfig {
        header_text: "hi".to_string(),
        footer_lines: vec!["a".to_string()],
        ..OverlayConfig::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(OverlayConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = OverlayConfig::from_path("/definitely/missing/overlay.json").unwrap_err();
    assert!(err.to_string().contains("overlay.json"));
}
