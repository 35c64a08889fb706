use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BoothError::invalid_dimensions("x")
            .to_string()
            .contains("invalid dimensions:")
    );
    assert!(
        BoothError::not_ready("x")
            .to_string()
            .contains("resource not ready:")
    );
    assert!(
        BoothError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
    assert!(BoothError::device("x").to_string().contains("device error:"));
    assert!(
        BoothError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BoothError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BoothError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
