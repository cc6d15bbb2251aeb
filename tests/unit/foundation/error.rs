use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlitError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BlitError::bounds("x").to_string().contains("bounds error:"));
    assert!(
        BlitError::Image("x".into())
            .to_string()
            .contains("image error:")
    );
    assert!(
        BlitError::Serde("x".into())
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlitError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let bad = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: BlitError = bad.into();
    assert!(matches!(err, BlitError::Serde(_)));
}

#[test]
fn image_errors_convert() {
    let limits = image::error::LimitError::from_kind(image::error::LimitErrorKind::DimensionError);
    let err: BlitError = image::ImageError::Limits(limits).into();
    assert!(matches!(err, BlitError::Image(_)));
}
