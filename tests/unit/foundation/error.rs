use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AnnotateError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(AnnotateError::config("x").to_string().contains("config error:"));
    assert!(
        AnnotateError::font_unavailable("x")
            .to_string()
            .contains("font unavailable:")
    );
    assert!(
        AnnotateError::outline_unsupported("x")
            .to_string()
            .contains("outline unsupported:")
    );
    assert!(
        AnnotateError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AnnotateError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
