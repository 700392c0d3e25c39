use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AvatarError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AvatarError::font_load("x")
            .to_string()
            .contains("font load error:")
    );
    assert!(
        AvatarError::glyph_draw("x")
            .to_string()
            .contains("glyph draw error:")
    );
    assert!(
        AvatarError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
    assert!(AvatarError::EmptyInput.to_string().contains("empty input"));
}

#[test]
fn glyph_metrics_names_the_glyph() {
    let msg = AvatarError::glyph_metrics("Ж").to_string();
    assert!(msg.contains("glyph metrics error:"));
    assert!(msg.contains('Ж'));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AvatarError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn client_errors_are_input_problems_only() {
    assert!(AvatarError::EmptyInput.is_client_error());
    assert!(AvatarError::validation("bad").is_client_error());
    assert!(!AvatarError::font_load("missing").is_client_error());
    assert!(!AvatarError::glyph_metrics("A").is_client_error());
}
