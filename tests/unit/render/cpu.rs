use super::*;
use crate::foundation::core::Canvas;

#[test]
fn garbage_bytes_are_a_font_load_error() {
    let r = ParleyRenderer::new();
    let err = r.parse_font(b"definitely not a font".to_vec()).err().unwrap();
    assert!(matches!(err, AvatarError::FontLoad(_)));
    assert!(matches!(
        r.parse_font(Vec::new()).err().unwrap(),
        AvatarError::FontLoad(_)
    ));
}

#[test]
fn composite_layer_skips_transparent_and_blends_covered_pixels() {
    let mut canvas = Canvas::new(2, 1).unwrap().filled(Rgba8::rgb(0, 0, 0));
    let layer = [0, 0, 0, 0, 255, 255, 255, 255];
    composite_layer(&mut canvas, &layer).unwrap();
    assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(1, 0).0, [255, 255, 255, 255]);
}

#[test]
fn composite_layer_rejects_mismatched_sizes() {
    let mut canvas = Canvas::new(2, 2).unwrap().filled(Rgba8::WHITE);
    let err = composite_layer(&mut canvas, &[0u8; 4]).unwrap_err();
    assert!(matches!(err, AvatarError::GlyphDraw(_)));
}
