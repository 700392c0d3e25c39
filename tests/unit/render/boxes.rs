use super::*;
use crate::foundation::core::Canvas;

#[test]
fn empty_font_bytes_fail_and_are_counted() {
    let r = BoxRenderer::new(10.0);
    assert!(matches!(
        r.parse_font(Vec::new()).unwrap_err(),
        AvatarError::FontLoad(_)
    ));
    r.parse_font(vec![0]).unwrap();
    assert_eq!(r.fonts_parsed(), 2);
}

#[test]
fn advances_use_overrides() {
    let r = BoxRenderer::new(10.0).with_advance("W", 30.0);
    let mut f = BoxFont;
    assert_eq!(r.glyph_advance(&mut f, "A", 12.0).unwrap(), 10.0);
    assert_eq!(r.glyph_advance(&mut f, "W", 12.0).unwrap(), 30.0);
}

#[test]
fn negative_advance_is_unmeasurable() {
    let r = BoxRenderer::new(10.0).with_advance("?", -1.0);
    let err = r.glyph_advance(&mut BoxFont, "?", 12.0).unwrap_err();
    assert!(matches!(err, AvatarError::GlyphMetrics { .. }));
}

#[test]
fn box_stands_on_baseline_and_is_clipped() {
    let r = BoxRenderer::new(4.0);
    let mut canvas = Canvas::new(8, 8).unwrap().filled(Rgba8::rgb(0, 0, 0));
    r.draw_glyph(
        &mut BoxFont,
        &mut canvas,
        "A",
        DrawPoint::new(6, 6),
        10.0,
        Rgba8::WHITE,
    )
    .unwrap();
    // Columns 6..8 (clipped from 6..10), rows 0..6 (clipped from -1..6).
    assert_eq!(canvas.get_pixel(6, 0).0, [255, 255, 255, 255]);
    assert_eq!(canvas.get_pixel(7, 5).0, [255, 255, 255, 255]);
    assert_eq!(canvas.get_pixel(5, 5).0, [0, 0, 0, 255]);
    assert_eq!(canvas.get_pixel(6, 6).0, [0, 0, 0, 255]);
    assert_eq!(r.glyphs_drawn(), 1);
}
