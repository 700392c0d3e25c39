use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(1, 1).is_ok());
}

#[test]
fn filled_canvas_is_uniform() {
    let c = Canvas::new(3, 2).unwrap();
    let buf = c.filled(Rgba8::rgb(10, 20, 30));
    assert_eq!(buf.dimensions(), (3, 2));
    assert!(buf.pixels().all(|p| p.0 == [10, 20, 30, 255]));
}

#[test]
fn white_is_opaque() {
    assert_eq!(Rgba8::WHITE.to_array(), [255, 255, 255, 255]);
}
