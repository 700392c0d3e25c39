use super::*;
use crate::foundation::core::{Canvas, Rgba8};

#[test]
fn png_bytes_decode_to_the_same_pixels() {
    let mut img = Canvas::new(3, 2).unwrap().filled(Rgba8::rgb(1, 2, 3));
    img.put_pixel(2, 1, Rgba8::rgba(9, 8, 7, 128).to_pixel());

    let bytes = PngEncoder.encode(&img).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded, img);
}

#[test]
fn content_type_is_png() {
    assert_eq!(PngEncoder.content_type(), "image/png");
}
