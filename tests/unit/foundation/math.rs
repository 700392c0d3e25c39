use super::*;

#[test]
fn fnv_chunked_writes_match_single_write() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"avatar");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"a");
    b.write_bytes(b"vatar");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_empty_input_is_offset_basis() {
    assert_eq!(Fnv1a64::new_default().finish(), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 0), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 128), 128);
    assert_eq!(mul_div255_u16(1, 127), 0);
}

#[test]
fn over_transparent_source_keeps_destination() {
    let dst = [12, 34, 56, 255];
    assert_eq!(premul_over_straight_px(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_opaque_source_replaces_destination() {
    let dst = [12, 34, 56, 255];
    assert_eq!(
        premul_over_straight_px(dst, [200, 100, 50, 255]),
        [200, 100, 50, 255]
    );
}

#[test]
fn over_half_coverage_blends_toward_source() {
    // White at 50% coverage (premultiplied 128) over opaque black.
    let out = premul_over_straight_px([0, 0, 0, 255], [128, 128, 128, 128]);
    assert_eq!(out[3], 255);
    assert!((127..=129).contains(&out[0]));
    assert_eq!(out[0], out[1]);
    assert_eq!(out[1], out[2]);
}
