#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Composite a premultiplied source pixel over a straight-alpha destination pixel.
///
/// The result is straight alpha again.
pub(crate) fn premul_over_straight_px(dst: [u8; 4], src_premul: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src_premul[3]);
    if sa == 0 {
        return dst;
    }
    let inv = 255 - sa;
    let da = u16::from(dst[3]);

    let out_a = u16::from(src_premul[3]).saturating_add(mul_div255_u16(da, inv));
    if out_a == 0 {
        return [0, 0, 0, 0];
    }
    let mut out = [0u8; 4];
    out[3] = out_a.min(255) as u8;
    for c in 0..3 {
        let dst_premul = mul_div255_u16(u16::from(dst[c]), da);
        let premul = u32::from(src_premul[c]) + u32::from(mul_div255_u16(dst_premul, inv));
        let straight = (premul * 255 + u32::from(out_a) / 2) / u32::from(out_a);
        out[c] = straight.min(255) as u8;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
