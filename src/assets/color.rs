use crate::foundation::core::Rgba8;
use crate::foundation::math::Fnv1a64;
use crate::text::segment::first_grapheme;

/// Background palette for names without an explicit background color.
///
/// Indexed by a stable hash of the token's first grapheme; reordering it changes every default
/// avatar, so treat it as append-only.
pub const DEFAULT_PALETTE: [Rgba8; 16] = [
    Rgba8::rgb(0x1a, 0xbc, 0x9c),
    Rgba8::rgb(0x2e, 0xcc, 0x71),
    Rgba8::rgb(0x34, 0x98, 0xdb),
    Rgba8::rgb(0x9b, 0x59, 0xb6),
    Rgba8::rgb(0x34, 0x49, 0x5e),
    Rgba8::rgb(0x16, 0xa0, 0x85),
    Rgba8::rgb(0x27, 0xae, 0x60),
    Rgba8::rgb(0x29, 0x80, 0xb9),
    Rgba8::rgb(0x8e, 0x44, 0xad),
    Rgba8::rgb(0x2c, 0x3e, 0x50),
    Rgba8::rgb(0xf1, 0xc4, 0x0f),
    Rgba8::rgb(0xe6, 0x7e, 0x22),
    Rgba8::rgb(0xe7, 0x4c, 0x3c),
    Rgba8::rgb(0xd3, 0x54, 0x00),
    Rgba8::rgb(0xc0, 0x39, 0x2b),
    Rgba8::rgb(0x7f, 0x8c, 0x8d),
];

/// Resolved colors for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvatarColors {
    /// Glyph color.
    pub foreground: Rgba8,
    /// Canvas fill color.
    pub background: Rgba8,
}

/// Parse `#RRGGBB`, `RRGGBB`, or the same with a trailing `AA` alpha byte (case-insensitive).
///
/// Returns `None` for any other shape; callers fall back to their default.
pub fn parse_hex(s: &str) -> Option<Rgba8> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return None;
    }

    fn hex_byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    match s.len() {
        6 => Some(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Some(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => None,
    }
}

/// Deterministic background for `token`, keyed by its first grapheme.
///
/// Tokens sharing a first grapheme share a color; the empty token maps to palette slot 0.
pub fn default_background(token: &str) -> Rgba8 {
    let first = first_grapheme(token).unwrap_or_default();
    let mut h = Fnv1a64::new_default();
    h.write_bytes(first.as_bytes());
    DEFAULT_PALETTE[(h.finish() % DEFAULT_PALETTE.len() as u64) as usize]
}

/// Pick foreground and background for `token`.
///
/// Overrides that are absent, empty, or malformed are ignored rather than reported.
pub fn resolve_colors(token: &str, fg: Option<&str>, bg: Option<&str>) -> AvatarColors {
    let explicit = |s: Option<&str>| s.filter(|s| !s.is_empty()).and_then(parse_hex);
    AvatarColors {
        foreground: explicit(fg).unwrap_or(Rgba8::WHITE),
        background: explicit(bg).unwrap_or_else(|| default_background(token)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
