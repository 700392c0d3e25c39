use crate::foundation::core::{DrawPoint, PixelBuffer, Rgba8};
use crate::foundation::error::AvatarResult;

/// Font parsing, glyph measurement and glyph rasterization.
///
/// Implementations must be deterministic: the same font bytes, grapheme, size and color always
/// produce the same advance and the same pixels. The composer relies on this to share cached
/// buffers between callers.
pub trait TextRenderer: Send + Sync {
    /// Parsed font handle. Owned by a single render call.
    type Font;

    /// Parse raw font bytes.
    ///
    /// Fails with [`crate::AvatarError::FontLoad`] when the bytes are not a usable font.
    fn parse_font(&self, bytes: Vec<u8>) -> AvatarResult<Self::Font>;

    /// Horizontal advance of `grapheme` in pixels at `size_px`.
    ///
    /// Fails with [`crate::AvatarError::GlyphMetrics`] when no advance can be measured.
    fn glyph_advance(&self, font: &mut Self::Font, grapheme: &str, size_px: f32)
    -> AvatarResult<f32>;

    /// Draw `grapheme` with its left edge at `origin.x` and its baseline at `origin.y`.
    ///
    /// Fails with [`crate::AvatarError::GlyphDraw`] when rasterization is not possible.
    fn draw_glyph(
        &self,
        font: &mut Self::Font,
        canvas: &mut PixelBuffer,
        grapheme: &str,
        origin: DrawPoint,
        size_px: f32,
        color: Rgba8,
    ) -> AvatarResult<()>;
}
