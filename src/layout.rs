//! Horizontal centering of up to two initials.

use crate::foundation::core::DrawPoint;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::backend::TextRenderer;
use crate::text::segment::graphemes;

/// Most graphemes of a token that are laid out and drawn.
pub const MAX_GLYPHS: usize = 2;

/// A grapheme and where to draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedGlyph {
    /// The grapheme to draw.
    pub grapheme: String,
    /// Whole-pixel advance measured for the grapheme.
    pub advance: i32,
    /// Left edge and baseline.
    pub origin: DrawPoint,
}

/// Layout inputs that come from configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Font size in pixels.
    pub size_px: f32,
    /// Canvas width in pixels.
    pub canvas_width: i32,
    /// Gap between the two glyphs in pixels.
    pub spacer: i32,
    /// Horizontal nudge applied after centering.
    pub offset_x: i32,
    /// Shared baseline.
    pub baseline_y: i32,
}

/// X positions for two glyphs of widths `w0` and `w1` centered on `canvas_width`.
///
/// A missing second glyph has width 0; the spacer is still counted. Computed in `i64` so any
/// `i32` inputs fit.
pub fn centered_xs(w0: i64, w1: i64, canvas_width: i64, spacer: i64) -> [i64; 2] {
    let combined = w0 + spacer + w1;
    let x0 = (canvas_width - combined) / 2;
    [x0, x0 + w0 + spacer]
}

/// Measure the first [`MAX_GLYPHS`] graphemes of `token` and place them.
///
/// Advances are truncated to whole pixels before centering. A position that does not fit `i32`
/// is a validation error.
pub fn layout_glyphs<R: TextRenderer>(
    renderer: &R,
    font: &mut R::Font,
    token: &str,
    params: LayoutParams,
) -> AvatarResult<Vec<PlacedGlyph>> {
    let chars: Vec<&str> = graphemes(token).into_iter().take(MAX_GLYPHS).collect();
    if chars.is_empty() {
        return Err(AvatarError::EmptyInput);
    }

    let mut widths = [0i32; MAX_GLYPHS];
    for (slot, g) in widths.iter_mut().zip(&chars) {
        let adv = renderer.glyph_advance(font, g, params.size_px)?;
        if !adv.is_finite() || adv < 0.0 {
            return Err(AvatarError::glyph_metrics(*g));
        }
        *slot = adv as i32;
    }

    let xs = centered_xs(
        widths[0].into(),
        widths[1].into(),
        params.canvas_width.into(),
        params.spacer.into(),
    );
    chars
        .iter()
        .zip(xs.iter().zip(widths))
        .map(|(g, (&x, advance))| -> AvatarResult<PlacedGlyph> {
            let x = i32::try_from(x + i64::from(params.offset_x)).map_err(|_| {
                AvatarError::validation(format!("draw position of {g:?} is out of range"))
            })?;
            Ok(PlacedGlyph {
                grapheme: (*g).to_string(),
                advance,
                origin: DrawPoint::new(x, params.baseline_y),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
