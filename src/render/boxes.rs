use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::foundation::core::{DrawPoint, PixelBuffer, Rgba8};
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::foundation::math::premul_over_straight_px;
use crate::render::backend::TextRenderer;

/// Font handle of [`BoxRenderer`]; carries nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxFont;

/// Deterministic renderer that needs no font: every glyph is a solid box.
///
/// Boxes are `advance` wide and `size_px * 0.7` tall, standing on the baseline. Any non-empty byte
/// string is accepted as a font. Calls are counted so callers can observe cache behaviour.
#[derive(Debug)]
pub struct BoxRenderer {
    default_advance: f32,
    advances: HashMap<String, f32>,
    parse_calls: AtomicUsize,
    draw_calls: AtomicUsize,
}

impl BoxRenderer {
    /// Every grapheme advances by `default_advance` pixels.
    pub fn new(default_advance: f32) -> Self {
        Self {
            default_advance,
            advances: HashMap::new(),
            parse_calls: AtomicUsize::new(0),
            draw_calls: AtomicUsize::new(0),
        }
    }

    /// Give `grapheme` its own advance. A negative or non-finite advance makes it unmeasurable.
    pub fn with_advance(mut self, grapheme: impl Into<String>, advance: f32) -> Self {
        self.advances.insert(grapheme.into(), advance);
        self
    }

    /// Number of fonts parsed so far.
    pub fn fonts_parsed(&self) -> usize {
        self.parse_calls.load(Ordering::Relaxed)
    }

    /// Number of glyphs drawn so far.
    pub fn glyphs_drawn(&self) -> usize {
        self.draw_calls.load(Ordering::Relaxed)
    }

    fn advance_of(&self, grapheme: &str) -> f32 {
        self.advances
            .get(grapheme)
            .copied()
            .unwrap_or(self.default_advance)
    }
}

impl TextRenderer for BoxRenderer {
    type Font = BoxFont;

    fn parse_font(&self, bytes: Vec<u8>) -> AvatarResult<BoxFont> {
        self.parse_calls.fetch_add(1, Ordering::Relaxed);
        if bytes.is_empty() {
            return Err(AvatarError::font_load("font bytes are empty"));
        }
        Ok(BoxFont)
    }

    fn glyph_advance(&self, _font: &mut BoxFont, grapheme: &str, _size_px: f32) -> AvatarResult<f32> {
        let adv = self.advance_of(grapheme);
        if !adv.is_finite() || adv < 0.0 {
            return Err(AvatarError::glyph_metrics(grapheme));
        }
        Ok(adv)
    }

    fn draw_glyph(
        &self,
        _font: &mut BoxFont,
        canvas: &mut PixelBuffer,
        grapheme: &str,
        origin: DrawPoint,
        size_px: f32,
        color: Rgba8,
    ) -> AvatarResult<()> {
        self.draw_calls.fetch_add(1, Ordering::Relaxed);
        let adv = self.advance_of(grapheme);
        if !adv.is_finite() || adv < 0.0 {
            return Err(AvatarError::glyph_draw(format!("no outline for {grapheme:?}")));
        }

        let (w, h) = canvas.dimensions();
        let (w, h) = (w as i64, h as i64);
        let x0 = i64::from(origin.x).clamp(0, w);
        let x1 = (i64::from(origin.x) + adv as i64).clamp(0, w);
        let y1 = i64::from(origin.y).clamp(0, h);
        let y0 = (i64::from(origin.y) - (size_px * 0.7) as i64).clamp(0, h);

        let src = premul(color);
        for y in y0..y1 {
            for x in x0..x1 {
                let px = canvas.get_pixel_mut(x as u32, y as u32);
                px.0 = premul_over_straight_px(px.0, src);
            }
        }
        Ok(())
    }
}

fn premul(c: Rgba8) -> [u8; 4] {
    let a = u16::from(c.a);
    let p = |v: u8| ((u16::from(v) * a + 127) / 255) as u8;
    [p(c.r), p(c.g), p(c.b), c.a]
}

#[cfg(test)]
#[path = "../../tests/unit/render/boxes.rs"]
mod tests;
