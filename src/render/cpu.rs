use std::borrow::Cow;

use crate::foundation::core::{DrawPoint, PixelBuffer, Rgba8};
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::foundation::math::premul_over_straight_px;
use crate::render::backend::TextRenderer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// Font parsed by [`ParleyRenderer`], with the Parley contexts used to shape it.
pub struct ParleyFont {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    data: vello_cpu::peniko::FontData,
}

impl ParleyFont {
    /// Family name registered from the font bytes.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape `text` on a single unbroken line.
    fn layout(&mut self, text: &str, size_px: f32) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

/// CPU text renderer: `parley` shapes, `vello_cpu` rasterizes.
///
/// Stateless; every parsed font carries its own contexts, so one renderer can serve concurrent
/// render calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParleyRenderer;

impl ParleyRenderer {
    /// Construct the renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TextRenderer for ParleyRenderer {
    type Font = ParleyFont;

    fn parse_font(&self, bytes: Vec<u8>) -> AvatarResult<ParleyFont> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            AvatarError::font_load("no font families registered from font bytes")
        })?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AvatarError::font_load("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        Ok(ParleyFont {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            data,
        })
    }

    fn glyph_advance(
        &self,
        font: &mut ParleyFont,
        grapheme: &str,
        size_px: f32,
    ) -> AvatarResult<f32> {
        let layout = font.layout(grapheme, size_px);

        let mut glyphs = 0usize;
        let mut advance = 0.0f32;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs += run.glyphs().count();
                advance += run.advance();
            }
        }

        if glyphs == 0 || !advance.is_finite() || advance < 0.0 {
            return Err(AvatarError::glyph_metrics(grapheme));
        }
        Ok(advance)
    }

    fn draw_glyph(
        &self,
        font: &mut ParleyFont,
        canvas: &mut PixelBuffer,
        grapheme: &str,
        origin: DrawPoint,
        size_px: f32,
        color: Rgba8,
    ) -> AvatarResult<()> {
        let (width, height) = canvas.dimensions();
        let w: u16 = width
            .try_into()
            .map_err(|_| AvatarError::glyph_draw("canvas width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| AvatarError::glyph_draw("canvas height exceeds u16"))?;

        let layout = font.layout(grapheme, size_px);

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        let (ox, oy) = (origin.x as f32, origin.y as f32);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // Positioned glyphs sit on the line baseline; move that baseline to `origin.y`.
                let baseline = run.baseline();
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: ox + g.x,
                    y: oy + (g.y - baseline),
                });
                ctx.glyph_run(&font.data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut layer = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut layer);
        composite_layer(canvas, layer.data_as_u8_slice())
    }
}

/// Source-over a premultiplied RGBA8 layer onto a straight-alpha canvas of the same size.
fn composite_layer(canvas: &mut PixelBuffer, layer_premul: &[u8]) -> AvatarResult<()> {
    let dst: &mut [u8] = &mut *canvas;
    if dst.len() != layer_premul.len() {
        return Err(AvatarError::glyph_draw(
            "glyph layer and canvas differ in size",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(layer_premul.chunks_exact(4)) {
        let out = premul_over_straight_px([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
