use std::sync::Arc;

use crate::assets::color::{AvatarColors, parse_hex, resolve_colors};
use crate::compose::cache::AvatarCache;
use crate::config::AvatarConfig;
use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::layout::{LayoutParams, layout_glyphs};
use crate::render::backend::TextRenderer;
use crate::text::normalize::{is_blank, normalize};

/// Per-call color overrides as hex strings.
///
/// Empty or malformed values are ignored; the config color applies instead, then the default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    /// Glyph color.
    pub foreground: Option<String>,
    /// Background color.
    pub background: Option<String>,
}

impl ColorOverrides {
    /// No overrides; config colors and defaults apply.
    pub fn none() -> Self {
        Self::default()
    }

    /// Override both colors.
    pub fn new(foreground: Option<String>, background: Option<String>) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

/// A rendered avatar.
#[derive(Clone, Debug)]
pub struct Avatar {
    /// Initials token the image was rendered (and cached) for.
    pub token: String,
    /// Pixels, shared with the cache.
    pub image: Arc<PixelBuffer>,
    /// Whether the image came from the cache.
    pub from_cache: bool,
}

/// Orchestrates normalize -> cache -> font -> colors -> layout -> draw -> cache.
///
/// The cache is keyed by the initials token alone. The first successful render of a token fixes
/// its appearance: later calls with different color overrides or config receive the cached
/// image unchanged.
pub struct AvatarComposer<R> {
    renderer: R,
    cache: AvatarCache,
}

impl<R: std::fmt::Debug> std::fmt::Debug for AvatarComposer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarComposer")
            .field("renderer", &self.renderer)
            .field("cache", &self.cache)
            .finish()
    }
}

impl<R: TextRenderer> AvatarComposer<R> {
    /// Compose through `renderer`, caching in `cache`.
    pub fn new(renderer: R, cache: AvatarCache) -> Self {
        Self { renderer, cache }
    }

    /// The text renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The result cache.
    pub fn cache(&self) -> &AvatarCache {
        &self.cache
    }

    /// Render (or fetch) the avatar for `raw`.
    ///
    /// Errors are returned as-is and never retried. Nothing is cached on failure.
    #[tracing::instrument(
        level = "debug",
        skip(self, raw, overrides, cfg),
        fields(token = tracing::field::Empty)
    )]
    pub fn compose(
        &self,
        raw: &str,
        overrides: &ColorOverrides,
        cfg: &AvatarConfig,
    ) -> AvatarResult<Avatar> {
        let token = normalize(raw);
        if is_blank(&token) {
            return Err(AvatarError::EmptyInput);
        }
        tracing::Span::current().record("token", token.as_str());

        if let Some(image) = self.cache.get(&token) {
            tracing::debug!("cache hit");
            return Ok(Avatar {
                token,
                image,
                from_cache: true,
            });
        }
        tracing::debug!("cache miss");

        let image = Arc::new(self.render(&token, overrides, cfg)?);
        self.cache.put(token.clone(), image.clone());
        Ok(Avatar {
            token,
            image,
            from_cache: false,
        })
    }

    /// Render `token` without consulting or filling the cache.
    pub fn render(
        &self,
        token: &str,
        overrides: &ColorOverrides,
        cfg: &AvatarConfig,
    ) -> AvatarResult<PixelBuffer> {
        cfg.validate()?;
        let canvas = cfg.canvas()?;

        let bytes = cfg.font.read()?;
        let mut font = self.renderer.parse_font(bytes)?;
        tracing::debug!("font loaded");

        let AvatarColors {
            foreground,
            background,
        } = resolve_colors(
            token,
            usable_color(overrides.foreground.as_deref()).or(cfg.font_color.as_deref()),
            usable_color(overrides.background.as_deref()).or(cfg.back_color.as_deref()),
        );

        let mut buffer = canvas.filled(background);

        let size_px = cfg.font_size_px();
        let params = LayoutParams {
            size_px,
            canvas_width: i32::try_from(canvas.width)
                .map_err(|_| AvatarError::validation("canvas width exceeds i32"))?,
            spacer: i32::try_from(cfg.spacer)
                .map_err(|_| AvatarError::validation("spacer exceeds i32"))?,
            offset_x: cfg.text_x,
            baseline_y: cfg.text_y,
        };
        let placed = layout_glyphs(&self.renderer, &mut font, token, params)?;

        for glyph in &placed {
            self.renderer.draw_glyph(
                &mut font,
                &mut buffer,
                &glyph.grapheme,
                glyph.origin,
                size_px,
                foreground,
            )?;
        }
        Ok(buffer)
    }
}

// Empty or malformed overrides defer to the config color.
fn usable_color(value: Option<&str>) -> Option<&str> {
    value.filter(|s| parse_hex(s).is_some())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
