//! Render configuration.
//!
//! [`AvatarConfig`] is an immutable value passed to every render call. Build it with
//! [`AvatarConfig::builder`], a struct literal over [`Default`], or load it from JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::assets::font::FontSource;
use crate::foundation::core::Canvas;
use crate::foundation::error::{AvatarError, AvatarResult};

/// Default font file, resolved relative to the working directory.
pub const DEFAULT_FONT_PATH: &str = "Roboto-Bold.ttf";
/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 210.0;
/// Default canvas edge in pixels.
pub const DEFAULT_EDGE_PX: u32 = 500;
/// Default rendering resolution.
pub const DEFAULT_DPI: u32 = 72;
/// Default gap between the two initials in pixels.
pub const DEFAULT_SPACER_PX: u32 = 20;
/// Default baseline position in pixels from the top edge.
pub const DEFAULT_TEXT_Y: i32 = 320;

const MAX_EDGE_PX: u32 = u16::MAX as u32;

/// Everything a render needs besides the name and per-call color overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Font used for the initials.
    pub font: FontSource,
    /// Font size in points.
    pub font_size: f32,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Resolution used to convert points to pixels.
    pub dpi: u32,
    /// Gap between the two initials in pixels.
    pub spacer: u32,
    /// Horizontal nudge added to the centered glyph positions.
    pub text_x: i32,
    /// Baseline position shared by both glyphs.
    pub text_y: i32,
    /// Default glyph color as hex; per-call overrides win.
    pub font_color: Option<String>,
    /// Default background color as hex; per-call overrides win.
    pub back_color: Option<String>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            font: FontSource::path(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            width: DEFAULT_EDGE_PX,
            height: DEFAULT_EDGE_PX,
            dpi: DEFAULT_DPI,
            spacer: DEFAULT_SPACER_PX,
            text_x: 0,
            text_y: DEFAULT_TEXT_Y,
            font_color: None,
            back_color: None,
        }
    }
}

impl AvatarConfig {
    /// Start a builder seeded with [`AvatarConfig::default`].
    pub fn builder() -> AvatarConfigBuilder {
        AvatarConfigBuilder {
            cfg: Self::default(),
        }
    }

    /// Load and validate a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the data-model invariants.
    pub fn validate(&self) -> AvatarResult<()> {
        self.canvas()?;
        if self.width > MAX_EDGE_PX || self.height > MAX_EDGE_PX {
            return Err(AvatarError::validation(format!(
                "canvas must be at most {MAX_EDGE_PX}x{MAX_EDGE_PX} pixels"
            )));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(AvatarError::validation("font_size must be finite and > 0"));
        }
        if self.dpi == 0 {
            return Err(AvatarError::validation("dpi must be > 0"));
        }
        if self.spacer > MAX_EDGE_PX {
            return Err(AvatarError::validation(format!(
                "spacer must be at most {MAX_EDGE_PX} pixels"
            )));
        }
        let limit = MAX_EDGE_PX as i32;
        if !(-limit..=limit).contains(&self.text_x) || !(-limit..=limit).contains(&self.text_y) {
            return Err(AvatarError::validation(format!(
                "text position must be within +/-{limit} pixels"
            )));
        }
        Ok(())
    }

    /// Canvas dimensions.
    pub fn canvas(&self) -> AvatarResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Font size converted to pixels at the configured DPI.
    pub fn font_size_px(&self) -> f32 {
        self.font_size * self.dpi as f32 / 72.0
    }
}

/// Chained construction of an [`AvatarConfig`].
#[derive(Clone, Debug)]
pub struct AvatarConfigBuilder {
    cfg: AvatarConfig,
}

impl AvatarConfigBuilder {
    /// Font file and point size.
    pub fn font(mut self, path: impl Into<PathBuf>, size: f32) -> Self {
        self.cfg.font = FontSource::path(path);
        self.cfg.font_size = size;
        self
    }

    /// In-memory font bytes, keeping the current point size.
    pub fn font_bytes(mut self, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.cfg.font = FontSource::bytes(bytes);
        self
    }

    /// Font size in points.
    pub fn font_size(mut self, size: f32) -> Self {
        self.cfg.font_size = size;
        self
    }

    /// Canvas width and height in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.cfg.width = width;
        self.cfg.height = height;
        self
    }

    /// Rendering resolution.
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.cfg.dpi = dpi;
        self
    }

    /// Gap between initials in pixels.
    pub fn spacer(mut self, spacer: u32) -> Self {
        self.cfg.spacer = spacer;
        self
    }

    /// Horizontal nudge and baseline position.
    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.cfg.text_x = x;
        self.cfg.text_y = y;
        self
    }

    /// Default font and background colors as hex strings.
    pub fn colors(mut self, font_color: Option<String>, back_color: Option<String>) -> Self {
        self.cfg.font_color = font_color;
        self.cfg.back_color = back_color;
        self
    }

    /// Validate and return the config.
    pub fn build(self) -> AvatarResult<AvatarConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
