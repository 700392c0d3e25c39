/// Result alias used across the crate.
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Errors produced while composing or delivering an avatar.
///
/// Malformed color strings are never reported here; they fall back to default colors.
#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// Configuration violates a data-model invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// The input normalized to an empty (or whitespace-only) initials token.
    #[error("empty input: no initials can be derived")]
    EmptyInput,

    /// The font source could not be read or parsed.
    #[error("font load error: {0}")]
    FontLoad(String),

    /// The font has no measurable advance for a required glyph.
    #[error("glyph metrics error: no advance for {glyph:?}")]
    GlyphMetrics {
        /// Grapheme that could not be measured.
        glyph: String,
    },

    /// Rasterizing a glyph onto the pixel buffer failed.
    #[error("glyph draw error: {0}")]
    GlyphDraw(String),

    /// The image encoder rejected the pixel buffer.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// I/O failure in a delivery adapter.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else, with its original context chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvatarError {
    /// Build a [`AvatarError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AvatarError::FontLoad`].
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }

    /// Build a [`AvatarError::GlyphMetrics`] for `glyph`.
    pub fn glyph_metrics(glyph: impl Into<String>) -> Self {
        Self::GlyphMetrics {
            glyph: glyph.into(),
        }
    }

    /// Build a [`AvatarError::GlyphDraw`].
    pub fn glyph_draw(msg: impl Into<String>) -> Self {
        Self::GlyphDraw(msg.into())
    }

    /// Build a [`AvatarError::Encoding`].
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Return `true` for errors caused by the caller's input rather than the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::Validation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
