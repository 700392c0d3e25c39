use crate::foundation::error::{AvatarError, AvatarResult};

/// Render target and cached artifact: a `width x height` grid of straight-alpha RGBA8 pixels.
pub type PixelBuffer = image::RgbaImage;

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the default foreground.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from red/green/blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Pixel value for an [`image::RgbaImage`].
    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba(self.to_array())
    }
}

/// Integer pixel position of a glyph origin (left edge, baseline).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DrawPoint {
    /// Horizontal position of the glyph's left edge.
    pub x: i32,
    /// Vertical position of the baseline.
    pub y: i32,
}

impl DrawPoint {
    /// Construct a draw point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> AvatarResult<Self> {
        if width == 0 || height == 0 {
            return Err(AvatarError::validation("canvas width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Allocate a buffer of this size filled with `color`.
    pub fn filled(self, color: Rgba8) -> PixelBuffer {
        image::RgbaImage::from_pixel(self.width, self.height, color.to_pixel())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
