use std::io::Cursor;

use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{AvatarError, AvatarResult};

/// Serializes a pixel buffer into a standard raster format.
pub trait ImageEncoder: Send + Sync {
    /// MIME type of the produced bytes.
    fn content_type(&self) -> &'static str;

    /// Encode `image`.
    fn encode(&self, image: &PixelBuffer) -> AvatarResult<Vec<u8>>;
}

/// Lossless PNG via the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn encode(&self, image: &PixelBuffer) -> AvatarResult<Vec<u8>> {
        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| AvatarError::encoding(format!("encode png: {e}")))?;
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
