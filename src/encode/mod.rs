//! Image encoding and delivery adapters.
//!
//! Adapters take a composed [`crate::Avatar`] and hand its pixels to an [`ImageEncoder`].

/// Write encoded avatars to the filesystem.
pub mod disk;
/// Serve encoded avatars over HTTP.
pub mod http;
/// Pixel buffer to raster bytes.
pub mod png;

pub use png::{ImageEncoder, PngEncoder};
