//! Deterministic initials avatars.
//!
//! A display name is reduced to one or two initials, given a stable background color, centered on
//! a square canvas and rasterized with a TrueType/OpenType font:
//!
//! - Build an [`AvatarConfig`]
//! - Create an [`AvatarComposer`] around a [`TextRenderer`] and an [`AvatarCache`]
//! - [`AvatarComposer::compose`] a name, then hand the [`Avatar`] to a delivery adapter
//!   ([`write_avatar`], [`HttpAvatar`], [`router`])
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

/// Avatar composition and caching.
pub mod compose;
pub mod config;
/// Encoding and delivery.
pub mod encode;
pub mod layout;
/// Text rendering capability.
pub mod render;
pub mod text;

pub use crate::assets::color::{
    AvatarColors, DEFAULT_PALETTE, default_background, parse_hex, resolve_colors,
};
pub use crate::assets::font::FontSource;
pub use crate::foundation::core::{Canvas, DrawPoint, PixelBuffer, Rgba8};
pub use crate::foundation::error::{AvatarError, AvatarResult};

pub use crate::compose::cache::{AvatarCache, EvictionPolicy};
pub use crate::compose::composer::{Avatar, AvatarComposer, ColorOverrides};
pub use crate::config::{AvatarConfig, AvatarConfigBuilder};
pub use crate::encode::disk::write_avatar;
pub use crate::encode::http::{AvatarService, HttpAvatar, HttpError, etag_for, router, serve};
pub use crate::encode::png::{ImageEncoder, PngEncoder};
pub use crate::render::backend::TextRenderer;
pub use crate::render::boxes::{BoxFont, BoxRenderer};
pub use crate::render::cpu::{ParleyFont, ParleyRenderer};
pub use crate::text::normalize::normalize;
