//! Avatar composition: the result cache and the orchestrating composer.

/// Token-keyed cache of rendered buffers.
pub mod cache;
/// Normalize, cache lookup, color, layout, draw.
pub mod composer;
