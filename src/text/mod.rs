//! Text handling: grapheme segmentation and initials normalization.

/// Raw input to initials token.
pub mod normalize;
/// Grapheme cluster segmentation.
pub mod segment;
