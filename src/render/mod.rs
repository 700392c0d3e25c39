//! Text rendering capability and its implementations.

/// Capability trait the composer draws through.
pub mod backend;
/// Font-free renderer drawing solid boxes, for tests and previews.
pub mod boxes;
/// `parley` + `vello_cpu` implementation.
pub mod cpu;
