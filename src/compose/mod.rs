//! Capture-time compositing: layer order, decorative overlay, and its configuration.

/// Back-to-front layer compositor and per-capture context.
pub mod compositor;
/// Overlay configuration file format.
pub mod config;
/// Header/footer bands, logo, and centered text.
pub mod overlay;
/// Per-layer outcomes of a compose call.
pub mod report;
