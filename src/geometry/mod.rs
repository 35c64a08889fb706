//! Pure placement math shared by the compositor.

/// Contain-fit (letterbox) placement.
pub mod letterbox;
