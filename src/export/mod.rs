//! Turning a composited buffer into a downloadable file.

/// Capture modes and the compose → encode → offer step.
pub mod capture;
/// PNG encoding.
pub mod png;
/// Download targets.
pub mod sink;
