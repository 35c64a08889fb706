//! Raster surfaces and the CPU drawing helpers used by every layer.

pub(crate) mod blur;
pub(crate) mod painter;
/// Owned destination buffer.
pub mod raster;
