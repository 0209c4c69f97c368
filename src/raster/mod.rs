//! Polygon rasterization onto frame-sized grids.

/// Convex scanline fill.
pub mod fill;
/// Single-channel coverage masks.
pub mod mask;
/// Closed polyline outlines on RGB frames.
pub mod stroke;
