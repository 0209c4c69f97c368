//! Final heatmap rendering.

/// Colormaps.
pub mod colormap;
/// Pseudocolor view of an exposure grid with a legend bar.
pub mod heatmap;
