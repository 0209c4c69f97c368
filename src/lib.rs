//! Cumulative exposure heatmaps from quadrilateral detection labels.
//!
//! Each line of an annotation file names a sampled video frame and the quadrilaterals detected in
//! it. For every pixel the pipeline adds up how long (in seconds) it sat inside any detection,
//! then renders the total as a false-color heatmap. Along the way it produces a highlighted copy
//! of every frame.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: one line -> [`AnnotationLine`] (frame reference + [`Polygon`]s)
//! 2. **Rasterize**: polygons -> [`CoverageMask`] weighted by [`SecondsPerFrame`]
//! 3. **Composite**: frame + mask -> highlighted frame, pushed to a [`HighlightSink`]
//! 4. **Accumulate**: mask folded into the [`ExposureAccumulator`]
//! 5. **Render**: final [`ExposureGrid`] -> [`HeatmapView`]
//!
//! Processing is strictly sequential, in file order. The accumulator is an owned value threaded
//! through [`process_record`]; [`run_annotations`] drives a whole annotation source and
//! [`execute`] does the same against the filesystem.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Annotation record parsing.
pub mod annotation;
/// Frame highlighting.
pub mod composite;
/// Exposure accumulation.
pub mod exposure;
mod foundation;
/// Frame and artifact storage.
pub mod io;
/// Polygon rasterization.
pub mod raster;
/// Heatmap rendering.
pub mod render;
/// Run configuration and pipeline.
pub mod session;

pub use crate::annotation::parse::{parse_line, records};
pub use crate::annotation::polygon::{AnnotationLine, Polygon, QUAD_VERTICES};
pub use crate::composite::highlight::{
    HighlightStyle, composite_with_mask, compute_mask_and_composite,
};
pub use crate::exposure::accumulator::{ExposureAccumulator, ExposureGrid};
pub use crate::foundation::core::{FrameDims, Rgb8, SecondsPerFrame, Vertex};
pub use crate::foundation::error::{ExposureError, ExposureResult};
pub use crate::io::frames::{FrameLoader, FsFrameLoader, InMemoryFrames};
pub use crate::io::sink::{
    DirHighlightSink, DiscardHighlights, HighlightSink, InMemoryHighlightSink, save_heatmap,
};
pub use crate::raster::fill::fill_convex_poly;
pub use crate::raster::mask::CoverageMask;
pub use crate::raster::stroke::stroke_closed_polygon;
pub use crate::render::colormap::Colormap;
pub use crate::render::heatmap::{HeatmapView, LEGEND_TITLE};
pub use crate::session::config::RunConfig;
pub use crate::session::run::{
    FrameOutcome, RunReport, SessionOpts, execute, process_record, run_annotations,
};
