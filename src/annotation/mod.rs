//! Annotation records: one frame reference plus its quadrilateral detection labels per line.

/// Line parser.
pub mod parse;
/// Polygon and record types.
pub mod polygon;
