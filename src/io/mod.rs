//! Storage collaborators: where frames come from and where artifacts go.
//!
//! The pipeline only talks to the [`frames::FrameLoader`] and [`sink::HighlightSink`] traits, so
//! runs can be driven entirely from memory.

/// Frame loading.
pub mod frames;
/// Highlight and heatmap output.
pub mod sink;
