//! Highlighted per-frame previews.

/// Outline and white-tint compositing.
pub mod highlight;
