//! Run configuration and the sequential per-frame pipeline.

/// Serializable run configuration.
pub mod config;
/// Frame loop threading the exposure accumulator.
pub mod run;
