//! Per-pixel exposure accumulation across a frame sequence.

/// Two-phase accumulator and the exposure grid it owns.
pub mod accumulator;
