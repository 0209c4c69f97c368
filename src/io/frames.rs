use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::foundation::error::{ExposureError, ExposureResult};

/// Source of decoded RGB frames, looked up by the reference written in the annotation file.
pub trait FrameLoader {
    /// Load one frame. Failures surface as [`ExposureError::MissingResource`].
    fn load(&mut self, reference: &str) -> ExposureResult<RgbImage>;
}

/// Decodes frames from disk with the `image` crate.
///
/// Relative references resolve against `root`; absolute references are used as is.
#[derive(Clone, Debug)]
pub struct FsFrameLoader {
    root: PathBuf,
}

impl FsFrameLoader {
    /// Loader resolving relative references against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a reference resolves to.
    pub fn resolve(&self, reference: &str) -> PathBuf {
        let p = Path::new(reference);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.root.join(p)
        }
    }
}

impl FrameLoader for FsFrameLoader {
    fn load(&mut self, reference: &str) -> ExposureResult<RgbImage> {
        let path = self.resolve(reference);
        let img = image::open(&path)
            .map_err(|e| ExposureError::missing(path.display().to_string(), e))?;
        Ok(img.to_rgb8())
    }
}

/// In-memory frames for tests and synthetic sequences.
#[derive(Clone, Debug, Default)]
pub struct InMemoryFrames {
    frames: HashMap<String, RgbImage>,
}

impl InMemoryFrames {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a frame under `reference`.
    pub fn insert(&mut self, reference: impl Into<String>, frame: RgbImage) {
        self.frames.insert(reference.into(), frame);
    }

    /// Builder-style [`InMemoryFrames::insert`].
    pub fn with(mut self, reference: impl Into<String>, frame: RgbImage) -> Self {
        self.insert(reference, frame);
        self
    }
}

impl FrameLoader for InMemoryFrames {
    fn load(&mut self, reference: &str) -> ExposureResult<RgbImage> {
        self.frames
            .get(reference)
            .cloned()
            .ok_or_else(|| ExposureError::missing(reference, "no such frame"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/frames.rs"]
mod tests;
