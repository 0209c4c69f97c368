use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbImage;

use crate::foundation::error::{ExposureError, ExposureResult};

/// Consumer of highlighted frames, called in annotation order.
pub trait HighlightSink {
    /// Accept the highlighted version of `reference`.
    fn push(&mut self, reference: &str, frame: &RgbImage) -> ExposureResult<()>;
}

/// Writes `<dir>/<basename(reference)>`, creating `dir` on first use.
///
/// The output format follows the file extension of the reference.
#[derive(Clone, Debug)]
pub struct DirHighlightSink {
    dir: PathBuf,
    created: bool,
}

impl DirHighlightSink {
    /// Sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            created: false,
        }
    }

    /// Output path for a frame reference.
    pub fn output_path(&self, reference: &str) -> ExposureResult<PathBuf> {
        let name = Path::new(reference).file_name().ok_or_else(|| {
            ExposureError::validation(format!("frame reference '{reference}' has no file name"))
        })?;
        Ok(self.dir.join(name))
    }
}

impl HighlightSink for DirHighlightSink {
    fn push(&mut self, reference: &str, frame: &RgbImage) -> ExposureResult<()> {
        if !self.created {
            std::fs::create_dir_all(&self.dir)
                .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
            self.created = true;
        }
        let out = self.output_path(reference)?;
        frame
            .save(&out)
            .with_context(|| format!("write highlighted frame '{}'", out.display()))?;
        tracing::debug!(path = %out.display(), "wrote highlighted frame");
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryHighlightSink {
    frames: Vec<(String, RgbImage)>,
}

impl InMemoryHighlightSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(String, RgbImage)] {
        &self.frames
    }
}

impl HighlightSink for InMemoryHighlightSink {
    fn push(&mut self, reference: &str, frame: &RgbImage) -> ExposureResult<()> {
        self.frames.push((reference.to_string(), frame.clone()));
        Ok(())
    }
}

/// Sink that drops every frame; used when only the heatmap is wanted.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardHighlights;

impl HighlightSink for DiscardHighlights {
    fn push(&mut self, _reference: &str, _frame: &RgbImage) -> ExposureResult<()> {
        Ok(())
    }
}

/// Write the rendered heatmap, creating parent directories as needed.
pub fn save_heatmap(img: &RgbImage, path: &Path) -> ExposureResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save(path)
        .with_context(|| format!("write heatmap '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/io/sink.rs"]
mod tests;
