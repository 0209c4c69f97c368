use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::composite::highlight::HighlightStyle;
use crate::foundation::core::SecondsPerFrame;
use crate::foundation::error::ExposureResult;
use crate::render::colormap::Colormap;

/// Everything needed to run the pipeline against the filesystem.
///
/// Every field has a default, so a JSON config only needs the fields it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Annotation file, one record per line.
    pub labels: PathBuf,
    /// Sampling interval of the annotated frames.
    pub seconds_per_frame: SecondsPerFrame,
    /// Directory relative frame references resolve against; defaults to the labels' directory.
    pub frames_root: Option<PathBuf>,
    /// Directory for highlighted frames.
    pub output_dir: PathBuf,
    /// Final heatmap image path.
    pub heatmap_path: PathBuf,
    /// Write highlighted frames; when false only the heatmap is produced.
    pub write_highlights: bool,
    /// Highlight look.
    pub style: HighlightStyle,
    /// Heatmap colormap.
    pub colormap: Colormap,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            labels: PathBuf::from("labels.txt"),
            seconds_per_frame: SecondsPerFrame::default(),
            frames_root: None,
            output_dir: PathBuf::from("output"),
            heatmap_path: PathBuf::from("heatmap.png"),
            write_highlights: true,
            style: HighlightStyle::default(),
            colormap: Colormap::default(),
        }
    }
}

impl RunConfig {
    /// Load a JSON config file.
    pub fn from_path(path: &Path) -> ExposureResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read run config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse run config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check cross-field constraints not covered by deserialization.
    pub fn validate(&self) -> ExposureResult<()> {
        self.style.validate()
    }

    /// Directory frame references resolve against.
    pub fn frames_root(&self) -> PathBuf {
        if let Some(root) = &self.frames_root {
            return root.clone();
        }
        self.labels
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
