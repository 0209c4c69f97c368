use crate::annotation::parse::records;
use crate::annotation::polygon::AnnotationLine;
use crate::composite::highlight::{HighlightStyle, composite_with_mask};
use crate::exposure::accumulator::{ExposureAccumulator, ExposureGrid};
use crate::foundation::core::{FrameDims, SecondsPerFrame};
use crate::foundation::error::{ExposureError, ExposureResult};
use crate::io::frames::{FrameLoader, FsFrameLoader};
use crate::io::sink::{DirHighlightSink, DiscardHighlights, HighlightSink, save_heatmap};
use crate::raster::mask::CoverageMask;
use crate::render::heatmap::HeatmapView;
use crate::session::config::RunConfig;

/// Per-run options shared by every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionOpts {
    /// Exposure increment of one covered pixel in one frame.
    pub seconds_per_frame: SecondsPerFrame,
    /// Highlight look.
    pub style: HighlightStyle,
    /// Composite and push highlighted frames.
    pub write_highlights: bool,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            seconds_per_frame: SecondsPerFrame::default(),
            style: HighlightStyle::default(),
            write_highlights: true,
        }
    }
}

impl SessionOpts {
    /// Options carried by a [`RunConfig`].
    pub fn from_config(cfg: &RunConfig) -> Self {
        Self {
            seconds_per_frame: cfg.seconds_per_frame,
            style: cfg.style,
            write_highlights: cfg.write_highlights,
        }
    }
}

/// What one processed frame contributed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Frame dimensions.
    pub dims: FrameDims,
    /// Number of detection labels on the frame.
    pub labels: usize,
    /// Pixels inside at least one label.
    pub covered_pixels: usize,
}

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Final accumulated exposure.
    pub grid: ExposureGrid,
    /// Frames folded into the grid.
    pub frames: usize,
    /// Sampling interval used for every fold.
    pub seconds_per_frame: SecondsPerFrame,
}

impl RunReport {
    /// Renderable view of the final grid.
    pub fn heatmap(&self) -> HeatmapView<'_> {
        HeatmapView::new(&self.grid)
    }
}

/// Process one annotation record against the running accumulator.
///
/// Order per frame: load, admit dimensions (the first frame sizes the grid; later mismatches
/// abort here, before anything is written or folded), rasterize a weighted mask, push the
/// highlighted frame, fold.
#[tracing::instrument(skip_all, fields(frame = %record.frame, labels = record.label_count()))]
pub fn process_record(
    acc: &mut ExposureAccumulator,
    record: &AnnotationLine,
    opts: &SessionOpts,
    loader: &mut dyn FrameLoader,
    sink: &mut dyn HighlightSink,
) -> ExposureResult<FrameOutcome> {
    let frame = loader.load(&record.frame)?;
    let dims = FrameDims::of_image(&frame);
    acc.admit_frame(&record.frame, dims)?;

    let mask = CoverageMask::from_polygons(dims, &record.polygons, opts.seconds_per_frame.secs());

    if opts.write_highlights {
        let highlighted = composite_with_mask(&frame, &record.polygons, &mask, &opts.style)?;
        sink.push(&record.frame, &highlighted)?;
    }

    acc.fold(&mask)?;

    let outcome = FrameOutcome {
        dims,
        labels: record.label_count(),
        covered_pixels: mask.covered_pixels(),
    };
    tracing::info!(covered = outcome.covered_pixels, "processed frame");
    Ok(outcome)
}

/// Run every record of an annotation source in order and return the final grid.
///
/// Records are parsed as they are reached, so highlights for earlier frames are already pushed
/// when a later record fails. A source with no records is an error since there is no grid to
/// render.
pub fn run_annotations(
    text: &str,
    opts: &SessionOpts,
    loader: &mut dyn FrameLoader,
    sink: &mut dyn HighlightSink,
) -> ExposureResult<RunReport> {
    let mut acc = ExposureAccumulator::new();
    let mut frames = 0usize;

    for record in records(text) {
        let record = record?;
        process_record(&mut acc, &record, opts, loader, sink)?;
        frames += 1;
    }

    let grid = acc.finish()?;
    tracing::info!(frames, peak_secs = grid.peak(), "accumulated exposure");
    Ok(RunReport {
        grid,
        frames,
        seconds_per_frame: opts.seconds_per_frame,
    })
}

/// Run the whole pipeline against the filesystem: read labels, write highlighted frames and the
/// final heatmap.
pub fn execute(cfg: &RunConfig) -> ExposureResult<RunReport> {
    cfg.validate()?;
    let text = std::fs::read_to_string(&cfg.labels)
        .map_err(|e| ExposureError::missing(cfg.labels.display().to_string(), e))?;

    let opts = SessionOpts::from_config(cfg);
    let mut loader = FsFrameLoader::new(cfg.frames_root());
    let report = if cfg.write_highlights {
        let mut sink = DirHighlightSink::new(&cfg.output_dir);
        run_annotations(&text, &opts, &mut loader, &mut sink)?
    } else {
        run_annotations(&text, &opts, &mut loader, &mut DiscardHighlights)?
    };

    let img = report.heatmap().with_colormap(cfg.colormap).render();
    save_heatmap(&img, &cfg.heatmap_path)?;
    tracing::info!(path = %cfg.heatmap_path.display(), "wrote heatmap");
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/session/run.rs"]
mod tests;
