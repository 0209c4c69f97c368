use super::*;
use crate::io::frames::InMemoryFrames;
use crate::io::sink::InMemoryHighlightSink;
use image::RgbImage;

fn opts(secs: f64) -> SessionOpts {
    SessionOpts {
        seconds_per_frame: SecondsPerFrame::new(secs).unwrap(),
        ..SessionOpts::default()
    }
}

fn frames() -> InMemoryFrames {
    InMemoryFrames::new()
        .with("img1.jpg", RgbImage::from_pixel(20, 20, image::Rgb([40, 80, 120])))
        .with("img2.jpg", RgbImage::from_pixel(20, 20, image::Rgb([0, 0, 0])))
        .with("small.jpg", RgbImage::new(10, 20))
}

#[test]
fn process_record_folds_weighted_mask_and_pushes_highlight() {
    let mut acc = ExposureAccumulator::new();
    let mut loader = frames();
    let mut sink = InMemoryHighlightSink::new();
    let record = crate::annotation::parse::parse_line("img1.jpg 1 0 0 10 0 10 10 0 10").unwrap();

    let outcome = process_record(&mut acc, &record, &opts(0.1), &mut loader, &mut sink).unwrap();
    assert_eq!(outcome.dims, FrameDims::new(20, 20));
    assert_eq!(outcome.labels, 1);
    assert_eq!(outcome.covered_pixels, 121);

    let grid = acc.grid().unwrap();
    assert_eq!(grid.get(5, 5), Some(0.1));
    assert_eq!(grid.get(15, 15), Some(0.0));
    assert_eq!(sink.frames().len(), 1);
    assert_eq!(sink.frames()[0].0, "img1.jpg");
}

#[test]
fn disabled_highlights_skip_the_sink() {
    let mut sink = InMemoryHighlightSink::new();
    let opts = SessionOpts {
        write_highlights: false,
        ..opts(0.1)
    };
    let report = run_annotations("img1.jpg 0\nimg2.jpg 0", &opts, &mut frames(), &mut sink).unwrap();
    assert_eq!(report.frames, 2);
    assert!(sink.frames().is_empty());
}

#[test]
fn mismatch_aborts_before_highlight_or_fold() {
    let mut sink = InMemoryHighlightSink::new();
    let text = "img1.jpg 1 0 0 5 0 5 5 0 5\nsmall.jpg 1 0 0 5 0 5 5 0 5\n";
    let err = run_annotations(text, &opts(0.1), &mut frames(), &mut sink).unwrap_err();
    assert!(matches!(err, ExposureError::DimensionMismatch { .. }));
    assert_eq!(sink.frames().len(), 1);
}

#[test]
fn missing_frame_is_fatal() {
    let mut sink = InMemoryHighlightSink::new();
    let err = run_annotations("nope.jpg 0", &opts(0.1), &mut frames(), &mut sink).unwrap_err();
    assert!(matches!(err, ExposureError::MissingResource { .. }));
}

#[test]
fn empty_source_has_nothing_to_render() {
    let mut sink = InMemoryHighlightSink::new();
    let err = run_annotations("", &opts(0.1), &mut frames(), &mut sink).unwrap_err();
    assert!(matches!(err, ExposureError::Validation(_)));
}

#[test]
fn malformed_later_line_keeps_earlier_highlights() {
    let mut sink = InMemoryHighlightSink::new();
    let text = "img1.jpg 0\nimg2.jpg 2 0 0 1 0 1 1 0 1\n";
    let err = run_annotations(text, &opts(0.1), &mut frames(), &mut sink).unwrap_err();
    assert!(matches!(
        err,
        ExposureError::MalformedAnnotation { line: Some(2), .. }
    ));
    assert_eq!(sink.frames().len(), 1);
}
