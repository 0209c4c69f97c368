use super::*;

#[test]
fn output_path_uses_basename() {
    let sink = DirHighlightSink::new("output");
    assert_eq!(
        sink.output_path("frames/sub/img7.jpg").unwrap(),
        PathBuf::from("output").join("img7.jpg")
    );
    assert!(sink.output_path("..").is_err());
}

#[test]
fn dir_sink_creates_directory_and_writes() {
    let dir = PathBuf::from("target").join("unit_sink").join("highlights");
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = DirHighlightSink::new(&dir);
    let img = RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
    sink.push("clips/frame_001.png", &img).unwrap();

    let written = image::open(dir.join("frame_001.png")).unwrap().to_rgb8();
    assert_eq!(written, img);
}

#[test]
fn in_memory_sink_keeps_order() {
    let mut sink = InMemoryHighlightSink::new();
    sink.push("b.png", &RgbImage::new(1, 1)).unwrap();
    sink.push("a.png", &RgbImage::new(1, 1)).unwrap();
    let names: Vec<_> = sink.frames().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["b.png", "a.png"]);
}

#[test]
fn discard_accepts_everything() {
    assert!(DiscardHighlights.push("x.png", &RgbImage::new(1, 1)).is_ok());
}

#[test]
fn save_heatmap_creates_parent() {
    let path = PathBuf::from("target")
        .join("unit_sink")
        .join("nested")
        .join("heatmap.png");
    let _ = std::fs::remove_file(&path);
    save_heatmap(&RgbImage::new(3, 3), &path).unwrap();
    assert!(path.exists());
}
