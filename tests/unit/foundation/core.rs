use super::*;

#[test]
fn frame_dims_index_is_row_major() {
    let d = FrameDims::new(4, 3);
    assert_eq!(d.area(), 12);
    assert_eq!(d.index(0, 0), 0);
    assert_eq!(d.index(3, 0), 3);
    assert_eq!(d.index(0, 1), 4);
    assert_eq!(d.index(3, 2), 11);
}

#[test]
fn frame_dims_contains_boundaries() {
    let d = FrameDims::new(4, 3);
    assert!(d.contains(0, 0));
    assert!(d.contains(3, 2));
    assert!(!d.contains(4, 2));
    assert!(!d.contains(3, 3));
    assert!(!d.contains(-1, 0));
}

#[test]
fn seconds_per_frame_rejects_non_positive() {
    assert!(SecondsPerFrame::new(0.1).is_ok());
    assert!(SecondsPerFrame::new(0.0).is_err());
    assert!(SecondsPerFrame::new(-1.0).is_err());
    assert!(SecondsPerFrame::new(f64::NAN).is_err());
    assert!(SecondsPerFrame::new(f64::INFINITY).is_err());
}

#[test]
fn seconds_per_frame_deserialize_validates() {
    let ok: SecondsPerFrame = serde_json::from_str("0.25").unwrap();
    assert_eq!(ok.secs(), 0.25);
    assert!(serde_json::from_str::<SecondsPerFrame>("-0.5").is_err());
}
