use super::*;
use crate::foundation::core::Vertex;

#[test]
fn single_label_keeps_vertex_order() {
    let rec = parse_line("img1.jpg 1 0 0 10 0 10 10 0 10").unwrap();
    assert_eq!(rec.frame, "img1.jpg");
    assert_eq!(rec.label_count(), 1);
    assert_eq!(
        rec.polygons[0].vertices,
        [
            Vertex::new(0, 0),
            Vertex::new(10, 0),
            Vertex::new(10, 10),
            Vertex::new(0, 10),
        ]
    );
}

#[test]
fn zero_labels_yield_no_polygons() {
    let rec = parse_line("frames/a.png 0").unwrap();
    assert_eq!(rec.frame, "frames/a.png");
    assert!(rec.polygons.is_empty());
}

#[test]
fn zero_labels_with_trailing_coordinates_is_malformed() {
    assert!(matches!(
        parse_line("a.png 0 1 2"),
        Err(ExposureError::MalformedAnnotation { .. })
    ));
}

#[test]
fn two_labels_split_in_groups_of_eight() {
    let rec = parse_line("f.jpg 2 1 2 3 4 5 6 7 8 -1 -2 -3 -4 900 901 902 903\n").unwrap();
    assert_eq!(rec.polygons.len(), 2);
    assert_eq!(rec.polygons[0].vertices[3], Vertex::new(7, 8));
    assert_eq!(rec.polygons[1].vertices[0], Vertex::new(-1, -2));
    assert_eq!(rec.polygons[1].vertices[3], Vertex::new(902, 903));
}

#[test]
fn short_coordinate_list_is_malformed() {
    let err = parse_line("f.jpg 2 0 0 10 0 10 10 0 10 1 1 2 2").unwrap_err();
    assert!(matches!(
        err,
        ExposureError::MalformedAnnotation { line: None, .. }
    ));
}

#[test]
fn non_integer_tokens_are_malformed() {
    assert!(parse_line("f.jpg -1").is_err());
    assert!(parse_line("f.jpg one 0 0 1 0 1 1 0 1").is_err());
    assert!(parse_line("f.jpg 1 0 0 1.5 0 1 1 0 1").is_err());
    assert!(parse_line("f.jpg 1 0 0 x 0 1 1 0 1").is_err());
}

#[test]
fn blank_line_is_malformed() {
    assert!(parse_line("").is_err());
    assert!(parse_line("   ").is_err());
    assert!(parse_line("only_frame.jpg").is_err());
}

#[test]
fn records_attach_line_numbers() {
    let text = "a.jpg 0\nb.jpg 1 0 0 1 0 1 1 0 1\n\nc.jpg 0\n";
    let out: Vec<_> = records(text).collect();
    assert_eq!(out.len(), 4);
    assert!(out[0].is_ok());
    assert_eq!(out[1].as_ref().unwrap().polygons.len(), 1);
    match &out[2] {
        Err(ExposureError::MalformedAnnotation { line, .. }) => assert_eq!(*line, Some(3)),
        other => panic!("expected malformed line 3, got {other:?}"),
    }
    assert!(out[3].is_ok());
}
