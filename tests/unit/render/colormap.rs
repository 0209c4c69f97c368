use super::*;

#[test]
fn jet_endpoints_match_reference_table() {
    assert_eq!(Colormap::Jet.sample(0.0), [0, 0, 128]);
    assert_eq!(Colormap::Jet.sample(1.0), [128, 0, 0]);
}

#[test]
fn jet_midpoint_is_green_dominant() {
    let [r, g, b] = Colormap::Jet.sample(0.5);
    assert_eq!(g, 255);
    assert!((120..=126).contains(&r));
    assert!((120..=126).contains(&b));
}

#[test]
fn out_of_range_inputs_are_clamped() {
    assert_eq!(Colormap::Jet.sample(-3.0), Colormap::Jet.sample(0.0));
    assert_eq!(Colormap::Jet.sample(7.0), Colormap::Jet.sample(1.0));
    assert_eq!(Colormap::Jet.sample(f64::NAN), Colormap::Jet.sample(0.0));
}

#[test]
fn gray_is_linear() {
    assert_eq!(Colormap::Gray.sample(0.0), [0, 0, 0]);
    assert_eq!(Colormap::Gray.sample(1.0), [255, 255, 255]);
    assert_eq!(Colormap::Gray.sample(0.5), [128, 128, 128]);
}

#[test]
fn deserializes_snake_case_names() {
    let c: Colormap = serde_json::from_str("\"gray\"").unwrap();
    assert_eq!(c, Colormap::Gray);
}
