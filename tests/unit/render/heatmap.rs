use super::*;
use crate::annotation::polygon::Polygon;
use crate::exposure::accumulator::ExposureAccumulator;
use crate::foundation::core::FrameDims;
use crate::raster::mask::CoverageMask;

fn grid_with_square(dims: FrameDims, poly: Polygon, secs: f64) -> ExposureGrid {
    let mut acc = ExposureAccumulator::new();
    acc.initialize(dims).unwrap();
    acc.fold(&CoverageMask::from_polygons(dims, &[poly], secs))
        .unwrap();
    acc.finish().unwrap()
}

#[test]
fn value_range_spans_zero_to_peak() {
    let dims = FrameDims::new(8, 4);
    let grid = grid_with_square(dims, Polygon::quad([(0, 0), (1, 0), (1, 1), (0, 1)]), 0.3);
    let view = HeatmapView::new(&grid);
    assert_eq!(view.value_range(), (0.0, 0.3));
    assert_eq!(view.normalize(0.3), 1.0);
    assert_eq!(view.normalize(0.0), 0.0);
    assert_eq!(view.legend_title(), "Exposure (seconds)");
}

#[test]
fn wide_grid_shrinks_legend() {
    let dims = FrameDims::new(8, 4);
    let grid = grid_with_square(dims, Polygon::quad([(0, 0), (1, 0), (1, 1), (0, 1)]), 0.3);
    let view = HeatmapView::new(&grid);
    assert_eq!(view.legend_shrink(), 0.5);
    assert_eq!(view.legend_height(), 2);
    assert_eq!(view.legend_width(), 4);

    let img = view.render();
    assert_eq!(img.dimensions(), (16, 4));
    // Row 0 stays at the top: the exposed corner is the peak color.
    assert_eq!(img.get_pixel(0, 0).0, [128, 0, 0]);
    assert_eq!(img.get_pixel(7, 3).0, [0, 0, 128]);
    // Gutter and the area above the centred bar stay white.
    assert_eq!(img.get_pixel(9, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(12, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(12, 1).0, [128, 0, 0]);
    assert_eq!(img.get_pixel(12, 2).0, [0, 0, 128]);
    assert_eq!(img.get_pixel(12, 3).0, [255, 255, 255]);
}

#[test]
fn tall_grid_keeps_full_height_legend() {
    let dims = FrameDims::new(4, 8);
    let grid = grid_with_square(dims, Polygon::quad([(0, 0), (3, 0), (3, 3), (0, 3)]), 0.1);
    let view = HeatmapView::new(&grid);
    assert_eq!(view.legend_shrink(), 1.0);
    assert_eq!(view.legend_height(), 8);
}

#[test]
fn all_zero_grid_maps_to_colormap_floor() {
    let grid = ExposureGrid::zeros(FrameDims::new(5, 5));
    let img = HeatmapView::new(&grid).colorize();
    assert!(img.pixels().all(|p| p.0 == [0, 0, 128]));
}

#[test]
fn colormap_can_be_swapped() {
    let dims = FrameDims::new(4, 4);
    let grid = grid_with_square(dims, Polygon::quad([(0, 0), (1, 0), (1, 1), (0, 1)]), 1.0);
    let img = HeatmapView::new(&grid)
        .with_colormap(Colormap::Gray)
        .colorize();
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0]);
}
