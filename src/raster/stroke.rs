use image::{Rgb, RgbImage};
use imageproc::drawing::{BresenhamLineIter, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::annotation::polygon::Polygon;
use crate::foundation::core::{FrameDims, Rgb8, Vertex};

/// Widest brush honored; wider requests are narrowed to this.
pub const MAX_BRUSH: u32 = 1 << 16;

/// Draw the closed outline of `poly` onto `img` with a square brush `thickness` pixels wide.
///
/// Each brush stamp is clipped to the image, so large brushes on small frames stay cheap.
/// Segments whose brushed bounding box misses the image are skipped outright.
pub fn stroke_closed_polygon(img: &mut RgbImage, poly: &Polygon, color: Rgb8, thickness: u32) {
    let thickness = thickness.clamp(1, MAX_BRUSH);
    for (a, b) in poly.edges() {
        stroke_segment(img, a, b, Rgb(color), thickness);
    }
}

fn stroke_segment(img: &mut RgbImage, a: Vertex, b: Vertex, color: Rgb<u8>, thickness: u32) {
    let dims = FrameDims::of_image(img);
    let (lo, hi) = brush_offsets(thickness);
    if !segment_reaches(dims, a, b, lo, hi) {
        return;
    }

    let start = (a.x as f32, a.y as f32);
    let end = (b.x as f32, b.y as f32);
    for (x, y) in BresenhamLineIter::new(start, end) {
        if !box_reaches(dims, (x, x), (y, y), lo, hi) {
            continue;
        }
        let brush = Rect::at(x + lo, y + lo).of_size(thickness, thickness);
        draw_filled_rect_mut(img, brush, color);
    }
}

/// Brush extent around the center pixel: `lo..=hi`, biased towards `+` for even widths.
fn brush_offsets(thickness: u32) -> (i32, i32) {
    let t = thickness.min(MAX_BRUSH) as i32;
    (-(t - 1) / 2, t / 2)
}

fn segment_reaches(dims: FrameDims, a: Vertex, b: Vertex, lo: i32, hi: i32) -> bool {
    box_reaches(dims, (a.x.min(b.x), a.x.max(b.x)), (a.y.min(b.y), a.y.max(b.y)), lo, hi)
}

/// Whether the box `xs x ys`, grown by the brush, overlaps the image.
fn box_reaches(dims: FrameDims, xs: (i32, i32), ys: (i32, i32), lo: i32, hi: i32) -> bool {
    if dims.area() == 0 {
        return false;
    }
    let (lo, hi) = (i64::from(lo), i64::from(hi));
    i64::from(xs.1) + hi >= 0
        && i64::from(ys.1) + hi >= 0
        && i64::from(xs.0) + lo < i64::from(dims.width)
        && i64::from(ys.0) + lo < i64::from(dims.height)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/stroke.rs"]
mod tests;
