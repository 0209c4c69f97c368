use crate::annotation::polygon::Polygon;
use crate::foundation::core::Vertex;
use crate::raster::mask::CoverageMask;

/// Fill a convex polygon into `mask` with `value`.
///
/// Integer vertex coordinates sit on pixel centers. A pixel is covered when its center lies
/// inside the polygon or on its boundary, so edges and vertices are part of the region. Pixels
/// outside the mask are clipped away; vertices may lie anywhere.
///
/// Covered pixels are overwritten with `value`, not accumulated, so a later call wins where two
/// polygons overlap. Input must be convex and non-self-intersecting; other shapes get the
/// per-row span between the outermost edge crossings.
pub fn fill_convex_poly(mask: &mut CoverageMask, poly: &Polygon, value: f64) {
    let dims = mask.dims();
    if dims.area() == 0 {
        return;
    }

    let (y_lo, y_hi) = poly.y_extent();
    let y_start = i64::from(y_lo).max(0);
    let y_end = i64::from(y_hi).min(i64::from(dims.height) - 1);
    let x_max = i64::from(dims.width) - 1;

    for y in y_start..=y_end {
        let Some((left, right)) = row_span(poly, y) else {
            continue;
        };
        let left = left.max(0);
        let right = right.min(x_max);
        if left > right {
            continue;
        }
        let row = mask.row_mut(y as u32);
        row[left as usize..=right as usize].fill(value);
    }
}

/// Integer pixel span `[left, right]` covered by `poly` on row `y`.
fn row_span(poly: &Polygon, y: i64) -> Option<(i64, i64)> {
    let mut left = i64::MAX;
    let mut right = i64::MIN;

    for (a, b) in poly.edges() {
        if let Some((lo, hi)) = edge_crossing(a, b, y) {
            left = left.min(lo);
            right = right.max(hi);
        }
    }

    (left <= right).then_some((left, right))
}

/// `(ceil(x), floor(x))` where edge `a -> b` crosses row `y`; horizontal edges on the row yield
/// their whole extent.
fn edge_crossing(a: Vertex, b: Vertex, y: i64) -> Option<(i64, i64)> {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));

    if ay == by {
        return (ay == y).then(|| (ax.min(bx), ax.max(bx)));
    }
    if y < ay.min(by) || y > ay.max(by) {
        return None;
    }

    // x = ax + (y - ay) * (bx - ax) / (by - ay), kept as an exact rational num / den.
    let (ax, ay, bx, by, y) = (
        i128::from(ax),
        i128::from(ay),
        i128::from(bx),
        i128::from(by),
        i128::from(y),
    );
    let mut num = ax * (by - ay) + (y - ay) * (bx - ax);
    let mut den = by - ay;
    if den < 0 {
        num = -num;
        den = -den;
    }
    let floor = num.div_euclid(den);
    let ceil = if num.rem_euclid(den) == 0 {
        floor
    } else {
        floor + 1
    };
    // The crossing lies between ax and bx, both i32.
    let (ceil, floor) = (ceil as i64, floor as i64);
    Some((ceil, floor))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/fill.rs"]
mod tests;
