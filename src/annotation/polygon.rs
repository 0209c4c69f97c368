use crate::foundation::core::Vertex;

/// Number of vertices in every detection label.
pub const QUAD_VERTICES: usize = 4;

/// Quadrilateral detection region in frame pixel coordinates.
///
/// Vertices keep the order they were written in. Convexity is not checked here; the rasterizer
/// assumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Polygon {
    /// Vertices in source order.
    pub vertices: [Vertex; QUAD_VERTICES],
}

impl Polygon {
    /// Build a quadrilateral from four `(x, y)` pairs.
    pub fn quad(points: [(i32, i32); QUAD_VERTICES]) -> Self {
        Self {
            vertices: points.map(|(x, y)| Vertex::new(x, y)),
        }
    }

    /// Closed edge list: `(v0, v1), (v1, v2), (v2, v3), (v3, v0)`.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Inclusive `(min_y, max_y)` of the vertices.
    pub fn y_extent(&self) -> (i32, i32) {
        let mut lo = i32::MAX;
        let mut hi = i32::MIN;
        for v in &self.vertices {
            lo = lo.min(v.y);
            hi = hi.max(v.y);
        }
        (lo, hi)
    }
}

/// One parsed annotation record: a frame reference and its detection regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationLine {
    /// Opaque frame reference, usually an image path.
    pub frame: String,
    /// Detection regions in source order; `label_count == polygons.len()`.
    pub polygons: Vec<Polygon>,
}

impl AnnotationLine {
    /// Declared label count of the record.
    pub fn label_count(&self) -> usize {
        self.polygons.len()
    }
}
