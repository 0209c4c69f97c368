use crate::annotation::polygon::Polygon;
use crate::foundation::core::FrameDims;
use crate::foundation::error::{ExposureError, ExposureResult};
use crate::raster::fill::fill_convex_poly;

/// Single-channel per-frame grid, row-major.
///
/// A binary mask stores `1.0` inside detections; a weighted mask stores the per-frame exposure
/// increment. Exterior pixels are always `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageMask {
    dims: FrameDims,
    data: Vec<f64>,
}

impl CoverageMask {
    /// Zero-filled mask.
    pub fn zeros(dims: FrameDims) -> Self {
        Self {
            dims,
            data: vec![0.0; dims.area()],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(dims: FrameDims, data: Vec<f64>) -> ExposureResult<Self> {
        if data.len() != dims.area() {
            return Err(ExposureError::validation(format!(
                "mask buffer has {} values, {dims} needs {}",
                data.len(),
                dims.area()
            )));
        }
        Ok(Self { dims, data })
    }

    /// Rasterize every polygon with `value`, in order. Later polygons overwrite earlier ones
    /// where they overlap.
    pub fn from_polygons(dims: FrameDims, polygons: &[Polygon], value: f64) -> Self {
        let mut mask = Self::zeros(dims);
        for poly in polygons {
            mask.fill_polygon(poly, value);
        }
        mask
    }

    /// Binary membership mask (`1.0` inside any polygon).
    pub fn binary(dims: FrameDims, polygons: &[Polygon]) -> Self {
        Self::from_polygons(dims, polygons, 1.0)
    }

    /// Write `value` into every pixel covered by `poly`.
    pub fn fill_polygon(&mut self, poly: &Polygon, value: f64) {
        fill_convex_poly(self, poly, value);
    }

    /// Mask dimensions.
    pub fn dims(&self) -> FrameDims {
        self.dims
    }

    /// Value at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        Some(self.data[self.dims.index(x, y)])
    }

    /// Return `true` when `(x, y)` holds a non-zero value.
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.get(x, y).is_some_and(|v| v != 0.0)
    }

    /// Number of non-zero pixels.
    pub fn covered_pixels(&self) -> usize {
        self.data.iter().filter(|v| **v != 0.0).count()
    }

    /// Row-major values.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [f64] {
        let w = self.dims.width as usize;
        let start = (y as usize) * w;
        &mut self.data[start..start + w]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;
