use crate::foundation::core::FrameDims;
use crate::foundation::error::{ExposureError, ExposureResult};
use crate::raster::mask::CoverageMask;

/// Per-pixel cumulative exposure in seconds, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct ExposureGrid {
    dims: FrameDims,
    data: Vec<f64>,
}

impl ExposureGrid {
    /// Zero-filled grid.
    pub fn zeros(dims: FrameDims) -> Self {
        Self {
            dims,
            data: vec![0.0; dims.area()],
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> FrameDims {
        self.dims
    }

    /// Exposure at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        Some(self.data[self.dims.index(x, y)])
    }

    /// Row-major values.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Largest exposure in the grid; `0.0` for an empty grid.
    pub fn peak(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Number of pixels with non-zero exposure.
    pub fn exposed_pixels(&self) -> usize {
        self.data.iter().filter(|v| **v > 0.0).count()
    }

    fn add(&mut self, mask: &CoverageMask) {
        for (acc, v) in self.data.iter_mut().zip(mask.as_slice()) {
            *acc += *v;
        }
    }
}

/// Exposure accumulator with an explicit two-phase lifecycle.
///
/// Frame dimensions are unknown until the first frame is decoded, so the accumulator starts
/// `Uninitialized` and moves to `Ready` exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExposureAccumulator {
    /// No frame seen yet.
    #[default]
    Uninitialized,
    /// Grid allocated with the dimensions of the first frame.
    Ready(ExposureGrid),
}

impl ExposureAccumulator {
    /// Start in the `Uninitialized` state.
    pub fn new() -> Self {
        Self::Uninitialized
    }

    /// Allocate a zero grid. Fails if the grid already exists.
    pub fn initialize(&mut self, dims: FrameDims) -> ExposureResult<()> {
        if let Self::Ready(grid) = self {
            return Err(ExposureError::validation(format!(
                "exposure grid already initialized with {}",
                grid.dims()
            )));
        }
        tracing::debug!(%dims, "initializing exposure grid");
        *self = Self::Ready(ExposureGrid::zeros(dims));
        Ok(())
    }

    /// Check a frame against the established dimensions, initializing the grid on the first
    /// frame.
    pub fn admit_frame(&mut self, frame: &str, dims: FrameDims) -> ExposureResult<()> {
        let Self::Ready(grid) = self else {
            return self.initialize(dims);
        };
        if grid.dims() != dims {
            return Err(ExposureError::DimensionMismatch {
                frame: frame.to_string(),
                expected: grid.dims(),
                found: dims,
            });
        }
        Ok(())
    }

    /// Elementwise-add a non-negative coverage mask into the grid.
    ///
    /// The mask must match the grid shape and hold only finite, non-negative values; on error
    /// the grid is left untouched.
    pub fn fold(&mut self, mask: &CoverageMask) -> ExposureResult<()> {
        let Self::Ready(grid) = self else {
            return Err(ExposureError::validation(
                "fold called before the exposure grid was initialized",
            ));
        };
        if mask.dims() != grid.dims() {
            return Err(ExposureError::validation(format!(
                "mask shape {} does not match exposure grid {}",
                mask.dims(),
                grid.dims()
            )));
        }
        if let Some(bad) = mask
            .as_slice()
            .iter()
            .find(|v| !v.is_finite() || **v < 0.0)
        {
            return Err(ExposureError::validation(format!(
                "coverage contribution must be finite and non-negative, got {bad}"
            )));
        }
        grid.add(mask);
        Ok(())
    }

    /// Borrow the grid, if any frame has been admitted.
    pub fn grid(&self) -> Option<&ExposureGrid> {
        match self {
            Self::Ready(grid) => Some(grid),
            Self::Uninitialized => None,
        }
    }

    /// Final grid for rendering. Fails when no frame was ever processed.
    pub fn finish(self) -> ExposureResult<ExposureGrid> {
        match self {
            Self::Ready(grid) => Ok(grid),
            Self::Uninitialized => Err(ExposureError::validation(
                "no frames were processed; exposure grid was never initialized",
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/exposure/accumulator.rs"]
mod tests;
