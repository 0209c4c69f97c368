use std::fmt;

use crate::foundation::error::{ExposureError, ExposureResult};

/// Frame (and grid) dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameDims {
    /// Width in pixels (columns).
    pub width: u32,
    /// Height in pixels (rows).
    pub height: u32,
}

impl FrameDims {
    /// Create a dimension pair.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered by these dimensions.
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Row-major index of `(x, y)`; caller guarantees the point is in bounds.
    pub fn index(self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Return `true` when `(x, y)` lies inside the grid.
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Dimensions of an `image` buffer.
    pub fn of_image<I: image::GenericImageView>(img: &I) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }
}

impl fmt::Display for FrameDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Integer vertex in frame pixel coordinates.
///
/// Coordinates are not validated against any frame; they may be negative or out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Vertex {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Vertex {
    /// Create a vertex.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed sampling interval converting "covered in this frame" into elapsed seconds.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize)]
pub struct SecondsPerFrame(f64);

impl SecondsPerFrame {
    /// Create a validated interval; must be finite and strictly positive.
    pub fn new(secs: f64) -> ExposureResult<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(ExposureError::validation(format!(
                "seconds_per_frame must be a positive finite number, got {secs}"
            )));
        }
        Ok(Self(secs))
    }

    /// Interval in seconds.
    pub fn secs(self) -> f64 {
        self.0
    }
}

impl Default for SecondsPerFrame {
    fn default() -> Self {
        Self(0.1)
    }
}

impl<'de> serde::Deserialize<'de> for SecondsPerFrame {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Self::new(secs).map_err(serde::de::Error::custom)
    }
}

/// Straight (non-premultiplied) RGB8 color.
pub type Rgb8 = [u8; 3];

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
