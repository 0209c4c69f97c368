use image::RgbImage;

use crate::annotation::polygon::Polygon;
use crate::foundation::core::{FrameDims, Rgb8};
use crate::foundation::error::{ExposureError, ExposureResult};
use crate::foundation::math::lerp_u8;
use crate::raster::mask::CoverageMask;
use crate::raster::stroke::stroke_closed_polygon;

/// Widest outline a style may ask for.
pub const MAX_OUTLINE_THICKNESS: u32 = 64;

/// Look of a highlighted frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightStyle {
    /// Outline color.
    pub outline_rgb: Rgb8,
    /// Outline width in pixels.
    pub thickness: u32,
    /// Background blend weight towards white, in `[0, 1]`.
    pub tint: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            outline_rgb: [255, 0, 0],
            thickness: 2,
            tint: 0.5,
        }
    }
}

impl HighlightStyle {
    /// Reject outline widths outside `1..=MAX_OUTLINE_THICKNESS` and tints outside `[0, 1]`.
    pub fn validate(&self) -> ExposureResult<()> {
        if !(1..=MAX_OUTLINE_THICKNESS).contains(&self.thickness) {
            return Err(ExposureError::validation(format!(
                "outline thickness must be in 1..={MAX_OUTLINE_THICKNESS}, got {}",
                self.thickness
            )));
        }
        if !(0.0..=1.0).contains(&self.tint) {
            return Err(ExposureError::validation(format!(
                "tint must be in [0, 1], got {}",
                self.tint
            )));
        }
        Ok(())
    }
}

const WHITE: u8 = 255;

/// Highlight `frame` using a precomputed mask.
///
/// Outlines are drawn first; then every pixel where `mask` is zero is blended towards white.
/// Pixels where `mask` is non-zero (binary or weighted) keep their value, outline included.
/// The input frame is not modified.
pub fn composite_with_mask(
    frame: &RgbImage,
    polygons: &[Polygon],
    mask: &CoverageMask,
    style: &HighlightStyle,
) -> ExposureResult<RgbImage> {
    let dims = FrameDims::of_image(frame);
    if mask.dims() != dims {
        return Err(ExposureError::validation(format!(
            "highlight mask {} does not match frame {dims}",
            mask.dims()
        )));
    }

    let mut out = frame.clone();
    for poly in polygons {
        stroke_closed_polygon(&mut out, poly, style.outline_rgb, style.thickness);
    }

    for (x, y, px) in out.enumerate_pixels_mut() {
        if mask.is_foreground(x, y) {
            continue;
        }
        for c in px.0.iter_mut() {
            *c = lerp_u8(*c, WHITE, style.tint);
        }
    }
    Ok(out)
}

/// Highlight `frame`, rasterizing a binary mask from `polygons` first.
pub fn compute_mask_and_composite(
    frame: &RgbImage,
    polygons: &[Polygon],
    style: &HighlightStyle,
) -> ExposureResult<RgbImage> {
    let mask = CoverageMask::binary(FrameDims::of_image(frame), polygons);
    composite_with_mask(frame, polygons, &mask, style)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/highlight.rs"]
mod tests;
