use image::RgbImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::exposure::accumulator::ExposureGrid;
use crate::render::colormap::Colormap;

/// Legend title; the unit of every grid value.
pub const LEGEND_TITLE: &str = "Exposure (seconds)";

const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Renderable view of a final exposure grid.
///
/// Rows run top to bottom as in the source frames and no ticks are drawn. The legend bar is
/// scaled by `min(1, height / width)` so it never outgrows the plot.
#[derive(Clone, Debug)]
pub struct HeatmapView<'a> {
    grid: &'a ExposureGrid,
    colormap: Colormap,
    vmin: f64,
    vmax: f64,
}

impl<'a> HeatmapView<'a> {
    /// View spanning `[0, peak]` with the `jet` colormap.
    pub fn new(grid: &'a ExposureGrid) -> Self {
        Self {
            grid,
            colormap: Colormap::Jet,
            vmin: 0.0,
            vmax: grid.peak(),
        }
    }

    /// Use another colormap.
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Underlying grid.
    pub fn grid(&self) -> &ExposureGrid {
        self.grid
    }

    /// Value range mapped onto the colormap.
    pub fn value_range(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }

    /// Legend title text.
    pub fn legend_title(&self) -> &'static str {
        LEGEND_TITLE
    }

    /// Legend height as a fraction of the plot height.
    pub fn legend_shrink(&self) -> f64 {
        let dims = self.grid.dims();
        if dims.width == 0 {
            return 1.0;
        }
        (f64::from(dims.height) / f64::from(dims.width)).min(1.0)
    }

    /// Legend bar height in pixels.
    pub fn legend_height(&self) -> u32 {
        (f64::from(self.grid.dims().height) * self.legend_shrink()).round() as u32
    }

    /// Legend bar width in pixels.
    pub fn legend_width(&self) -> u32 {
        (self.legend_height() / 20).max(4)
    }

    /// Position of `v` inside the value range, in `[0, 1]`.
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return 0.0;
        }
        ((v - self.vmin) / span).clamp(0.0, 1.0)
    }

    /// The grid alone, one output pixel per grid cell.
    pub fn colorize(&self) -> RgbImage {
        let dims = self.grid.dims();
        RgbImage::from_fn(dims.width, dims.height, |x, y| {
            let v = self.grid.get(x, y).unwrap_or(0.0);
            image::Rgb(self.colormap.sample(self.normalize(v)))
        })
    }

    /// Grid plus a vertical legend bar on its right, separated by a white gutter.
    #[tracing::instrument(skip(self), fields(dims = %self.grid.dims()))]
    pub fn render(&self) -> RgbImage {
        let dims = self.grid.dims();
        let bar_w = self.legend_width();
        let bar_h = self.legend_height();
        let bar_x = dims.width + bar_w;
        let bar_y = (dims.height - bar_h) / 2;

        let mut out = RgbImage::from_pixel(bar_x + bar_w, dims.height, image::Rgb(BACKGROUND));
        image::imageops::replace(&mut out, &self.colorize(), 0, 0);

        for row in 0..bar_h {
            // Top of the bar is the maximum.
            let t = if bar_h > 1 {
                1.0 - f64::from(row) / f64::from(bar_h - 1)
            } else {
                1.0
            };
            let color = image::Rgb(self.colormap.sample(t));
            let band = Rect::at(bar_x as i32, (bar_y + row) as i32).of_size(bar_w, 1);
            draw_filled_rect_mut(&mut out, band, color);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/heatmap.rs"]
mod tests;
