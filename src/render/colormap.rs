use crate::foundation::core::Rgb8;
use crate::foundation::math::round_to_u8;

/// Piecewise-linear channel: `(position, value)` anchors sorted by position over `[0, 1]`.
type Channel = &'static [(f64, f64)];

const JET_R: Channel = &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const JET_G: Channel = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const JET_B: Channel = &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

/// Available colormaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    /// Blue → cyan → yellow → red.
    #[default]
    Jet,
    /// Black → white.
    Gray,
}

impl Colormap {
    /// Map `t` (clamped to `[0, 1]`) to a color.
    pub fn sample(self, t: f64) -> Rgb8 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Jet => [
                channel(JET_R, t),
                channel(JET_G, t),
                channel(JET_B, t),
            ],
            Self::Gray => {
                let v = round_to_u8(t * 255.0);
                [v, v, v]
            }
        }
    }
}

fn channel(anchors: Channel, t: f64) -> u8 {
    let mut prev = anchors[0];
    for &cur in &anchors[1..] {
        if t <= cur.0 {
            let span = cur.0 - prev.0;
            let f = if span > 0.0 { (t - prev.0) / span } else { 0.0 };
            return round_to_u8((prev.1 + f * (cur.1 - prev.1)) * 255.0);
        }
        prev = cur;
    }
    round_to_u8(prev.1 * 255.0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/colormap.rs"]
mod tests;
