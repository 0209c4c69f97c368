/// Round to the nearest integer (ties to even) and saturate into `u8`.
pub(crate) fn round_to_u8(v: f64) -> u8 {
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Linear blend `(1 - t) * c + t * target`, rounded into `u8`.
pub(crate) fn lerp_u8(c: u8, target: u8, t: f64) -> u8 {
    let t = t.clamp(0.0, 1.0);
    round_to_u8((1.0 - t) * f64::from(c) + t * f64::from(target))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
