//! Clamp and threshold rules applied after every input-driven pull mutation.

/// Pull distances smaller than this (in either direction) collapse to zero so
/// the page never rests a few pixels off its natural position.
pub const SNAP_THRESHOLD: f64 = 5.0;

/// `max(lo, min(hi, x))`.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(x))
}

/// Collapse negligible distances to exactly zero.
pub fn snap(x: f64) -> f64 {
    if x.abs() < SNAP_THRESHOLD {
        0.0
    } else {
        x
    }
}

/// Clamp to `[-max, +max]`, then snap.
pub fn bound(x: f64, max: f64) -> f64 {
    snap(clamp(x, -max, max))
}
