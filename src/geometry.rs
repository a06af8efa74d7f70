//! Geometry helpers for distance and polar-direction calculations.
//!
//! All antenna math works in degrees with the polar convention: 0° points
//! along the positive x axis and angles grow counter-clockwise.

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Direction from `(x1, y1)` towards `(x2, y2)` in degrees, normalized
/// into `[0, 360)`.
///
/// `atan2` yields an angle in `(-180, 180]`; negative results are shifted
/// by a full turn so callers can sort and compare directions directly.
pub fn direction(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let mut dir = (y2 - y1).atan2(x2 - x1).to_degrees();
    if dir < 0.0 {
        dir += 360.0;
    }
    dir
}

/// Angular size of the arc walked counter-clockwise from `from` to `to`,
/// in degrees. Always in `[0, 360)`.
pub fn arc_between(from: f64, to: f64) -> f64 {
    ((to - from) + 360.0) % 360.0
}
