use crate::foundation::core::Point;

/// Wrap degrees into `[0, 360)`.
pub(crate) fn wrap_degrees(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if w >= 360.0 { 0.0 } else { w }
}

/// Unsigned angular distance between two directions, in `[0, 180]`.
pub(crate) fn angular_distance_deg(a: f64, b: f64) -> f64 {
    let rel = wrap_degrees(a - b);
    if rel > 180.0 { 360.0 - rel } else { rel }
}

/// Point at `radius` from `center` along `angle_deg`, y axis pointing down.
pub(crate) fn polar_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let a = angle_deg.to_radians();
    Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
