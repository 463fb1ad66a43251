//! Interior joint angle from three landmark positions.

use crate::models::Point2D;

/// Interior angle in degrees at vertex `b`, normalized to [0, 180].
///
/// Total over all real-valued inputs. When `a` or `c` coincides with the
/// vertex the angle is geometrically undefined; the `atan2(0, 0) == 0`
/// algebra still produces an in-range value, which callers accept rather
/// than treat as an error.
pub fn knee_angle(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    let raw = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut degrees = raw.to_degrees().abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    degrees
}
