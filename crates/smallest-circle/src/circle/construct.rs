//! Circle constructors: diameter circle of two points, circumcircle of three.

use super::types::{Circle, Point};
use super::util::distance;

/// Circle with segment `p0 p1` as diameter. Total.
#[inline]
pub fn make_diameter(p0: Point, p1: Point) -> Circle {
    Circle::new(
        (p0.x + p1.x) / 2.0,
        (p0.y + p1.y) / 2.0,
        distance(p0, p1) / 2.0,
    )
}

/// Circumscribed circle of `(p0, p1, p2)`.
///
/// Returns `None` when the determinant is exactly zero (collinear or coincident
/// points); callers treat that as "no candidate", not as an error.
pub fn make_circumcircle(p0: Point, p1: Point, p2: Point) -> Option<Circle> {
    let (ax, ay) = (p0.x, p0.y);
    let (bx, by) = (p1.x, p1.y);
    let (cx, cy) = (p2.x, p2.y);
    let d = (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by)) * 2.0;
    if d == 0.0 {
        return None;
    }
    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let x = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let y = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;
    let center = Point::new(x, y);
    Some(Circle {
        center,
        r: distance(center, p0),
    })
}
