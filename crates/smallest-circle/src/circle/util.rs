use super::types::{Circle, Point};

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Twice the signed area of the triangle `(p0, p1, p2)`.
///
/// Positive if `p2` lies left of the directed line `p0 → p1`, negative if right,
/// zero if the three points are collinear. Orientation only; not a length.
#[inline]
pub fn cross(p0: Point, p1: Point, p2: Point) -> f64 {
    (p1.x - p0.x) * (p2.y - p0.y) - (p1.y - p0.y) * (p2.x - p0.x)
}

/// `true` iff `c` is present and contains `p` (boundary inclusive, `EPSILON` slack).
#[inline]
pub fn is_in_circle(c: Option<&Circle>, p: Point) -> bool {
    c.is_some_and(|c| c.contains(p))
}

/// Largest absolute coordinate in `points`; 0 for an empty slice.
pub(crate) fn coordinate_scale(points: &[Point]) -> f64 {
    points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max)
}
