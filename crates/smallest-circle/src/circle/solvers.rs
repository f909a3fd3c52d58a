//! Boundary-expansion solvers.
//!
//! - `make_circle_one_point`: smallest circle over `points` with `p` on the boundary.
//! - `make_circle_two_points`: smallest circle over `points` with `p` and `q` on the boundary.
//!
//! Both assume the caller has already established that the fixed points must be
//! boundary points (the incremental driver guarantees this via its prefix order).

use super::construct::{make_circumcircle, make_diameter};
use super::types::{Circle, Point};
use super::util::cross;

/// Smallest circle enclosing `points` with `p` on its boundary.
///
/// Starts from the point circle at `p` and grows it along `points` in order. An
/// uncovered `q` turns a degenerate circle into the diameter circle `(p, q)`;
/// otherwise `q` becomes the second fixed point over the prefix seen so far.
///
/// Copies of `p` itself are skipped: at large magnitudes one ulp exceeds
/// `EPSILON`, so `p` can fail its own containment test by rounding.
pub fn make_circle_one_point(points: &[Point], p: Point) -> Circle {
    let mut c = Circle::point(p);
    for (i, &q) in points.iter().enumerate() {
        if q == p || c.contains(q) {
            continue;
        }
        c = if c.is_degenerate() {
            make_diameter(p, q)
        } else {
            make_circle_two_points(&points[..=i], p, q)
        };
    }
    c
}

/// Smallest circle enclosing `points` with both `p` and `q` on its boundary.
///
/// If the diameter circle of `(p, q)` already covers everything it is the answer.
/// Otherwise each other point `r` yields a circumcircle candidate on the side of
/// the directed line `p → q` where `r` lies. Per side we keep the candidate whose
/// center is furthest out along that side; the final pick prefers the left one
/// unless only a strictly smaller right one exists.
///
/// Copies of `p` and `q` count as covered by the diameter circle, since both lie
/// on its boundary by construction.
pub fn make_circle_two_points(points: &[Point], p: Point, q: Point) -> Circle {
    let diameter = make_diameter(p, q);
    if points
        .iter()
        .all(|&r| r == p || r == q || diameter.contains(r))
    {
        return diameter;
    }

    let mut left: Option<Circle> = None;
    let mut right: Option<Circle> = None;
    for &r in points {
        let side = cross(p, q, r);
        let Some(c) = make_circumcircle(p, q, r) else {
            continue;
        };
        let reach = cross(p, q, c.center);
        if side > 0.0 && left.is_none_or(|l| reach > cross(p, q, l.center)) {
            left = Some(c);
        } else if side < 0.0 && right.is_none_or(|rt| reach < cross(p, q, rt.center)) {
            right = Some(c);
        }
    }

    match (left, right) {
        (Some(l), None) => l,
        (Some(l), Some(rt)) if l.r <= rt.r => l,
        (_, Some(rt)) => rt,
        // Every off-line point was rejected: the set is collinear up to
        // rounding, so span its extremes along p → q.
        (None, None) => collinear_span(points, p, q),
    }
}

/// Diameter circle of the two extreme points of `points ∪ {p, q}` projected on
/// the direction `p → q`. Never smaller than the diameter circle of `(p, q)`.
fn collinear_span(points: &[Point], p: Point, q: Point) -> Circle {
    let dir = q - p;
    let (mut lo, mut hi) = ((p, 0.0), (q, dir.dot(&dir)));
    for &r in points {
        let t = dir.dot(&(r - p));
        if t < lo.1 {
            lo = (r, t);
        } else if t > hi.1 {
            hi = (r, t);
        }
    }
    make_diameter(lo.0, hi.0)
}
