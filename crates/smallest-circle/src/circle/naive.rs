//! Brute-force reference construction, O(n^4).
//!
//! Every minimal enclosing circle is either the diameter circle of two input
//! points or the circumcircle of three; enumerate them all and keep the smallest
//! one covering everything. Meant for cross-checking on small inputs.
//!
//! Coverage uses `EPSILON` scaled by the largest coordinate: at large magnitudes
//! the absolute `EPSILON` is below one ulp and would reject every candidate.

use super::construct::{make_circumcircle, make_diameter};
use super::types::{Circle, Point, EPSILON};
use super::util::{coordinate_scale, distance};

/// Smallest enclosing circle by exhaustive search. `None` only for empty input.
///
/// If no candidate covers within the slack, the candidate with the least
/// overshoot is returned instead.
pub fn make_circle_naive(points: &[Point]) -> Option<Circle> {
    match points {
        [] => return None,
        [p] => return Some(Circle::point(*p)),
        _ => {}
    }
    let slack = EPSILON * (1.0 + coordinate_scale(points));
    let overshoot = |c: &Circle| {
        points
            .iter()
            .map(|&p| distance(p, c.center) - c.r)
            .fold(f64::NEG_INFINITY, f64::max)
    };
    let mut best: Option<Circle> = None;
    let mut closest: Option<(Circle, f64)> = None;
    let mut offer = |c: Circle| {
        if best.is_some_and(|b| c.r >= b.r) {
            return;
        }
        let over = overshoot(&c);
        if over <= slack {
            best = Some(c);
        } else if closest.is_none_or(|(_, o)| over < o) {
            closest = Some((c, over));
        }
    };

    let n = points.len();
    for i in 0..n {
        for j in (i + 1)..n {
            offer(make_diameter(points[i], points[j]));
            for k in (j + 1)..n {
                if let Some(c) = make_circumcircle(points[i], points[j], points[k]) {
                    offer(c);
                }
            }
        }
    }
    best.or(closest.map(|(c, _)| c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn naive_small_cases() {
        assert!(make_circle_naive(&[]).is_none());
        let one = make_circle_naive(&[vector![2.0, 3.0]]).unwrap();
        assert_eq!(one, Circle::new(2.0, 3.0, 0.0));

        let tri = [vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]];
        let c = make_circle_naive(&tri).unwrap();
        assert!(c.approx_eq(&Circle::new(2.0, 1.5, 2.5), 1e-12));
    }

    #[test]
    fn naive_present_at_large_magnitude() {
        let s = 1e5;
        let pts = [
            vector![0.3 * s, 0.1 * s],
            vector![-0.7 * s, 0.4 * s],
            vector![0.2 * s, -0.9 * s],
            vector![0.05 * s, 0.02 * s],
        ];
        let c = make_circle_naive(&pts).expect("non-empty input has a circle");
        let slack = 1e-9 * s;
        assert!(pts.iter().all(|&p| distance(p, c.center) <= c.r + slack));
        assert!(c.r > 0.5 * s);
    }

    #[test]
    fn naive_all_duplicates() {
        let p = vector![1.0, -1.0];
        let c = make_circle_naive(&[p, p, p]).unwrap();
        assert_eq!(c, Circle::new(1.0, -1.0, 0.0));
    }
}
