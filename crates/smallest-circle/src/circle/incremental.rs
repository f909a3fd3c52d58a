//! Randomized incremental driver (expected O(n)).
//!
//! Shuffles a private copy of the input, then walks it while keeping the
//! invariant "current circle covers every point seen so far". A violating point
//! re-anchors the circle via `make_circle_one_point` over the prefix ending at it.

use rand::seq::SliceRandom;
use rand::Rng;

use super::solvers::make_circle_one_point;
use super::types::{Circle, Point};
use super::util::is_in_circle;

/// Smallest circle enclosing `points`, shuffled with the thread-local RNG.
///
/// Returns `None` for empty input and a radius-0 circle for a single point.
pub fn make_circle(points: &[Point]) -> Option<Circle> {
    make_circle_with_rng(points, &mut rand::thread_rng())
}

/// Same as [`make_circle`] with a caller-supplied RNG (e.g. a seeded `StdRng`).
///
/// The result does not depend on the RNG beyond floating-point tie-breaking;
/// only the running time does.
pub fn make_circle_with_rng<R: Rng + ?Sized>(points: &[Point], rng: &mut R) -> Option<Circle> {
    let mut shuffled = points.to_vec();
    shuffled.shuffle(rng);

    let mut c: Option<Circle> = None;
    let mut reanchors = 0usize;
    for (i, &p) in shuffled.iter().enumerate() {
        if !is_in_circle(c.as_ref(), p) {
            c = Some(make_circle_one_point(&shuffled[..=i], p));
            reanchors += 1;
        }
    }
    tracing::debug!(n = points.len(), reanchors, "make_circle");
    c
}
