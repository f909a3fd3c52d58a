//! Curated API surface (UNSTABLE).
//!
//! - Prefer these re-exports over reaching into `circle::*` submodules.
//! - The solver building blocks are exposed for experiments that fix boundary
//!   points by hand.

// Driver and reference
pub use crate::circle::{make_circle, make_circle_naive, make_circle_with_rng};
// Building blocks
pub use crate::circle::{
    cross, distance, is_in_circle, make_circle_one_point, make_circle_two_points,
    make_circumcircle, make_diameter, Circle, Point, EPSILON,
};
// Seeded point clouds
pub use crate::circle::rand::{draw_points, PointCloud, ReplayToken as CloudReplay};

use rand::Rng;

/// Radius ratio `r(incremental) / r(reference)` for `points`, shuffling with
/// `rng`; 1.0 means the incremental result matches the brute-force minimum.
///
/// `None` for empty input. When the reference radius is zero (all points equal)
/// the ratio is 1.0 if the incremental radius is zero too, infinite otherwise.
pub fn radius_ratio_vs_naive<R: Rng + ?Sized>(points: &[Point], rng: &mut R) -> Option<f64> {
    let fast = make_circle_with_rng(points, rng)?;
    let slow = make_circle_naive(points)?;
    if slow.r == 0.0 {
        return Some(if fast.r == 0.0 { 1.0 } else { f64::INFINITY });
    }
    Some(fast.r / slow.r)
}
