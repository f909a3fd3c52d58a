//! Smallest enclosing circle of a finite 2D point set.
//!
//! Purpose
//! - Randomized incremental construction (expected O(n)): shuffle, then repair
//!   the running circle whenever a point falls outside it.
//! - Containment is boundary inclusive with absolute slack `EPSILON`, so points
//!   placed exactly on a constructed boundary never trigger a re-expansion.
//!
//! Layering (leaf first)
//! - `util`: distance, orientation, containment.
//! - `construct`: diameter circle, circumcircle (`None` when collinear).
//! - `solvers`: one and two fixed boundary points.
//! - `incremental`: the shuffling driver `make_circle`.
//! - `naive`: exhaustive reference used for cross-checks.

mod construct;
mod incremental;
mod naive;
pub mod rand;
mod solvers;
mod types;
mod util;

pub use construct::{make_circumcircle, make_diameter};
pub use incremental::{make_circle, make_circle_with_rng};
pub use naive::make_circle_naive;
pub use solvers::{make_circle_one_point, make_circle_two_points};
pub use types::{Circle, Point, EPSILON};
pub use util::{cross, distance, is_in_circle};
