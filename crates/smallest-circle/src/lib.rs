//! Smallest enclosing circle of 2D point sets.
//!
//! The whole crate is one algorithm: randomized incremental construction with
//! one- and two-point boundary solvers on top of diameter and circumcircle
//! primitives. See `circle` for the layering.
//!
//! API Policy
//! - `api` is the curated surface for callers (the CLI uses it).
//! - Breaking changes are fine when they improve clarity; there is no stable API yet.

pub mod api;
pub mod circle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use circle::{make_circle, Circle, Point, EPSILON};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::circle::rand::{draw_points, PointCloud, ReplayToken};
    pub use crate::circle::{
        make_circle, make_circle_naive, make_circle_with_rng, Circle, Point, EPSILON,
    };
    pub use nalgebra::Vector2 as Vec2;
}
