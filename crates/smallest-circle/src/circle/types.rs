//! Basic value types for the enclosing-circle routines.
//!
//! - `Point`: plain 2D coordinate pair (`nalgebra::Vector2<f64>`).
//! - `Circle`: center + radius, immutable once built; `r == 0` is a valid point circle.
//! - `EPSILON`: absolute slack used by every containment test.

use nalgebra::Vector2;

/// Containment tolerance: `p` is inside `c` iff `|p - c| < r + EPSILON`.
pub const EPSILON: f64 = 1e-12;

/// A 2D point. No identity beyond its coordinates.
pub type Point = Vector2<f64>;

/// Closed disk `{ p : |p - center| <= r }` (tested with `EPSILON` slack).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub r: f64,
}

impl Circle {
    #[inline]
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self {
            center: Vector2::new(x, y),
            r,
        }
    }

    /// Degenerate circle of radius 0 at `p`.
    #[inline]
    pub fn point(p: Point) -> Self {
        Self { center: p, r: 0.0 }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.r == 0.0
    }

    /// Boundary-inclusive containment with `EPSILON` slack.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        super::util::distance(p, self.center) < self.r + EPSILON
    }

    /// Componentwise comparison of center and radius.
    pub fn approx_eq(&self, other: &Circle, tol: f64) -> bool {
        (self.center.x - other.center.x).abs() <= tol
            && (self.center.y - other.center.y).abs() <= tol
            && (self.r - other.r).abs() <= tol
    }
}
