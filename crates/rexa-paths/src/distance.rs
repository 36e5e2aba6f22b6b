//! Grid distance metrics.

use rexa_core::Point;

/// Cost of one diagonal step.
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    dx.hypot(dy)
}

/// Octile distance: the exact cost of unobstructed 8-direction movement
/// with unit cardinal steps and `√2` diagonal steps.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    SQRT_2 * dx.min(dy) as f64 + (dx - dy).abs() as f64
}
