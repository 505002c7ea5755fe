//! Top-level split around the extreme points of the sorted input.

use crate::predicates::orientation;
use crate::types::Point;

/// Result of the initial split along the baseline `first → last`.
#[derive(Clone, Debug)]
pub struct TopSplit {
    /// Strictly left of `first → last`.
    pub upper: Vec<Point>,
    /// Strictly right of `first → last`.
    pub lower: Vec<Point>,
    /// Minimal (x, y).
    pub first: Point,
    /// Maximal (x, y).
    pub last: Point,
}

/// Classify the interior of `sorted` against the baseline between its ends.
///
/// Points on the baseline (orientation exactly zero) go to neither side.
/// Relative order is preserved within each side.
///
/// Pre: `sorted` is lexicographically ordered and has at least two points.
pub fn top_split(sorted: &[Point]) -> TopSplit {
    debug_assert!(sorted.len() >= 2, "top_split needs two points");
    let first = sorted[0];
    let last = sorted[sorted.len() - 1];
    let mut upper = Vec::new();
    let mut lower = Vec::new();
    for p in &sorted[1..sorted.len() - 1] {
        let det = orientation(&first, &last, p);
        if det > 0.0 {
            upper.push(*p);
        } else if det < 0.0 {
            lower.push(*p);
        }
    }
    TopSplit {
        upper,
        lower,
        first,
        last,
    }
}
