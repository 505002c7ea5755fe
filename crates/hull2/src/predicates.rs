//! Geometric primitives on raw coordinates.
//!
//! All functions are pure. Formulas are written out term by term so that the
//! sign of `orientation` is reproducible across callers (no vector helpers that
//! could reassociate the products).

use crate::types::Point;

/// Twice the signed area of triangle (a, b, c).
///
/// Positive: `c` strictly left of the directed line a→b. Negative: strictly
/// right. Zero: collinear.
#[inline]
pub fn orientation(a: &Point, b: &Point, c: &Point) -> f64 {
    (a.x() * b.y() + b.x() * c.y() + c.x() * a.y())
        - (a.y() * b.x() + b.y() * c.x() + c.y() * a.x())
}

/// Squared Euclidean distance.
#[inline]
pub fn length_squared(p: &Point, q: &Point) -> f64 {
    let dx = p.x() - q.x();
    let dy = p.y() - q.y();
    dx * dx + dy * dy
}

/// Perpendicular distance from `p` to the line through `start` and `end`.
///
/// When the baseline length is at or below `eps` (coincident endpoints), `eps`
/// is added to numerator and denominator so the result stays finite.
pub fn distance_to_line(start: &Point, end: &Point, p: &Point, eps: f64) -> f64 {
    let dx = end.x() - start.x();
    let dy = end.y() - start.y();
    let num = (dx * (start.y() - p.y()) - (start.x() - p.x()) * dy).abs();
    let denom = (dx * dx + dy * dy).sqrt();
    if denom <= eps {
        (num + eps) / (denom + eps)
    } else {
        num / denom
    }
}

/// Angle in radians at `vertex` between the rays to `a` and `b`, in [0, π].
///
/// Law of cosines on squared side lengths. Rounding can push the cosine just
/// outside [-1, 1]; it is clamped (above 1 → angle 0, below -1 → angle π).
/// A ray of zero length yields 0.
pub fn angle_at(vertex: &Point, a: &Point, b: &Point) -> f64 {
    let va2 = length_squared(vertex, a);
    let vb2 = length_squared(vertex, b);
    let ab2 = length_squared(a, b);
    let denom = 2.0 * va2.sqrt() * vb2.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    let cos = (va2 + vb2 - ab2) / denom;
    cos.clamp(-1.0, 1.0).acos()
}
