//! Ingestion: tag coordinates with their input position and sort.

use std::cmp::Ordering;

use crate::error::HullError;
use crate::types::Point;

/// Order by x, then y, using the IEEE total order (a valid sort key even
/// for NaN; finite values compare as usual apart from `-0.0 < 0.0`).
#[inline]
pub fn lexicographic_cmp(a: &Point, b: &Point) -> Ordering {
    a.x().total_cmp(&b.x()).then_with(|| a.y().total_cmp(&b.y()))
}

/// Tag each `(x, y)` with its 0-based position and sort ascending by (x, y).
///
/// Fails with `InvalidInput` for fewer than two points, before any other work.
/// The sort is stable, so exact duplicates keep their input order.
pub fn prepare(points: &[(f64, f64)]) -> Result<Vec<Point>, HullError> {
    HullError::check_count(points.len())?;
    let mut tagged: Vec<Point> = points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Point::new(x, y, i))
        .collect();
    tagged.sort_by(lexicographic_cmp);
    Ok(tagged)
}
