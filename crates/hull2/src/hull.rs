//! Entry point: compute hull edges for a flat list of 2D points.

use nalgebra::Vector2;

use crate::build::build_hull;
use crate::error::HullError;
use crate::partition::top_split;
use crate::prepare::prepare;
use crate::types::{Edge, HullCfg, Side};

/// Convex hull as a list of edges over input positions.
///
/// Invariants:
/// - Every index refers to an input point on the hull boundary.
/// - Edges appear in recursion order: the upper side first, then the lower.
/// - Degenerate inputs (two points, all collinear) yield the same segment from
///   both sides; duplicates are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvexHull2 {
    edges: Vec<Edge>,
}

impl ConvexHull2 {
    /// Same as [`compute_hull`].
    pub fn new(points: &[(f64, f64)]) -> Result<Self, HullError> {
        compute_hull(points)
    }

    /// Convenience for callers holding nalgebra vectors.
    pub fn from_vectors(points: &[Vector2<f64>]) -> Result<Self, HullError> {
        let xy: Vec<(f64, f64)> = points.iter().map(|v| (v.x, v.y)).collect();
        compute_hull(&xy)
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Edges as `[a, b]` index pairs, ready for plotting lookups.
    pub fn simplices(&self) -> Vec<[usize; 2]> {
        self.edges.iter().map(|e| e.as_array()).collect()
    }

    /// Sorted, deduplicated input positions of the hull vertices.
    pub fn vertex_indices(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.edges.iter().flat_map(|e| [e.a, e.b]).collect();
        v.sort_unstable();
        v.dedup();
        v
    }
}

/// Hull of `points` with default configuration.
///
/// Fails with `HullError::InvalidInput` when fewer than two points are given.
pub fn compute_hull(points: &[(f64, f64)]) -> Result<ConvexHull2, HullError> {
    compute_hull_with(points, HullCfg::default())
}

/// Hull of `points` with an explicit configuration.
pub fn compute_hull_with(points: &[(f64, f64)], cfg: HullCfg) -> Result<ConvexHull2, HullError> {
    let sorted = prepare(points)?;
    let split = top_split(&sorted);
    let (mut edges, lower) = if sorted.len() >= cfg.parallel_min {
        rayon::join(
            || build_hull(&split.upper, split.first, split.last, Side::Upper, &cfg),
            || build_hull(&split.lower, split.first, split.last, Side::Lower, &cfg),
        )
    } else {
        (
            build_hull(&split.upper, split.first, split.last, Side::Upper, &cfg),
            build_hull(&split.lower, split.first, split.last, Side::Lower, &cfg),
        )
    };
    edges.extend(lower);
    tracing::debug!(
        points = points.len(),
        upper = split.upper.len(),
        lower = split.lower.len(),
        edges = edges.len(),
        "hull computed"
    );
    Ok(ConvexHull2 { edges })
}
