//! Recursive hull builder.
//!
//! One step on a baseline `start → end` with a non-empty candidate set:
//! 1. pick the candidate farthest from the baseline (ties: larger angle at
//!    `start` between the rays to `end` and to the candidate),
//! 2. keep candidates outside `start → extreme` for the first sub-edge and
//!    candidates outside `extreme → end` for the second; the rest lie inside
//!    the triangle and are dropped,
//! 3. recurse on both sub-edges.
//!
//! An empty candidate set emits `start → end` as a hull edge. Each call returns
//! its own edge list; the caller concatenates first-branch then second-branch,
//! so the order is the same whether or not the branches run in parallel.

use crate::predicates::{angle_at, distance_to_line, orientation};
use crate::types::{Edge, HullCfg, Point, Side};

/// Hull edges covering `candidates` beyond the baseline `start → end`.
///
/// Every candidate must lie strictly outside the baseline as seen from `side`.
/// Terminates because each level excludes the extreme point and a candidate
/// survives into at most one sub-set.
pub fn build_hull(
    candidates: &[Point],
    start: Point,
    end: Point,
    side: Side,
    cfg: &HullCfg,
) -> Vec<Edge> {
    if candidates.is_empty() {
        return vec![Edge::between(&start, &end)];
    }
    let k = farthest_candidate(candidates, &start, &end, cfg);
    let extreme = candidates[k];
    let (near, far) = split_candidates(candidates, k, &start, &end, side);

    let (mut edges, tail) = if candidates.len() >= cfg.parallel_min {
        rayon::join(
            || build_hull(&near, start, extreme, side, cfg),
            || build_hull(&far, extreme, end, side, cfg),
        )
    } else {
        (
            build_hull(&near, start, extreme, side, cfg),
            build_hull(&far, extreme, end, side, cfg),
        )
    };
    edges.extend(tail);
    edges
}

/// Position in `candidates` of the extreme point for the baseline `start → end`.
///
/// Maximum perpendicular distance wins. On an exact distance tie the candidate
/// with the larger angle at `start` (rays to `end` and to the candidate) wins;
/// on a further tie the earlier candidate is kept. The running angle starts at
/// the first candidate's and only changes on a tie win, not when a strictly
/// farther candidate takes over.
///
/// Pre: `candidates` is non-empty.
pub fn farthest_candidate(candidates: &[Point], start: &Point, end: &Point, cfg: &HullCfg) -> usize {
    let mut best = 0usize;
    let mut best_dist = distance_to_line(start, end, &candidates[0], cfg.denom_eps);
    let mut best_angle = angle_at(start, end, &candidates[0]);
    for (i, p) in candidates.iter().enumerate().skip(1) {
        let d = distance_to_line(start, end, p, cfg.denom_eps);
        if d > best_dist {
            best = i;
            best_dist = d;
        } else if d == best_dist {
            let ang = angle_at(start, end, p);
            if ang > best_angle {
                best = i;
                best_angle = ang;
            }
        }
    }
    best
}

/// Split all candidates except `candidates[extreme]` into those outside
/// `start → extreme` and those outside `extreme → end`, preserving order.
pub fn split_candidates(
    candidates: &[Point],
    extreme: usize,
    start: &Point,
    end: &Point,
    side: Side,
) -> (Vec<Point>, Vec<Point>) {
    let apex = candidates[extreme];
    let mut near = Vec::new();
    let mut far = Vec::new();
    for (i, p) in candidates.iter().enumerate() {
        if i == extreme {
            continue;
        }
        if side.outward(orientation(start, &apex, p)) > 0.0 {
            near.push(*p);
        } else if side.outward(orientation(&apex, end, p)) > 0.0 {
            far.push(*p);
        }
    }
    (near, far)
}
