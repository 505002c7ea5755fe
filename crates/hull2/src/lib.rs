//! Planar convex hulls by recursive divide-and-conquer (QuickHull).
//!
//! Pipeline
//! - `prepare`: tag each input coordinate with its input position and sort
//!   lexicographically (x, then y).
//! - `partition`: split around the leftmost/rightmost points into an upper and
//!   a lower candidate set.
//! - `build`: recurse on each side, picking the farthest candidate from the
//!   current baseline and emitting an edge once a side runs out of candidates.
//! - `predicates`: orientation, point-line distance, and the subtended angle.
//!
//! Output edges reference positions in the caller's original (unsorted) slice;
//! that index stability is the contract downstream plotting relies on.

pub mod build;
pub mod error;
pub mod hull;
pub mod partition;
pub mod predicates;
pub mod prepare;
pub mod rand;
mod types;

pub use error::HullError;
pub use hull::{compute_hull, compute_hull_with, ConvexHull2};
pub use types::{Edge, HullCfg, Point, Side};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{compute_hull, compute_hull_with, ConvexHull2};
    pub use crate::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::{Edge, HullCfg, HullError, Point};
    pub use nalgebra::Vector2 as Vec2;
}
