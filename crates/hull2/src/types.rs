//! Basic value types shared by the hull stages.
//!
//! - `Point`: coordinates plus the position in the caller's input slice.
//! - `Edge`: one hull segment as a pair of input positions.
//! - `Side`: which half of the top-level split a recursion serves.
//! - `HullCfg`: numeric and scheduling knobs.

use nalgebra::Vector2;

/// Index-tagged input point. Copied freely; never mutated after `prepare`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: Vector2<f64>,
    /// Zero-based position in the original, unsorted input.
    pub index: usize,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64, index: usize) -> Self {
        Self {
            pos: Vector2::new(x, y),
            index,
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

/// Hull segment between two input positions, in the order the recursion produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
    #[inline]
    pub(crate) fn between(start: &Point, end: &Point) -> Self {
        Self::new(start.index, end.index)
    }
    /// Same segment with endpoints ordered ascending.
    #[inline]
    pub fn canonical(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            Self::new(self.b, self.a)
        }
    }
    #[inline]
    pub fn as_array(self) -> [usize; 2] {
        [self.a, self.b]
    }
}

impl From<Edge> for (usize, usize) {
    fn from(e: Edge) -> Self {
        (e.a, e.b)
    }
}

/// Half of the top-level split. On `Lower` the orientation signs are mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Upper,
    Lower,
}

impl Side {
    /// Orientation value as seen from this side: positive means "outside".
    #[inline]
    pub fn outward(self, det: f64) -> f64 {
        match self {
            Side::Upper => det,
            Side::Lower => -det,
        }
    }
}

/// Hull configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Added to numerator and denominator of the point-line distance when the
    /// baseline has (near) zero length.
    pub denom_eps: f64,
    /// Candidate sets of at least this size recurse into both sub-edges with
    /// `rayon::join`. Edge order is unaffected.
    pub parallel_min: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            denom_eps: f64::MIN_POSITIVE,
            parallel_min: usize::MAX,
        }
    }
}

impl HullCfg {
    /// Default numerics, parallel recursion from `min` candidates on.
    pub fn parallel(min: usize) -> Self {
        Self {
            parallel_min: min.max(1),
            ..Self::default()
        }
    }
}
