//! Reproducible point clouds for tests, benches, and the CLI sampler.
//!
//! Model
//! - A cloud is `count` points drawn from one of a few shapes, scaled by
//!   `scale` around the origin.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the i-th cloud of a stream can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Shape the points are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    /// Uniform in `[-1, 1]²`.
    Square,
    /// Uniform in the unit disk.
    Disk,
    /// On the unit circle (every point is a hull vertex up to rounding).
    Circle,
    /// On a random segment through the origin (fully collinear).
    Line,
    /// Integer lattice `side × side` sampled with replacement (many duplicates
    /// and collinear runs).
    Lattice { side: u32 },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub shape: CloudShape,
    pub count: usize,
    /// Uniform scale applied after drawing.
    pub scale: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            shape: CloudShape::Disk,
            count: 100,
            scale: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a point cloud as `(x, y)` pairs.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<(f64, f64)> {
    let mut rng = tok.to_std_rng();
    let s = cfg.scale;
    match cfg.shape {
        CloudShape::Square => (0..cfg.count)
            .map(|_| {
                (
                    rng.gen_range(-1.0..=1.0) * s,
                    rng.gen_range(-1.0..=1.0) * s,
                )
            })
            .collect(),
        CloudShape::Disk => (0..cfg.count)
            .map(|_| {
                let th = rng.gen::<f64>() * TAU;
                let r = rng.gen::<f64>().sqrt() * s;
                (th.cos() * r, th.sin() * r)
            })
            .collect(),
        CloudShape::Circle => (0..cfg.count)
            .map(|_| {
                let th = rng.gen::<f64>() * TAU;
                (th.cos() * s, th.sin() * s)
            })
            .collect(),
        CloudShape::Line => {
            // Integer slope keeps the points exactly collinear in f64.
            let slope = f64::from(rng.gen_range(-3i32..=3));
            (0..cfg.count)
                .map(|_| {
                    let t = f64::from(rng.gen_range(-1000i32..=1000));
                    (t * s, slope * t * s)
                })
                .collect()
        }
        CloudShape::Lattice { side } => {
            let side = side.max(1);
            (0..cfg.count)
                .map(|_| {
                    let i = rng.gen_range(0..side);
                    let j = rng.gen_range(0..side);
                    (f64::from(i) * s, f64::from(j) * s)
                })
                .collect()
        }
    }
}
