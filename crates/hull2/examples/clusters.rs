//! Print hull edges for a few small labelled point sets.
//!
//! Usage:
//!   cargo run -p hull2 --example clusters
//!
//! Each set is hulled on its own; indices are positions within the set.

use hull2::compute_hull;

fn main() {
    let sets: [(&str, &[(f64, f64)]); 3] = [
        (
            "square+dups",
            &[
                (0.0, 0.0),
                (1.0, 0.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (0.0, 0.0),
                (1.0, 0.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (0.5, 0.5),
                (0.5, 0.5),
                (-1.0, -1.0),
            ],
        ),
        ("triangle", &[(0.0, 0.0), (1.0, 1.0), (2.0, 1.0)]),
        ("single", &[(3.0, 4.0)]),
    ];
    for (name, pts) in sets {
        match compute_hull(pts) {
            Ok(h) => println!(
                "{name}: n={}, edges={:?}, vertices={:?}",
                pts.len(),
                h.simplices(),
                h.vertex_indices()
            ),
            Err(e) => println!("{name}: {e}"),
        }
    }
}
