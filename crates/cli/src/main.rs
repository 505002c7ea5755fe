use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod groups;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar convex hulls for tabular point data")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Hull two numeric CSV columns, one hull per group, and write JSON edges
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// Column used as x
        #[arg(long)]
        x: String,
        /// Column used as y
        #[arg(long)]
        y: String,
        /// Optional label column; rows are hulled per distinct label
        #[arg(long)]
        group: Option<String>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Draw a reproducible point cloud and write its points and hull
    Sample {
        #[arg(long, value_enum, default_value_t = Shape::Disk)]
        shape: Shape,
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Square,
    Disk,
    Circle,
    Line,
    Lattice,
}

impl Shape {
    fn to_cloud(self) -> CloudShape {
        match self {
            Shape::Square => CloudShape::Square,
            Shape::Disk => CloudShape::Disk,
            Shape::Circle => CloudShape::Circle,
            Shape::Line => CloudShape::Line,
            Shape::Lattice => CloudShape::Lattice { side: 16 },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            x,
            y,
            group,
            out,
        } => hull(&input, &x, &y, group.as_deref(), &out),
        Action::Sample {
            shape,
            n,
            seed,
            index,
            out,
        } => sample(shape, n, ReplayToken { seed, index }, &out),
        Action::Report => report(),
    }
}

fn hull(input: &Path, x: &str, y: &str, group: Option<&str>, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), x, y, group = ?group, out = %out.display(), "hull");
    if input.extension().and_then(|e| e.to_str()) != Some("csv") {
        bail!("expected a .csv input, got {}", input.display());
    }
    let table = groups::read_csv(input, x, y, group)?;
    let hulls = groups::hull_groups(&table.points, table.labels.as_deref());
    tracing::info!(groups = hulls.len(), rows = table.points.len(), "hulls_done");

    let doc = json!({
        "input": input.to_string_lossy(),
        "x": x,
        "y": y,
        "groups": hulls,
    });
    write_json(out, &doc)?;
    write_sidecar(
        out,
        Payload::new(json!({
            "cmd": "hull",
            "input": input.to_string_lossy(),
            "x": x,
            "y": y,
            "group": group,
            "dropped_rows": table.dropped,
        })),
    )?;
    Ok(())
}

fn sample(shape: Shape, n: usize, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(?shape, n, seed = tok.seed, index = tok.index, "sample");
    let cfg = CloudCfg {
        shape: shape.to_cloud(),
        count: n,
        scale: 1.0,
    };
    let points = draw_cloud(cfg, tok);
    let h = hull2::compute_hull(&points).context("hulling sampled cloud")?;
    let doc = json!({
        "points": points,
        "edges": h.simplices(),
        "vertices": h.vertex_indices(),
    });
    write_json(out, &doc)?;
    write_sidecar(
        out,
        Payload::new(json!({
            "cmd": "sample",
            "shape": format!("{shape:?}").to_lowercase(),
            "n": n,
            "seed": tok.seed,
            "index": tok.index,
        })),
    )?;
    Ok(())
}

fn write_json(out: &Path, doc: &serde_json::Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "hull2": hull2::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn hull_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        fs::write(&input, "px,py,k\n0,0,a\n1,0,a\n1,1,a\n0,1,a\n0.5,0.5,a\n").unwrap();
        let out = dir.path().join("out").join("hull.json");
        hull(&input, "px", "py", Some("k"), &out).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["groups"][0]["group"], "a");
        assert_eq!(doc["groups"][0]["vertices"], json!([0, 1, 2, 3]));
        assert!(dir.path().join("out").join("hull.provenance.json").exists());
    }

    #[test]
    fn hull_rejects_non_csv() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.parquet");
        let out = dir.path().join("hull.json");
        assert!(hull(&input, "x", "y", None, &out).is_err());
    }

    #[test]
    fn sample_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let tok = ReplayToken { seed: 5, index: 2 };
        sample(Shape::Circle, 40, tok, &a).unwrap();
        sample(Shape::Circle, 40, tok, &b).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }
}
