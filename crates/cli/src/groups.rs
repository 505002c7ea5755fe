//! Tabular input and per-group hulls.
//!
//! Rows are split by an optional label column and each group is hulled on its
//! own. Edge indices are row positions within the group, which is what a
//! plotting harness indexes its per-group arrays with.

use anyhow::{Context, Result};
use hull2::{compute_hull, HullError};
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Label used when no group column is given.
pub const ALL: &str = "all";

/// Two numeric columns plus optional labels, row-aligned.
#[derive(Debug, Default)]
pub struct Table {
    pub points: Vec<(f64, f64)>,
    pub labels: Option<Vec<String>>,
    /// Rows skipped for a missing coordinate.
    pub dropped: usize,
}

#[derive(Debug, Serialize)]
pub struct GroupHull {
    pub group: String,
    pub points: usize,
    pub edges: Vec<[usize; 2]>,
    pub vertices: Vec<usize>,
}

/// Read `x`/`y` (cast to f64) and an optional `group` column (cast to string).
pub fn read_csv(path: &Path, x: &str, y: &str, group: Option<&str>) -> Result<Table> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let xs = float_column(&df, x)?;
    let ys = float_column(&df, y)?;
    let labels = match group {
        Some(name) => {
            let s = df
                .column(name)
                .with_context(|| format!("missing group column {name:?}"))?
                .cast(&DataType::String)?;
            let ca = s.str()?;
            Some(
                ca.into_iter()
                    .map(|v| v.unwrap_or("null").to_string())
                    .collect::<Vec<_>>(),
            )
        }
        None => None,
    };

    let mut table = Table::default();
    let mut kept_labels = labels.as_ref().map(|_| Vec::new());
    for (row, (px, py)) in xs.into_iter().zip(ys).enumerate() {
        match (px, py) {
            (Some(px), Some(py)) => {
                table.points.push((px, py));
                if let (Some(out), Some(all)) = (kept_labels.as_mut(), labels.as_ref()) {
                    out.push(all[row].clone());
                }
            }
            _ => table.dropped += 1,
        }
    }
    table.labels = kept_labels;
    if table.dropped > 0 {
        tracing::warn!(dropped = table.dropped, "rows_with_missing_coordinates");
    }
    Ok(table)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let s = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)
        .with_context(|| format!("column {name:?} is not numeric"))?;
    Ok(s.f64()?.into_iter().collect())
}

/// Split points by label (sorted by label) and hull each group.
///
/// Groups with fewer than two points have no hull; they are skipped with a warning.
pub fn hull_groups(points: &[(f64, f64)], labels: Option<&[String]>) -> Vec<GroupHull> {
    let mut groups: BTreeMap<&str, Vec<(f64, f64)>> = BTreeMap::new();
    for (i, p) in points.iter().enumerate() {
        let key = labels.map_or(ALL, |l| l[i].as_str());
        groups.entry(key).or_default().push(*p);
    }
    let mut out = Vec::with_capacity(groups.len());
    for (label, pts) in groups {
        match compute_hull(&pts) {
            Ok(h) => out.push(GroupHull {
                group: label.to_string(),
                points: pts.len(),
                edges: h.simplices(),
                vertices: h.vertex_indices(),
            }),
            Err(HullError::InvalidInput { count }) => {
                tracing::warn!(group = label, count, "group_skipped_too_few_points");
            }
        }
    }
    out
}
