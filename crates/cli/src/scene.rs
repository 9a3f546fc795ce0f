//! JSON scene documents for external viewers.
//!
//! The geometry core stays I/O-free; this module turns its outputs into a
//! self-describing JSON document (input geometry, derived geometry, and the
//! sampling parameters needed to regenerate the scene).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

use planar::types::{Point, Segment};

/// Sampling parameters embedded in every scene for replayability.
#[derive(Serialize)]
pub struct Params {
    pub seed: u64,
    pub extent: f64,
    pub count: usize,
    pub version: &'static str,
}

fn point_value(p: Point) -> Value {
    json!([p.x, p.y])
}

fn segment_value(s: &Segment) -> Value {
    json!([[s.p.x, s.p.y], [s.q.x, s.q.y]])
}

/// Scene for the hull demo: sampled points plus the closed hull polyline.
pub fn hull_scene(params: &Params, points: &[Point], hull: &[Point]) -> Result<Value> {
    Ok(json!({
        "params": serde_json::to_value(params)?,
        "points": points.iter().map(|&p| point_value(p)).collect::<Vec<_>>(),
        "hull": hull.iter().map(|&p| point_value(p)).collect::<Vec<_>>(),
    }))
}

/// Scene for the sweep demo: the unmodified segments plus marker points at
/// every reported crossing.
pub fn intersect_scene(
    params: &Params,
    segments: &[Segment],
    intersections: &[Point],
) -> Result<Value> {
    Ok(json!({
        "params": serde_json::to_value(params)?,
        "segments": segments.iter().map(segment_value).collect::<Vec<_>>(),
        "intersections": intersections.iter().map(|&p| point_value(p)).collect::<Vec<_>>(),
    }))
}

/// Write the document to `out`, or pretty-print it to stdout when absent.
pub fn emit(doc: &Value, out: Option<&Path>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(doc)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
