//! Demo driver: sample random inputs, run the geometry core, emit a JSON
//! scene for an external viewer.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use planar::hull::convex_hull;
use planar::sample::{random_points_replay, random_segments_replay, GridCfg, ReplayToken};
use planar::sweep::find_intersections;

mod scene;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Convex hull and segment intersection demos")]
struct Cmd {
    /// Seed for the input samplers; same seed, same scene
    #[arg(long, default_value_t = 2025)]
    seed: u64,

    /// Side length of the square sampling grid
    #[arg(long, default_value_t = 10.0)]
    extent: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample points and compute their convex hull
    Hull {
        /// Number of points to sample
        #[arg(long, default_value_t = 30)]
        n: usize,
        /// Write the JSON scene here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sample crossing-biased segments and report their intersections
    Intersect {
        /// Number of segments to sample
        #[arg(long, default_value_t = 16)]
        m: usize,
        /// Write the JSON scene here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = GridCfg { extent: cmd.extent };
    let tok = ReplayToken {
        seed: cmd.seed,
        index: 0,
    };
    match cmd.action {
        Action::Hull { n, out } => hull(cfg, tok, n, out),
        Action::Intersect { m, out } => intersect(cfg, tok, m, out),
    }
}

fn hull(cfg: GridCfg, tok: ReplayToken, n: usize, out: Option<PathBuf>) -> Result<()> {
    let points = random_points_replay(cfg, n, tok);
    let hull = convex_hull(&points);
    tracing::info!(n, vertices = hull.len(), "hull");
    let params = scene::Params {
        seed: tok.seed,
        extent: cfg.extent,
        count: n,
        version: planar::VERSION,
    };
    let doc = scene::hull_scene(&params, &points, &hull)?;
    scene::emit(&doc, out.as_deref())
}

fn intersect(cfg: GridCfg, tok: ReplayToken, m: usize, out: Option<PathBuf>) -> Result<()> {
    let segments = random_segments_replay(cfg, m, tok);
    let found = find_intersections(&segments);
    tracing::info!(m, crossings = found.len(), "intersect");
    let params = scene::Params {
        seed: tok.seed,
        extent: cfg.extent,
        count: m,
        version: planar::VERSION,
    };
    let doc = scene::intersect_scene(&params, &segments, &found)?;
    scene::emit(&doc, out.as_deref())
}
