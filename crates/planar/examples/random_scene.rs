//! Print a random demo scene for quick visual sanity on counts.
//!
//! Usage:
//!   cargo run -p planar --example random_scene -- hull
//!   cargo run -p planar --example random_scene -- intersect

use planar::hull::convex_hull;
use planar::sample::{random_points_replay, random_segments_replay, GridCfg, ReplayToken};
use planar::sweep::find_intersections;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "hull".to_string());
    match mode.as_str() {
        "hull" => show_hull(),
        "intersect" => show_intersect(),
        _ => {
            eprintln!("usage: random_scene [hull|intersect]");
        }
    }
}

fn show_hull() {
    let cfg = GridCfg { extent: 10.0 };
    for index in 0..5 {
        let pts = random_points_replay(cfg, 30, ReplayToken { seed: 2025, index });
        let hull = convex_hull(&pts);
        println!(
            "hull sample {index}: n={}, hull vertices={} (closed)",
            pts.len(),
            hull.len().saturating_sub(1)
        );
        for p in &hull {
            println!("  ({:.3}, {:.3})", p.x, p.y);
        }
    }
}

fn show_intersect() {
    let cfg = GridCfg { extent: 10.0 };
    for index in 0..5 {
        let segs = random_segments_replay(cfg, 16, ReplayToken { seed: 777, index });
        let found = find_intersections(&segs);
        println!(
            "intersect sample {index}: m={}, reported crossings={}",
            segs.len(),
            found.len()
        );
        for p in &found {
            println!("  ({:.3}, {:.3})", p.x, p.y);
        }
    }
}
