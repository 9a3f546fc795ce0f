//! Gift-wrapping (Jarvis march) convex hull.
//!
//! O(n·h) walk, fine at demo scale (tens of points). The turn test is strict
//! (`orient > 0`), so exactly-collinear boundary points may be skipped; the
//! resulting polygon still encloses every input point.

use std::cmp::Ordering;

use crate::types::{orient, Point};

/// Convex hull of `points`, explicitly closed: for more than three input
/// points the first vertex is repeated at the end.
///
/// Inputs of three or fewer points come back verbatim with no closure point;
/// callers must treat those as degenerate. Duplicates are allowed and the
/// input is never mutated. Total function: every finite input terminates,
/// including all-collinear and all-identical sets.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() <= 3 {
        return points.to_vec();
    }
    let mut pts = points.to_vec();
    // Sorting is only for a reliable extreme starting point (leftmost).
    pts.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    let start = pts[0];
    let mut hull = vec![start];
    let mut current = start;
    // Each hull vertex is visited once; the bound guards numerically odd
    // inputs against cycling.
    for _ in 0..=pts.len() {
        let mut next = current;
        for &p in &pts {
            if p == current {
                continue;
            }
            if next == current || orient(current, next, p) > 0.0 {
                next = p;
            }
        }
        if next == current || next == start {
            break;
        }
        hull.push(next);
        current = next;
    }
    hull.push(start);
    hull
}
