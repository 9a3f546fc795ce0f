//! Planar geometry core: convex hulls and a segment-intersection sweep.
//!
//! Two pure components over caller-owned 2D value types:
//! - [`hull`]: gift-wrapping convex hull of a point set.
//! - [`sweep`]: left-to-right sweep reporting pairwise segment intersections.
//!
//! Both take read-only slices and return freshly allocated output; no state
//! survives a call, so independent threads may invoke them freely. The
//! [`sample`] module provides the seedable random inputs the demo driver
//! feeds them.

pub mod hull;
pub mod sample;
pub mod sweep;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::convex_hull;
    pub use crate::sample::{
        random_points, random_points_replay, random_segments, random_segments_replay, GridCfg,
        ReplayToken,
    };
    pub use crate::sweep::{find_intersections, find_intersections_cfg};
    pub use crate::types::{orient, segment_intersection, GeomCfg, Point, Segment};
}
