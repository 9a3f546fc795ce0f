//! Left-to-right intersection sweep over line segments.
//!
//! Restricted Bentley–Ottmann: the only events are segment endpoints, and
//! neighbor checks run when a segment enters or leaves the active set. Two
//! consequences are deliberate (see DESIGN.md):
//! - adjacency created purely by an unrelated removal between two segments,
//!   with neither having an endpoint at that x, is not re-checked;
//! - a pair re-examined across insert/remove boundaries can report its
//!   crossing more than once; the output is not deduplicated.

mod active;
mod event;

pub use active::ActiveSet;
pub use event::{Event, EventKind};

use crate::types::{segment_intersection, GeomCfg, Point, Segment};

/// All pairwise intersection points among `segments`, default tolerances.
pub fn find_intersections(segments: &[Segment]) -> Vec<Point> {
    find_intersections_cfg(segments, GeomCfg::default())
}

/// All pairwise intersection points among `segments`.
///
/// The output is unordered and not deduplicated. Parallel and coincident
/// segments never report; zero-length segments have undefined ordering in
/// the active set but cannot crash or hang the sweep. Total function over
/// finite inputs, and the input slice is never mutated.
pub fn find_intersections_cfg(segments: &[Segment], cfg: GeomCfg) -> Vec<Point> {
    let mut events = Vec::with_capacity(segments.len() * 2);
    for (id, seg) in segments.iter().enumerate() {
        events.push(Event {
            x: seg.min_x(),
            kind: EventKind::Start,
            seg: id,
        });
        events.push(Event {
            x: seg.max_x(),
            kind: EventKind::End,
            seg: id,
        });
    }
    // Stable sort: ties beyond (x, kind) keep insertion order.
    events.sort_by(Event::sweep_order);

    let mut active = ActiveSet::new(segments, cfg);
    let mut found = Vec::new();
    for ev in events {
        match ev.kind {
            EventKind::Start => {
                let pos = active.lower_bound(ev.seg);
                if let Some(succ) = active.get(pos) {
                    if let Some(p) = segment_intersection(&segments[ev.seg], &segments[succ], cfg)
                    {
                        found.push(p);
                    }
                }
                if pos > 0 {
                    if let Some(pred) = active.get(pos - 1) {
                        if let Some(p) =
                            segment_intersection(&segments[ev.seg], &segments[pred], cfg)
                        {
                            found.push(p);
                        }
                    }
                }
                active.insert_at(pos, ev.seg);
            }
            EventKind::End => {
                if let Some(pos) = active.position(ev.seg) {
                    if pos > 0 {
                        if let (Some(pred), Some(succ)) = (active.get(pos - 1), active.get(pos + 1))
                        {
                            // The leaving segment may have been the only thing
                            // keeping these two apart.
                            if let Some(p) =
                                segment_intersection(&segments[pred], &segments[succ], cfg)
                            {
                                found.push(p);
                            }
                        }
                    }
                    active.remove_at(pos);
                }
            }
        }
    }
    found
}
