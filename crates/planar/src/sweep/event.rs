//! Sweep events derived from segment x-extents. Events live only for the
//! duration of one sweep invocation.

use std::cmp::Ordering;

/// What happens to a segment at an event abscissa.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Start,
    End,
}

impl EventKind {
    /// Comparator rank: +1 for `Start`, −1 for `End`. On x-ties events order
    /// by rank descending, so a segment entering at x is processed before a
    /// segment leaving at the same x. This choice decides which
    /// adjacent-pair checks fire at coincident abscissas and must not be
    /// flipped.
    #[inline]
    pub fn rank(self) -> i8 {
        match self {
            EventKind::Start => 1,
            EventKind::End => -1,
        }
    }
}

/// One endpoint of a segment's x-extent, tagged with the segment's id
/// (its position in the input slice).
#[derive(Clone, Copy, Debug)]
pub struct Event {
    pub x: f64,
    pub kind: EventKind,
    pub seg: usize,
}

impl Event {
    /// Ascending x; on ties, `Start` before `End` (rank descending).
    #[inline]
    pub fn sweep_order(a: &Event, b: &Event) -> Ordering {
        match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => b.kind.rank().cmp(&a.kind.rank()),
            o => o,
        }
    }
}
