//! Active-segment ordering for the sweep.

use crate::types::{GeomCfg, Segment};

/// Segments currently crossed by the sweep line, ordered by y at a lazily
/// recomputed comparison abscissa. Holds only segment ids; the segment slice
/// stays caller-owned. Rebuilt for every sweep invocation.
///
/// A sorted `Vec` with binary-search insertion is enough at demo scale and
/// keeps predecessor/successor queries trivial.
pub struct ActiveSet<'a> {
    segments: &'a [Segment],
    cfg: GeomCfg,
    order: Vec<usize>,
}

impl<'a> ActiveSet<'a> {
    pub fn new(segments: &'a [Segment], cfg: GeomCfg) -> Self {
        Self {
            segments,
            cfg,
            order: Vec::new(),
        }
    }

    /// Strict y-order of two segments, evaluated at the abscissa where both
    /// are already live: the larger of the two minimum x-extents. Near-equal
    /// y within a magnitude-scaled eps compares as not-less-than, which
    /// keeps float jitter from thrashing the order.
    fn before(&self, a: usize, b: usize) -> bool {
        let sa = &self.segments[a];
        let sb = &self.segments[b];
        let x = sa.min_x().max(sb.min_x());
        let ya = sa.y_at(x);
        let yb = sb.y_at(x);
        let eps = self.cfg.eps_ord * (1.0 + ya.abs().max(yb.abs()));
        ya < yb - eps
    }

    /// First position whose segment does not order below `id`; the would-be
    /// successor of `id` sits here, its would-be predecessor just before.
    pub fn lower_bound(&self, id: usize) -> usize {
        let mut lo = 0usize;
        let mut hi = self.order.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.before(self.order[mid], id) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    pub fn insert_at(&mut self, pos: usize, id: usize) {
        self.order.insert(pos, id);
    }

    /// Current position of `id`, by scan. The y-order used at insertion time
    /// goes stale as the sweep advances, so a comparator-driven search
    /// cannot be trusted for lookup.
    pub fn position(&self, id: usize) -> Option<usize> {
        self.order.iter().position(|&s| s == id)
    }

    pub fn get(&self, pos: usize) -> Option<usize> {
        self.order.get(pos).copied()
    }

    pub fn remove_at(&mut self, pos: usize) -> usize {
        self.order.remove(pos)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Segment};

    fn horizontal(y: f64) -> Segment {
        Segment::new(Point::new(0.0, y), Point::new(10.0, y))
    }

    #[test]
    fn insertion_orders_by_y() {
        let segs = vec![horizontal(3.0), horizontal(1.0), horizontal(2.0)];
        let mut active = ActiveSet::new(&segs, GeomCfg::default());
        for id in 0..segs.len() {
            let pos = active.lower_bound(id);
            active.insert_at(pos, id);
        }
        assert_eq!(active.get(0), Some(1));
        assert_eq!(active.get(1), Some(2));
        assert_eq!(active.get(2), Some(0));
    }

    #[test]
    fn comparison_abscissa_is_where_both_are_live() {
        // At x = 2 (the later start), segment 1 is already above segment 0
        // even though it starts below segment 0's left endpoint.
        let segs = vec![
            Segment::new(Point::new(0.0, 1.0), Point::new(10.0, 1.0)),
            Segment::new(Point::new(2.0, 2.0), Point::new(10.0, 8.0)),
        ];
        let mut active = ActiveSet::new(&segs, GeomCfg::default());
        active.insert_at(0, 0);
        assert_eq!(active.lower_bound(1), 1);
    }

    #[test]
    fn near_equal_y_is_not_ordering() {
        let segs = vec![horizontal(1.0), horizontal(1.0 + 1e-12), horizontal(2.0)];
        let mut active = ActiveSet::new(&segs, GeomCfg::default());
        active.insert_at(0, 0);
        // Within eps of segment 0: neither orders below the other.
        assert_eq!(active.lower_bound(1), 0);
        // Clearly above.
        assert_eq!(active.lower_bound(2), 1);
    }

    #[test]
    fn position_and_removal() {
        let segs = vec![horizontal(1.0), horizontal(2.0)];
        let mut active = ActiveSet::new(&segs, GeomCfg::default());
        active.insert_at(0, 0);
        active.insert_at(1, 1);
        assert_eq!(active.position(1), Some(1));
        assert_eq!(active.remove_at(1), 1);
        assert_eq!(active.position(1), None);
        assert_eq!(active.len(), 1);
        assert!(!active.is_empty());
    }
}
