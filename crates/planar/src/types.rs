//! Basic 2D value types and tolerances shared by hull and sweep.
//!
//! - `GeomCfg`: centralizes epsilons for the determinant guard and the
//!   active-set ordering.
//! - `Point`, `Segment`: plain value types owned by callers; the algorithms
//!   take read-only views and keep no references after returning.
//! - `segment_intersection`: the parametric segment-segment test both the
//!   sweep and its tests rely on.

use nalgebra::{Matrix2, Vector2};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Parallel-lines guard for the parametric intersection solve.
    pub eps_det: f64,
    /// Ordering slack for active-set y comparisons, scaled by magnitude.
    pub eps_ord: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_ord: 1e-9,
        }
    }
}

/// 2D point. Equality is exact coordinate equality; use [`Point::approx_eq`]
/// where slack is wanted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate-wise comparison with absolute slack.
    #[inline]
    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    #[inline]
    pub fn coords(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Line segment between two points. Endpoints keep construction order
/// (`p` need not be left of `q`); the algorithms normalize by x-extent
/// internally. Zero-length segments are tolerated but their active-set
/// ordering is undefined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p: Point,
    pub q: Point,
}

impl Segment {
    #[inline]
    pub fn new(p: Point, q: Point) -> Self {
        Self { p, q }
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.p.x.min(self.q.x)
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.p.x.max(self.q.x)
    }

    /// y of the segment's carrier line at abscissa `x`; a perfectly vertical
    /// span reports the constant y of its first endpoint.
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        let dx = self.q.x - self.p.x;
        if dx == 0.0 {
            return self.p.y;
        }
        self.p.y + (x - self.p.x) * (self.q.y - self.p.y) / dx
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.q.coords() - self.p.coords()
    }
}

/// Signed parallelogram area of (b − a) and (c − a); positive when `c` lies
/// strictly left of the directed line a→b.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    let ab = b.coords() - a.coords();
    let ac = c.coords() - a.coords();
    ab.x * ac.y - ab.y * ac.x
}

/// Parametric segment-segment intersection.
///
/// Solves `a.p + t·da = b.p + u·db` for (t, u) and reports the meeting point
/// only when both parameters lie in [0, 1] inclusive. Parallel and coincident
/// carriers make the system degenerate and report no intersection by policy;
/// the same guard covers zero-length segments.
pub fn segment_intersection(a: &Segment, b: &Segment, cfg: GeomCfg) -> Option<Point> {
    let da = a.direction();
    let db = b.direction();
    let m = Matrix2::from_columns(&[da, -db]);
    if m.determinant().abs() <= cfg.eps_det {
        return None;
    }
    let rhs = b.p.coords() - a.p.coords();
    let sol = m.try_inverse()? * rhs;
    let (t, u) = (sol.x, sol.y);
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some(Point::from(a.p.coords() + da * t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_diagonals_meet_in_the_middle() {
        let a = Segment::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        let b = Segment::new(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
        let p = segment_intersection(&a, &b, GeomCfg::default()).expect("crossing");
        assert!(p.approx_eq(Point::new(1.5, 1.5), 1e-12));
    }

    #[test]
    fn collinear_disjoint_is_no_intersection() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let b = Segment::new(Point::new(2.0, 0.0), Point::new(3.0, 0.0));
        assert!(segment_intersection(&a, &b, GeomCfg::default()).is_none());
    }

    #[test]
    fn parallel_verticals_do_not_intersect() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 5.0));
        let b = Segment::new(Point::new(1.0, 0.0), Point::new(1.0, 5.0));
        assert!(segment_intersection(&a, &b, GeomCfg::default()).is_none());
    }

    #[test]
    fn lines_meeting_off_segment_do_not_report() {
        // Carriers cross at (3, 3), outside both x-extents.
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Segment::new(Point::new(0.0, 6.0), Point::new(1.0, 5.0));
        assert!(segment_intersection(&a, &b, GeomCfg::default()).is_none());
    }

    #[test]
    fn shared_endpoint_reports_at_parameter_bounds() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Segment::new(Point::new(1.0, 1.0), Point::new(2.0, 0.0));
        let p = segment_intersection(&a, &b, GeomCfg::default()).expect("touching");
        assert!(p.approx_eq(Point::new(1.0, 1.0), 1e-12));
    }

    #[test]
    fn zero_length_segment_never_reports() {
        let a = Segment::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
        let b = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        assert!(segment_intersection(&a, &b, GeomCfg::default()).is_none());
    }

    #[test]
    fn vertical_segment_reports_constant_y() {
        let v = Segment::new(Point::new(2.0, 3.0), Point::new(2.0, 7.0));
        assert_eq!(v.y_at(0.0), 3.0);
        assert_eq!(v.y_at(2.0), 3.0);
    }
}
