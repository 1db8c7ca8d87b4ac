//! Alternative GJK backend based on the classic case-by-case simplex descent.
//!
//! Where the default backend projects the origin on the simplex through
//! Voronoï regions and keeps exact barycentric coordinates, this one follows
//! the textbook boolean formulation: grow the simplex one support point at a
//! time and, at each step, pick the sub-simplex and the next search direction
//! from explicit line/triangle/tetrahedron cases. Both backends must agree on
//! intersection outcomes within the shared tolerance.

use na::Unit;

use crate::math::{Isometry, Real, Vector};
use crate::query::gjk::{self, CSOPoint, VoronoiSimplex};
use crate::shape::SupportMap;

/// Outcome of the simplex-descent intersection test.
pub enum SimplexDescentResult {
    /// The shapes intersect. The returned simplex encloses the origin and
    /// can seed the EPA penetration algorithm.
    Intersection(VoronoiSimplex),
    /// The shapes do not intersect; the returned direction is a witness
    /// separating direction.
    NoIntersection(Unit<Vector<Real>>),
    /// The iteration cap was reached without a decision.
    NoConvergence,
}

/// Tests whether two support-mapped shapes intersect, using the case-based
/// simplex descent.
pub fn intersection_simplex_descent<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    init_dir: Option<Unit<Vector<Real>>>,
    tolerance: Real,
) -> SimplexDescentResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let eps = tolerance.max(gjk::eps_tol());

    let init = init_dir
        .or_else(|| Unit::try_new(pos12.translation.vector, crate::math::DEFAULT_EPSILON))
        .unwrap_or_else(Vector::x_axis);

    let support = CSOPoint::from_shapes_toward(pos12, g1, g2, &init);
    let mut simplex = Simplex::new(support);
    let mut dir = -support.point.coords;

    for _ in 0..gjk::MAX_ITERATIONS {
        let dir_unit = match Unit::try_new(dir, eps) {
            Some(d) => d,
            // The origin lies on the current simplex: treat as touching.
            None => return SimplexDescentResult::Intersection(simplex.into_voronoi()),
        };

        let support = CSOPoint::from_shapes_toward(pos12, g1, g2, &dir_unit);

        if support.point.coords.dot(&dir_unit) < eps {
            return SimplexDescentResult::NoIntersection(dir_unit);
        }

        simplex.push(support);

        if simplex.next(&mut dir) {
            return SimplexDescentResult::Intersection(simplex.into_voronoi());
        }
    }

    SimplexDescentResult::NoConvergence
}

// The working simplex. Points are stored most-recent first, matching the
// usual formulation of the descent cases.
struct Simplex {
    pts: [CSOPoint; 4],
    len: usize,
}

impl Simplex {
    fn new(first: CSOPoint) -> Self {
        Simplex {
            pts: [first; 4],
            len: 1,
        }
    }

    fn push(&mut self, pt: CSOPoint) {
        debug_assert!(self.len < 4);
        // Shift so that the new point becomes `pts[0]`.
        for i in (0..self.len).rev() {
            self.pts[i + 1] = self.pts[i];
        }
        self.pts[0] = pt;
        self.len += 1;
    }

    fn set(&mut self, pts: &[CSOPoint]) {
        for (i, pt) in pts.iter().enumerate() {
            self.pts[i] = *pt;
        }
        self.len = pts.len();
    }

    // Reduces the simplex toward the origin and updates the search
    // direction. Returns `true` when the simplex encloses the origin.
    fn next(&mut self, dir: &mut Vector<Real>) -> bool {
        match self.len {
            2 => self.case_line(dir),
            3 => self.case_triangle(dir),
            4 => self.case_tetrahedron(dir),
            _ => unreachable!(),
        }
    }

    fn case_line(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.pts[0];
        let b = self.pts[1];
        let ab = b.point - a.point;
        let ao = -a.point.coords;

        if ab.dot(&ao) > 0.0 {
            *dir = ab.cross(&ao).cross(&ab);
        } else {
            self.set(&[a]);
            *dir = ao;
        }

        false
    }

    fn case_triangle(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.pts[0];
        let b = self.pts[1];
        let c = self.pts[2];

        let ab = b.point - a.point;
        let ac = c.point - a.point;
        let ao = -a.point.coords;
        let abc = ab.cross(&ac);

        if abc.cross(&ac).dot(&ao) > 0.0 {
            if ac.dot(&ao) > 0.0 {
                self.set(&[a, c]);
                *dir = ac.cross(&ao).cross(&ac);
            } else {
                self.set(&[a, b]);
                return self.case_line(dir);
            }
        } else if ab.cross(&abc).dot(&ao) > 0.0 {
            self.set(&[a, b]);
            return self.case_line(dir);
        } else if abc.dot(&ao) > 0.0 {
            *dir = abc;
        } else {
            self.set(&[a, c, b]);
            *dir = -abc;
        }

        false
    }

    fn case_tetrahedron(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.pts[0];
        let b = self.pts[1];
        let c = self.pts[2];
        let d = self.pts[3];

        let ab = b.point - a.point;
        let ac = c.point - a.point;
        let ad = d.point - a.point;
        let ao = -a.point.coords;

        let abc = ab.cross(&ac);
        let acd = ac.cross(&ad);
        let adb = ad.cross(&ab);

        if abc.dot(&ao) > 0.0 {
            self.set(&[a, b, c]);
            return self.case_triangle(dir);
        }

        if acd.dot(&ao) > 0.0 {
            self.set(&[a, c, d]);
            return self.case_triangle(dir);
        }

        if adb.dot(&ao) > 0.0 {
            self.set(&[a, d, b]);
            return self.case_triangle(dir);
        }

        true
    }

    fn into_voronoi(self) -> VoronoiSimplex {
        let mut simplex = VoronoiSimplex::new();
        simplex.reset(self.pts[0]);
        for i in 1..self.len {
            // Degenerate duplicates are dropped; EPA re-inflates the simplex
            // as needed.
            let _ = simplex.add_point(self.pts[i]);
        }
        simplex
    }
}
