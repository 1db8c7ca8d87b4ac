//! The Gilbert-Johnson-Keerthi distance algorithm.

use na::{ComplexField, Unit};

use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::query::gjk::{CSOPoint, VoronoiSimplex};
use crate::shape::SupportMap;

use num::Bounded;

/// The number of iterations after which GJK gives up and reports a
/// convergence failure.
pub const MAX_ITERATIONS: usize = 128;

/// Results of the GJK algorithm.
///
/// All points and vectors are expressed in the local frame of the first
/// shape.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult {
    /// The shapes are intersecting.
    ///
    /// The origin lies inside the Minkowski difference of the two shapes;
    /// the simplex encloses it and can seed the EPA penetration algorithm.
    Intersection,
    /// The shapes are separated; the closest point on each shape was found,
    /// together with the unit separation direction pointing from the first
    /// shape toward the second.
    ClosestPoints(Point<Real>, Point<Real>, Unit<Vector<Real>>),
    /// The shapes are close but not intersecting; only an approximate
    /// separation direction was computed.
    Proximity(Unit<Vector<Real>>),
    /// The shapes are separated by a distance larger than the requested
    /// maximum.
    NoIntersection(Unit<Vector<Real>>),
    /// The algorithm hit its iteration cap without converging.
    ///
    /// This must be surfaced to the caller; retrying with a coarser
    /// tolerance or the other solver backend may succeed.
    NoConvergence,
}

/// The absolute tolerance used by the GJK algorithm.
pub fn eps_tol() -> Real {
    let _eps = crate::math::DEFAULT_EPSILON;
    _eps * 10.0
}

/// Computes the closest points between two shapes using the GJK algorithm.
///
/// The algorithm operates on the Minkowski difference of the two shapes and
/// iteratively refines a simplex that approaches the point of the difference
/// closest to the origin:
///
/// - if the origin is proven to be inside the difference, the shapes overlap
///   and [`GJKResult::Intersection`] is returned, leaving in `simplex` a
///   simplex enclosing the origin;
/// - otherwise the shapes are separated and the witness points are
///   reconstructed from the barycentric coordinates of the projection of the
///   origin on the final simplex.
///
/// `simplex` must have been seeded with one CSO point before the call; the
/// seeding direction is the warm-start entry point exploited by callers
/// caching directions across queries.
///
/// `tolerance` is the absolute distance threshold used for all comparisons
/// against zero, including termination.
pub fn closest_points<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    max_dist: Real,
    exact_dist: bool,
    tolerance: Real,
    simplex: &mut VoronoiSimplex,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let _eps_tol: Real = tolerance.max(eps_tol());
    let _eps_rel: Real = ComplexField::sqrt(_eps_tol);

    let mut proj = simplex.project_origin_and_reduce();

    let mut old_dir;

    if let Some(proj_dir) = Unit::try_new(proj.coords, 0.0) {
        old_dir = -proj_dir;
    } else {
        return GJKResult::Intersection;
    }

    let mut max_bound = Real::max_value();
    let mut dir;
    let mut niter = 0;

    loop {
        let old_max_bound = max_bound;

        if let Some((new_dir, dist)) = Unit::try_new_and_get(-proj.coords, _eps_tol) {
            dir = new_dir;
            max_bound = dist;
        } else {
            // The origin is on the simplex.
            return GJKResult::Intersection;
        }

        if max_bound >= old_max_bound {
            // Upper bounds inconsistencies: the simplex stopped improving,
            // the previous projection is the best answer.
            if exact_dist {
                let (p1, p2) = result(simplex, true);
                return GJKResult::ClosestPoints(p1, p2, old_dir);
            } else {
                return GJKResult::Proximity(old_dir);
            }
        }

        let cso_point = CSOPoint::from_shapes_toward(pos12, g1, g2, &dir);
        let min_bound = -dir.dot(&cso_point.point.coords);

        debug_assert!(min_bound.is_finite());

        if min_bound > max_dist {
            return GJKResult::NoIntersection(dir);
        } else if !exact_dist && min_bound > 0.0 && max_bound <= max_dist {
            return GJKResult::Proximity(old_dir);
        } else if max_bound - min_bound <= _eps_rel * max_bound {
            // The distance found has a good enough precision.
            if exact_dist {
                let (p1, p2) = result(simplex, false);
                return GJKResult::ClosestPoints(p1, p2, dir);
            } else {
                return GJKResult::Proximity(dir);
            }
        }

        if !simplex.add_point(cso_point) {
            // The new point would degenerate the simplex: nothing better can
            // be found.
            if exact_dist {
                let (p1, p2) = result(simplex, false);
                return GJKResult::ClosestPoints(p1, p2, dir);
            } else {
                return GJKResult::Proximity(dir);
            }
        }

        old_dir = dir;
        proj = simplex.project_origin_and_reduce();

        if simplex.dimension() == DIM {
            if min_bound >= _eps_tol {
                if exact_dist {
                    let (p1, p2) = result(simplex, true);
                    return GJKResult::ClosestPoints(p1, p2, old_dir);
                } else {
                    return GJKResult::Proximity(old_dir);
                }
            } else {
                // The origin is inside of the CSO.
                return GJKResult::Intersection;
            }
        }

        niter += 1;

        if niter == MAX_ITERATIONS {
            log::debug!("GJK did not converge after {} iterations.", MAX_ITERATIONS);
            return GJKResult::NoConvergence;
        }
    }
}

/// Seeds `simplex` from the given direction hint, falling back to the
/// translation between the shape origins, then to the `x` axis.
pub fn seed_simplex<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    init_dir: Option<Unit<Vector<Real>>>,
    simplex: &mut VoronoiSimplex,
) where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let dir = init_dir
        .or_else(|| Unit::try_new(pos12.translation.vector, crate::math::DEFAULT_EPSILON))
        .unwrap_or_else(Vector::x_axis);

    simplex.reset(CSOPoint::from_shapes_toward(pos12, g1, g2, &dir));
}

fn result(simplex: &VoronoiSimplex, prev: bool) -> (Point<Real>, Point<Real>) {
    let mut res = (Point::origin(), Point::origin());
    if prev {
        for i in 0..simplex.prev_dimension() + 1 {
            let coord = simplex.prev_proj_coord(i);
            let point = simplex.prev_point(i);
            res.0 += point.orig1.coords * coord;
            res.1 += point.orig2.coords * coord;
        }

        res
    } else {
        for i in 0..simplex.dimension() + 1 {
            let coord = simplex.proj_coord(i);
            let point = simplex.point(i);
            res.0 += point.orig1.coords * coord;
            res.1 += point.orig2.coords * coord;
        }

        res
    }
}
