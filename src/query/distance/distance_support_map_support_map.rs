use crate::math::{Isometry, Point, Real, Vector};
use crate::query::gjk::{self, GJKResult, SimplexDescentResult, VoronoiSimplex};
use crate::query::{GjkSolverType, QueryError};
use crate::shape::SupportMap;

use na::Unit;
use num::Bounded;

/// The outcome of an iterative distance query, in the local frame of the
/// first shape.
pub struct SupportMapDistance {
    /// The separation, or `-1.0` when the solver could only prove overlap.
    pub distance: Real,
    /// Witness points realizing the separation; `None` when overlapping.
    pub points: Option<(Point<Real>, Point<Real>)>,
    /// Whether the result is less accurate than the requested tolerance.
    pub saturated: bool,
}

/// Distance between two support-mapped shapes.
pub fn distance_support_map_support_map<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
) -> Result<SupportMapDistance, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    distance_support_map_support_map_with_params(
        pos12,
        g1,
        g2,
        GjkSolverType::VoronoiSimplex,
        gjk::eps_tol(),
        None,
    )
}

/// Distance between two support-mapped shapes, with explicit control over
/// the solver backend, the termination tolerance and the warm-start
/// direction.
pub fn distance_support_map_support_map_with_params<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    solver: GjkSolverType,
    tolerance: Real,
    init_dir: Option<Unit<Vector<Real>>>,
) -> Result<SupportMapDistance, QueryError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    // The boolean backend is consulted first when selected; the exact
    // projection shared by both backends then computes the scalar itself.
    if solver == GjkSolverType::SimplexDescent {
        match gjk::intersection_simplex_descent(pos12, g1, g2, init_dir, tolerance) {
            SimplexDescentResult::Intersection(_) => {
                return Ok(SupportMapDistance {
                    distance: -1.0,
                    points: None,
                    saturated: false,
                });
            }
            SimplexDescentResult::NoIntersection(_) => {}
            SimplexDescentResult::NoConvergence => return Err(QueryError::NoConvergence),
        }
    }

    let simplex = &mut VoronoiSimplex::new();
    gjk::seed_simplex(pos12, g1, g2, init_dir, simplex);

    match gjk::closest_points(
        pos12,
        g1,
        g2,
        Real::max_value(),
        true,
        tolerance,
        simplex,
    ) {
        GJKResult::ClosestPoints(p1, p2, _) => {
            let distance = na::distance(&p1, &p2);
            Ok(SupportMapDistance {
                distance,
                points: Some((p1, p2)),
                saturated: distance <= tolerance,
            })
        }
        GJKResult::Intersection => Ok(SupportMapDistance {
            distance: -1.0,
            points: None,
            saturated: false,
        }),
        GJKResult::Proximity(_) => unreachable!(),
        GJKResult::NoIntersection(_) => Ok(SupportMapDistance {
            distance: 0.0,
            points: None,
            saturated: true,
        }),
        GJKResult::NoConvergence => Err(QueryError::NoConvergence),
    }
}
