use crate::math::{Isometry, Real, Vector};
use crate::query::epa::Epa;
use crate::query::gjk::{self, GJKResult, SimplexDescentResult, VoronoiSimplex};
use crate::query::{Contact, GjkSolverType, QueryError};
use crate::shape::SupportMap;

use na::Unit;

/// Contact between support-mapped shapes (cuboid, capsule, convex
/// polyhedron, etc.) computed by GJK, falling back to EPA on penetration.
///
/// Returns `Ok(None)` if the shapes are separated by more than `prediction`,
/// and an error if the selected solver hit its iteration cap.
pub fn contact_support_map_support_map<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    prediction: Real,
) -> Result<Option<Contact>, QueryError>
where
    G1: SupportMap,
    G2: SupportMap,
{
    contact_support_map_support_map_with_params(
        pos12,
        g1,
        g2,
        prediction,
        GjkSolverType::VoronoiSimplex,
        gjk::eps_tol(),
        None,
    )
    .map(|(contact, _)| contact)
}

/// Contact between support-mapped shapes, with explicit control over the
/// solver backend, the termination tolerance, and the initial search
/// direction (the GJK warm-start).
///
/// On success, also returns the direction that should be cached by callers
/// exploiting temporal coherence.
pub fn contact_support_map_support_map_with_params<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    prediction: Real,
    solver: GjkSolverType,
    tolerance: Real,
    init_dir: Option<Unit<Vector<Real>>>,
) -> Result<(Option<Contact>, Unit<Vector<Real>>), QueryError>
where
    G1: SupportMap,
    G2: SupportMap,
{
    match solver {
        GjkSolverType::VoronoiSimplex => {
            let simplex = &mut VoronoiSimplex::new();
            gjk::seed_simplex(pos12, g1, g2, init_dir, simplex);

            match gjk::closest_points(pos12, g1, g2, prediction, true, tolerance, simplex) {
                GJKResult::ClosestPoints(point1, point2_1, normal1) => {
                    let dist = (point2_1 - point1).dot(&normal1);
                    let point2 = pos12.inverse_transform_point(&point2_1);
                    let normal2 = pos12.inverse_transform_unit_vector(&-normal1);
                    let contact = Contact::new(point1, point2, normal1, normal2, dist);
                    Ok((Some(contact), normal1))
                }
                GJKResult::NoIntersection(dir) => Ok((None, dir)),
                GJKResult::Intersection => epa_contact(pos12, g1, g2, simplex),
                GJKResult::Proximity(_) => unreachable!(),
                GJKResult::NoConvergence => Err(QueryError::NoConvergence),
            }
        }
        GjkSolverType::SimplexDescent => {
            match gjk::intersection_simplex_descent(pos12, g1, g2, init_dir, tolerance) {
                SimplexDescentResult::Intersection(simplex) => epa_contact(pos12, g1, g2, &simplex),
                SimplexDescentResult::NoIntersection(dir) => {
                    if prediction > 0.0 {
                        // The boolean backend proved separation but the caller
                        // still wants contacts within the prediction margin:
                        // finish with the exact projection.
                        let simplex = &mut VoronoiSimplex::new();
                        gjk::seed_simplex(pos12, g1, g2, Some(dir), simplex);
                        match gjk::closest_points(
                            pos12, g1, g2, prediction, true, tolerance, simplex,
                        ) {
                            GJKResult::ClosestPoints(point1, point2_1, normal1) => {
                                let dist = (point2_1 - point1).dot(&normal1);
                                let point2 = pos12.inverse_transform_point(&point2_1);
                                let normal2 = pos12.inverse_transform_unit_vector(&-normal1);
                                let contact = Contact::new(point1, point2, normal1, normal2, dist);
                                Ok((Some(contact), normal1))
                            }
                            GJKResult::NoIntersection(dir) => Ok((None, dir)),
                            GJKResult::Intersection => epa_contact(pos12, g1, g2, simplex),
                            GJKResult::Proximity(_) => unreachable!(),
                            GJKResult::NoConvergence => Err(QueryError::NoConvergence),
                        }
                    } else {
                        Ok((None, dir))
                    }
                }
                SimplexDescentResult::NoConvergence => Err(QueryError::NoConvergence),
            }
        }
    }
}

fn epa_contact<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &VoronoiSimplex,
) -> Result<(Option<Contact>, Unit<Vector<Real>>), QueryError>
where
    G1: SupportMap,
    G2: SupportMap,
{
    let mut epa = Epa::new();
    if let Some((p1, p2_1, n1)) = epa.closest_points(pos12, g1, g2, simplex) {
        let dist = (p2_1 - p1).dot(&n1);
        let point2 = pos12.inverse_transform_point(&p2_1);
        let normal2 = pos12.inverse_transform_unit_vector(&-n1);
        let contact = Contact::new(p1, point2, n1, normal2, dist);
        Ok((Some(contact), n1))
    } else {
        Err(QueryError::NoConvergence)
    }
}
