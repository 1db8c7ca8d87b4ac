//! Dispatch of collision and distance queries over the shape pair matrix.

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::contact::{
    contact_ball_ball, contact_ball_point_projectable, contact_cuboid_cuboid,
    contact_halfspace_support_map, contact_manifold_cuboid_cuboid, contact_plane_support_map,
    contact_point_projectable_ball, contact_support_map_halfspace, contact_support_map_plane,
    contact_support_map_support_map_with_params,
};
use crate::query::distance::{
    distance_ball_ball, distance_halfspace_support_map, distance_plane_support_map,
    distance_support_map_halfspace, distance_support_map_plane,
    distance_support_map_support_map_with_params,
};
use crate::query::{
    CollisionRequest, CollisionResult, Contact, ContactPoint, DistanceRequest, DistanceResult,
    QueryError,
};
use crate::shape::{Shape, ShapeData};
use arrayvec::ArrayVec;
use na::Unit;

/// Computes the collision between two shapes positioned by `pos1` and
/// `pos2`.
///
/// This is a pure function of its arguments: shapes are immutable, and the
/// transforms are not retained. Contact points, normals and depths in the
/// result are expressed in world coordinates; the normal points from the
/// first shape toward the second.
///
/// The dispatch picks a specialized closed-form routine when the pair admits
/// one, and the GJK/EPA solver selected by the request otherwise. A pair
/// supported only in the reverse order is computed swapped, then normalized
/// back (negated normal, swapped witnesses), so that operand order never
/// changes the outcome beyond the normal orientation.
pub fn collide(
    shape1: &Shape,
    pos1: &Isometry<Real>,
    shape2: &Shape,
    pos2: &Isometry<Real>,
    request: &CollisionRequest,
) -> Result<CollisionResult, QueryError> {
    request.validate()?;

    let mut result = CollisionResult::new();

    // Balls get their dedicated path: their contact position follows the
    // radius-weighted convention, and two concentric balls report the
    // documented degenerate contact (zero normal, maximal depth).
    if let (ShapeData::Ball(b1), ShapeData::Ball(b2)) = (shape1.data(), shape2.data()) {
        let pos12 = pos1.inv_mul(pos2);

        if let Some(contact) = contact_ball_ball(&pos12, b1, b2, 0.0) {
            let depth = -contact.dist;
            let sum_radius = b1.radius + b2.radius;
            let concentric = pos12.translation.vector.norm() <= DEFAULT_EPSILON;
            let normal = if concentric {
                Vector::zeros()
            } else {
                *(pos1 * contact.normal1)
            };
            let c1 = Point::from(pos1.translation.vector);
            let position = c1 + normal * (b1.radius - depth * b1.radius / sum_radius);

            if request.enable_contact {
                result.push_contact(
                    ContactPoint {
                        position,
                        normal,
                        depth,
                    },
                    request.max_contacts,
                );
            } else {
                result.mark_collision();
            }
        }

        return Ok(result);
    }

    let pos12 = pos1.inv_mul(pos2);
    let init_dir = warm_start_dir(request);

    let mut contacts: ArrayVec<Contact, 8> = ArrayVec::new();
    let guess = collide_local(&pos12, shape1, shape2, request, init_dir, &mut contacts)?;

    result.cached_gjk_guess = guess;

    for contact in &contacts {
        if contact.dist > 0.0 {
            continue;
        }

        if request.enable_contact {
            let p1 = pos1 * contact.point1;
            let p2 = pos2 * contact.point2;
            let normal = *(pos1 * contact.normal1);

            result.push_contact(
                ContactPoint {
                    position: na::center(&p1, &p2),
                    normal,
                    depth: -contact.dist,
                },
                request.max_contacts,
            );
        } else {
            result.mark_collision();
        }
    }

    Ok(result)
}

fn warm_start_dir(request: &CollisionRequest) -> Option<Unit<Vector<Real>>> {
    if request.enable_cached_gjk_guess && request.cached_gjk_guess.iter().all(|e| e.is_finite()) {
        Unit::try_new(request.cached_gjk_guess, DEFAULT_EPSILON)
    } else {
        None
    }
}

// Computes the contacts between two shapes, in the local frame of the first
// one. Returns the updated warm-start direction when the iterative solver
// ran.
//
// The whole pair matrix is enumerated here; arms are ordered from the most
// specialized routine to the generic GJK/EPA fallback.
fn collide_local(
    pos12: &Isometry<Real>,
    shape1: &Shape,
    shape2: &Shape,
    request: &CollisionRequest,
    init_dir: Option<Unit<Vector<Real>>>,
    contacts: &mut ArrayVec<Contact, 8>,
) -> Result<Option<Vector<Real>>, QueryError> {
    use ShapeData::*;

    let prediction = 0.0;
    let mut guess = None;

    let contact = match (shape1.data(), shape2.data()) {
        // Balls are handled by `collide` directly.
        (Ball(_), Ball(_)) => unreachable!(),

        // Sphere versus a shape with a closed-form closest point.
        (Ball(b1), Cuboid(s2)) => contact_ball_point_projectable(pos12, b1, s2, prediction),
        (Ball(b1), Capsule(s2)) => contact_ball_point_projectable(pos12, b1, s2, prediction),
        (Ball(b1), Cylinder(s2)) => contact_ball_point_projectable(pos12, b1, s2, prediction),
        (Ball(b1), Cone(s2)) => contact_ball_point_projectable(pos12, b1, s2, prediction),
        (Ball(b1), Triangle(s2)) => contact_ball_point_projectable(pos12, b1, s2, prediction),
        (Cuboid(s1), Ball(b2)) => contact_point_projectable_ball(pos12, s1, b2, prediction),
        (Capsule(s1), Ball(b2)) => contact_point_projectable_ball(pos12, s1, b2, prediction),
        (Cylinder(s1), Ball(b2)) => contact_point_projectable_ball(pos12, s1, b2, prediction),
        (Cone(s1), Ball(b2)) => contact_point_projectable_ball(pos12, s1, b2, prediction),
        (Triangle(s1), Ball(b2)) => contact_point_projectable_ball(pos12, s1, b2, prediction),

        // Box versus box: separating axes plus face clipping.
        (Cuboid(c1), Cuboid(c2)) => {
            if request.enable_contact && request.max_contacts > 1 {
                contact_manifold_cuboid_cuboid(pos12, c1, c2, prediction, contacts);
                return Ok(None);
            } else {
                contact_cuboid_cuboid(pos12, c1, c2, prediction)
            }
        }

        // Unbounded pairs do not admit a meaningful query.
        (HalfSpace(_) | Plane(_), HalfSpace(_) | Plane(_)) => {
            return Err(QueryError::Unsupported);
        }

        // Half-space or plane versus any support-mapped shape.
        (HalfSpace(hs), _) => {
            let sm2 = shape2.as_support_map().ok_or(QueryError::Unsupported)?;
            contact_halfspace_support_map(pos12, hs, sm2, prediction)
        }
        (_, HalfSpace(hs)) => {
            let sm1 = shape1.as_support_map().ok_or(QueryError::Unsupported)?;
            contact_support_map_halfspace(pos12, sm1, hs, prediction)
        }
        (Plane(plane), _) => {
            let sm2 = shape2.as_support_map().ok_or(QueryError::Unsupported)?;
            contact_plane_support_map(pos12, plane, sm2, prediction)
        }
        (_, Plane(plane)) => {
            let sm1 = shape1.as_support_map().ok_or(QueryError::Unsupported)?;
            contact_support_map_plane(pos12, sm1, plane, prediction)
        }

        // Any remaining convex pair: GJK, then EPA on penetration.
        _ => {
            let sm1 = shape1.as_support_map().ok_or(QueryError::Unsupported)?;
            let sm2 = shape2.as_support_map().ok_or(QueryError::Unsupported)?;

            let (contact, dir) = contact_support_map_support_map_with_params(
                pos12,
                sm1,
                sm2,
                prediction,
                request.gjk_solver,
                request.distance_tolerance,
                init_dir,
            )?;
            guess = Some(*dir);
            contact
        }
    };

    if let Some(contact) = contact {
        contacts.push(contact);
    }

    Ok(guess)
}

/// Computes the separation distance between two shapes positioned by `pos1`
/// and `pos2`.
///
/// Returns a non-negative separation on success. A negative value means the
/// solver could only prove that the shapes overlap; the caller should switch
/// to [`collide`] to obtain the penetration depth. Witness points are
/// reported in world coordinates when the request asks for them.
pub fn distance(
    shape1: &Shape,
    pos1: &Isometry<Real>,
    shape2: &Shape,
    pos2: &Isometry<Real>,
    request: &DistanceRequest,
) -> Result<DistanceResult, QueryError> {
    use ShapeData::*;

    request.validate()?;

    let pos12 = pos1.inv_mul(pos2);

    // Closed-form routines report witness points in the local frame of the
    // first shape; the iterative fallback does too.
    let (dist, points, saturated) = match (shape1.data(), shape2.data()) {
        (Ball(b1), Ball(b2)) => {
            let (dist, p1, p2) = distance_ball_ball(&pos12, b1, b2);
            (dist, Some((p1, p2)), false)
        }

        (HalfSpace(_) | Plane(_), HalfSpace(_) | Plane(_)) => {
            return Err(QueryError::Unsupported);
        }

        (HalfSpace(hs), _) => {
            let sm2 = shape2.as_support_map().ok_or(QueryError::Unsupported)?;
            let (dist, p1, p2) = distance_halfspace_support_map(&pos12, hs, sm2);
            (dist, Some((p1, p2)), false)
        }
        (_, HalfSpace(hs)) => {
            let sm1 = shape1.as_support_map().ok_or(QueryError::Unsupported)?;
            let (dist, p1, p2) = distance_support_map_halfspace(&pos12, sm1, hs);
            (dist, Some((p1, p2)), false)
        }
        (Plane(plane), _) => {
            let sm2 = shape2.as_support_map().ok_or(QueryError::Unsupported)?;
            let (dist, p1, p2) = distance_plane_support_map(&pos12, plane, sm2);
            (dist, Some((p1, p2)), false)
        }
        (_, Plane(plane)) => {
            let sm1 = shape1.as_support_map().ok_or(QueryError::Unsupported)?;
            let (dist, p1, p2) = distance_support_map_plane(&pos12, sm1, plane);
            (dist, Some((p1, p2)), false)
        }

        _ => {
            let sm1 = shape1.as_support_map().ok_or(QueryError::Unsupported)?;
            let sm2 = shape2.as_support_map().ok_or(QueryError::Unsupported)?;

            let res = distance_support_map_support_map_with_params(
                &pos12,
                sm1,
                sm2,
                request.gjk_solver,
                request.distance_tolerance,
                None,
            )?;
            (res.distance, res.points, res.saturated)
        }
    };

    let nearest_points = if request.enable_nearest_points && dist >= 0.0 {
        points.map(|(p1, p2)| (pos1 * p1, pos1 * p2))
    } else {
        None
    };

    Ok(DistanceResult {
        distance: dist,
        nearest_points,
        tolerance_saturated: saturated,
    })
}

#[cfg(test)]
mod test {
    use super::{collide, distance};
    use crate::math::{Isometry, Vector};
    use crate::query::{CollisionRequest, DistanceRequest, QueryError};
    use crate::shape::Shape;

    #[test]
    fn unsupported_unbounded_pairs() {
        let plane = Shape::plane(Vector::x(), 0.0).unwrap();
        let halfspace = Shape::halfspace(Vector::x(), 0.0).unwrap();
        let pos = Isometry::identity();

        let res = collide(&plane, &pos, &halfspace, &pos, &CollisionRequest::default());
        assert_eq!(res, Err(QueryError::Unsupported));

        let res = distance(&plane, &pos, &halfspace, &pos, &DistanceRequest::default());
        assert!(res.is_err());
    }
}
