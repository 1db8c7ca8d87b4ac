use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{Contact, PointQuery};
use crate::shape::Ball;
use na::Unit;

/// Contact between a shape supporting point projection (cuboid, capsule,
/// cylinder, cone, triangle) and a ball.
///
/// The closest point on the first shape to the ball center decides
/// everything: the shapes touch iff its distance to the center does not
/// exceed the ball radius.
#[inline]
pub fn contact_point_projectable_ball<G: ?Sized + PointQuery>(
    pos12: &Isometry<Real>,
    shape1: &G,
    ball2: &Ball,
    prediction: Real,
) -> Option<Contact> {
    let center2_1 = Point::from(pos12.translation.vector);
    let proj = shape1.project_local_point(&center2_1, false);

    let dist;
    let normal1;
    if let Some((dir1, len)) = Unit::try_new_and_get(proj.point - center2_1, DEFAULT_EPSILON) {
        if proj.is_inside {
            dist = -len - ball2.radius;
            normal1 = dir1;
        } else {
            dist = len - ball2.radius;
            normal1 = -dir1;
        }
    } else {
        // The ball center lies exactly on the boundary of the first shape.
        dist = -ball2.radius;
        normal1 = Unit::try_new(proj.point.coords, DEFAULT_EPSILON)
            .unwrap_or_else(Vector::z_axis);
    }

    if dist <= prediction {
        let normal2 = pos12.inverse_transform_unit_vector(&-normal1);
        let point2 = Point::from(*normal2 * ball2.radius);
        let point1 = proj.point;
        return Some(Contact::new(point1, point2, normal1, normal2, dist));
    }

    None
}

/// Contact between a ball and a shape supporting point projection.
#[inline]
pub fn contact_ball_point_projectable<G: ?Sized + PointQuery>(
    pos12: &Isometry<Real>,
    ball1: &Ball,
    shape2: &G,
    prediction: Real,
) -> Option<Contact> {
    contact_point_projectable_ball(&pos12.inverse(), shape2, ball1, prediction).map(|c| c.flipped())
}
