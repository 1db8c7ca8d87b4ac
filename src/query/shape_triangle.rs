//! Intersection between a shape and a single oriented triangle.
//!
//! This is the entry point used by bounding-volume-hierarchy traversals: the
//! triangle comes from a mesh leaf and is not wrapped into a full
//! [`Shape`](crate::shape::Shape).

use crate::math::{Isometry, Point, Real};
use crate::query::contact::{
    contact_ball_point_projectable, contact_halfspace_support_map, contact_plane_support_map,
    contact_support_map_support_map_with_params,
};
use crate::query::{ContactPoint, GjkSolverType, QueryError};
use crate::query::gjk;
use crate::shape::{Shape, ShapeData, Triangle};

/// Tests whether a shape and a triangle intersect, optionally computing the
/// contact.
///
/// The triangle is given by its three vertices `v1`, `v2`, `v3`, expressed
/// in the frame `tf_tri` when provided, in world coordinates otherwise.
///
/// Returns `Ok(Some(contact))` when the shapes touch or penetrate, with the
/// contact position, depth and normal in world coordinates (the normal
/// points from the shape toward the triangle), and `Ok(None)` when they do
/// not.
pub fn intersect_shape_triangle(
    shape: &Shape,
    pos: &Isometry<Real>,
    v1: Point<Real>,
    v2: Point<Real>,
    v3: Point<Real>,
    tf_tri: Option<&Isometry<Real>>,
) -> Result<Option<ContactPoint>, QueryError> {
    let pos_tri = tf_tri.copied().unwrap_or_else(Isometry::identity);
    let triangle = Triangle::new(v1, v2, v3);
    let pos12 = pos.inv_mul(&pos_tri);

    let contact = match shape.data() {
        ShapeData::Ball(ball) => contact_ball_point_projectable(&pos12, ball, &triangle, 0.0),
        ShapeData::HalfSpace(hs) => contact_halfspace_support_map(&pos12, hs, &triangle, 0.0),
        ShapeData::Plane(plane) => contact_plane_support_map(&pos12, plane, &triangle, 0.0),
        _ => {
            // Every other primitive goes through the iterative solver, with
            // the triangle acting as a degenerate convex polytope.
            let sm = shape.as_support_map().ok_or(QueryError::Unsupported)?;
            contact_support_map_support_map_with_params(
                &pos12,
                sm,
                &triangle,
                0.0,
                GjkSolverType::VoronoiSimplex,
                gjk::eps_tol(),
                None,
            )?
            .0
        }
    };

    Ok(contact.and_then(|contact| {
        if contact.dist > 0.0 {
            return None;
        }

        let p1 = pos * contact.point1;
        let p2 = pos_tri * contact.point2;
        let normal = *(pos * contact.normal1);

        Some(ContactPoint {
            position: na::center(&p1, &p2),
            normal,
            depth: -contact.dist,
        })
    }))
}

#[cfg(test)]
mod test {
    use super::intersect_shape_triangle;
    use crate::math::{Isometry, Point};
    use crate::shape::Shape;

    #[test]
    fn ball_touching_triangle_face() {
        let ball = Shape::ball(1.0).unwrap();
        let pos = Isometry::translation(0.0, 0.0, 0.5);

        let contact = intersect_shape_triangle(
            &ball,
            &pos,
            Point::new(-5.0, -5.0, 0.0),
            Point::new(5.0, -5.0, 0.0),
            Point::new(0.0, 5.0, 0.0),
            None,
        )
        .unwrap()
        .expect("expected an intersection");

        assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-6);
        assert_relative_eq!(contact.normal.z, -1.0, epsilon = 1.0e-6);
    }

    #[test]
    fn separated_ball_reports_no_intersection() {
        let ball = Shape::ball(1.0).unwrap();
        let pos = Isometry::translation(0.0, 0.0, 2.0);

        let contact = intersect_shape_triangle(
            &ball,
            &pos,
            Point::new(-5.0, -5.0, 0.0),
            Point::new(5.0, -5.0, 0.0),
            Point::new(0.0, 5.0, 0.0),
            None,
        )
        .unwrap();

        assert!(contact.is_none());
    }
}
