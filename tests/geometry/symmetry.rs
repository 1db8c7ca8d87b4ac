use collide3d::math::{Isometry, Point, Real, Vector};
use collide3d::na::{Translation3, UnitQuaternion};
use collide3d::query::{self, CollisionRequest};
use collide3d::shape::Shape;

fn shape_zoo() -> Vec<Shape> {
    let convex = Shape::convex_polyhedron(
        vec![
            Point::new(-0.8, -0.6, -0.5),
            Point::new(0.9, -0.7, -0.4),
            Point::new(0.0, 0.8, -0.6),
            Point::new(0.1, 0.0, 0.9),
        ],
        &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
    )
    .unwrap();

    vec![
        Shape::ball(1.2).unwrap(),
        Shape::cuboid(Vector::new(1.0, 0.5, 0.8)).unwrap(),
        Shape::capsule(1.0, 0.5).unwrap(),
        Shape::cylinder(0.8, 0.6).unwrap(),
        Shape::cone(0.9, 0.7).unwrap(),
        Shape::ellipsoid(Vector::new(1.0, 0.7, 0.5)).unwrap(),
        convex,
        Shape::triangle(
            Point::new(-1.0, -0.5, 0.0),
            Point::new(1.0, -0.4, 0.1),
            Point::new(0.0, 0.9, -0.2),
        )
        .unwrap(),
    ]
}

fn poses() -> (Isometry<Real>, Isometry<Real>) {
    let pos1 = Isometry::from_parts(
        Translation3::new(0.0, 0.0, 0.0),
        UnitQuaternion::from_axis_angle(&Vector::y_axis(), 0.3),
    );
    // Shallow overlap for most of the zoo pairs, in a direction that avoids
    // symmetric ties.
    let pos2 = Isometry::from_parts(
        Translation3::new(0.9, 0.4, 0.3),
        UnitQuaternion::from_axis_angle(&Vector::x_axis(), -0.4),
    );
    (pos1, pos2)
}

#[test]
fn operand_swap_preserves_outcome_and_negates_normals() {
    let shapes = shape_zoo();
    let (pos1, pos2) = poses();
    let request = CollisionRequest::default();

    for (i, s1) in shapes.iter().enumerate() {
        for (j, s2) in shapes.iter().enumerate() {
            let r12 = query::collide(s1, &pos1, s2, &pos2, &request).unwrap();
            let r21 = query::collide(s2, &pos2, s1, &pos1, &request).unwrap();

            assert_eq!(
                r12.is_collision(),
                r21.is_collision(),
                "asymmetric boolean for pair ({}, {})",
                i,
                j
            );

            if r12.is_collision() {
                let c12 = r12.contacts()[0];
                let c21 = r21.contacts()[0];

                // Two concentric balls keep their zero normal on both sides.
                if c12.normal != Vector::zeros() {
                    assert_relative_eq!(c12.normal, -c21.normal, epsilon = 1.0e-4);
                }
                assert_relative_eq!(c12.depth, c21.depth, epsilon = 1.0e-4);
            }
        }
    }
}

#[test]
fn rigid_motion_of_both_shapes_transforms_the_contact() {
    let ball = Shape::ball(1.0).unwrap();
    let cuboid = Shape::cuboid(Vector::new(1.0, 1.0, 1.0)).unwrap();
    let pos1 = Isometry::translation(0.0, 0.0, 1.8);
    let pos2 = Isometry::identity();
    let request = CollisionRequest::default();

    let base = query::collide(&ball, &pos1, &cuboid, &pos2, &request).unwrap();
    assert!(base.is_collision());
    let base_contact = base.contacts()[0];

    let motion = Isometry::from_parts(
        Translation3::new(5.0, -3.0, 2.0),
        UnitQuaternion::from_axis_angle(
            &collide3d::na::Unit::new_normalize(Vector::new(1.0, 2.0, 3.0)),
            0.7,
        ),
    );

    let moved = query::collide(
        &ball,
        &(motion * pos1),
        &cuboid,
        &(motion * pos2),
        &request,
    )
    .unwrap();
    assert!(moved.is_collision());
    let moved_contact = moved.contacts()[0];

    assert_relative_eq!(moved_contact.depth, base_contact.depth, epsilon = 1.0e-9);
    assert_relative_eq!(
        moved_contact.normal,
        motion * base_contact.normal,
        epsilon = 1.0e-9
    );
    assert_relative_eq!(
        moved_contact.position,
        motion * base_contact.position,
        epsilon = 1.0e-9
    );
}

#[test]
fn separated_pairs_stay_separated_after_swap() {
    let shapes = shape_zoo();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(10.0, 0.0, 0.0);
    let request = CollisionRequest::default();

    for s1 in &shapes {
        for s2 in &shapes {
            let r12 = query::collide(s1, &pos1, s2, &pos2, &request).unwrap();
            let r21 = query::collide(s2, &pos2, s1, &pos1, &request).unwrap();
            assert!(!r12.is_collision());
            assert!(!r21.is_collision());
        }
    }
}
