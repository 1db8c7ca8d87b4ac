use collide3d::math::{Isometry, Vector};
use collide3d::query::{self, CollisionRequest, DistanceRequest, GjkSolverType};
use collide3d::shape::Shape;

#[test]
fn overlapping_cylinders_push_along_x() {
    // Radius 5, full height 10.
    let c1 = Shape::cylinder(5.0, 5.0).unwrap();
    let c2 = Shape::cylinder(5.0, 5.0).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(9.9, 0.0, 0.0);

    let result = query::collide(&c1, &pos1, &c2, &pos2, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());

    let contact = result.contacts()[0];
    assert_relative_eq!(contact.normal, Vector::x(), epsilon = 1.0e-3);
    assert_relative_eq!(contact.depth, 0.1, epsilon = 1.0e-3);
}

#[test]
fn capsules_separated_along_their_axis() {
    // Radius 5, inner segment of full length 10: each capsule spans
    // [-10, 10] along z.
    let c1 = Shape::capsule(5.0, 5.0).unwrap();
    let c2 = Shape::capsule(5.0, 5.0).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.0, 0.0, 25.1);

    let result = query::collide(&c1, &pos1, &c2, &pos2, &CollisionRequest::default()).unwrap();
    assert!(!result.is_collision());

    let dist = query::distance(&c1, &pos1, &c2, &pos2, &DistanceRequest::default()).unwrap();
    assert_relative_eq!(dist.distance, 5.1, epsilon = 1.0e-3);
}

#[test]
fn capsules_touching_along_their_axis_collide() {
    let c1 = Shape::capsule(5.0, 5.0).unwrap();
    let c2 = Shape::capsule(5.0, 5.0).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.0, 0.0, 19.0);

    let result = query::collide(&c1, &pos1, &c2, &pos2, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());

    let contact = result.contacts()[0];
    assert_relative_eq!(contact.normal, Vector::z(), epsilon = 1.0e-3);
    assert_relative_eq!(contact.depth, 1.0, epsilon = 1.0e-3);
}

#[test]
fn cone_apex_against_halfspace() {
    // Radius 5, full height 10, apex at +z; drop it upside-down on the
    // floor z <= 0 by flipping it around x.
    let cone = Shape::cone(5.0, 5.0).unwrap();
    let floor = Shape::halfspace(Vector::z(), 0.0).unwrap();

    let rot = collide3d::na::UnitQuaternion::from_axis_angle(
        &Vector::x_axis(),
        std::f64::consts::PI,
    );
    let pos_cone = Isometry::from_parts(collide3d::na::Translation3::new(0.0, 0.0, 4.0), rot);
    let pos_floor = Isometry::identity();

    let result = query::collide(
        &cone,
        &pos_cone,
        &floor,
        &pos_floor,
        &CollisionRequest::default(),
    )
    .unwrap();
    assert!(result.is_collision());

    // The apex, now pointing down, is at z = -1.
    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(contact.normal, -Vector::z(), epsilon = 1.0e-6);
}

#[test]
fn cylinder_cylinder_backends_agree() {
    let c1 = Shape::cylinder(5.0, 5.0).unwrap();
    let c2 = Shape::cylinder(5.0, 5.0).unwrap();
    let pos1 = Isometry::identity();

    let mut request = CollisionRequest::default();

    for x in [8.0, 9.9, 10.5, 12.0, 20.0] {
        let pos2 = Isometry::translation(x, 0.0, 0.0);

        request.gjk_solver = GjkSolverType::VoronoiSimplex;
        let r1 = query::collide(&c1, &pos1, &c2, &pos2, &request).unwrap();

        request.gjk_solver = GjkSolverType::SimplexDescent;
        let r2 = query::collide(&c1, &pos1, &c2, &pos2, &request).unwrap();

        assert_eq!(r1.is_collision(), r2.is_collision(), "x = {}", x);
    }
}
