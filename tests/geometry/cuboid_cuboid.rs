use collide3d::math::{Isometry, Vector};
use collide3d::query::{self, CollisionRequest};
use collide3d::shape::Shape;

#[test]
fn boxes_separated_by_a_hair_do_not_collide() {
    // Box with full extents (20, 40, 50) versus a unit-ish box of full
    // extents (10, 10, 10) shifted just past the touching configuration.
    let b1 = Shape::cuboid(Vector::new(10.0, 20.0, 25.0)).unwrap();
    let b2 = Shape::cuboid(Vector::new(5.0, 5.0, 5.0)).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(15.01, 0.0, 0.0);

    let result = query::collide(&b1, &pos1, &b2, &pos2, &CollisionRequest::default()).unwrap();
    assert!(!result.is_collision());
}

#[test]
fn face_face_penetration_depth_and_normal() {
    let c = Shape::cuboid(Vector::new(2.0, 1.0, 1.0)).unwrap();
    let pos1 = Isometry::translation(3.5, 0.0, 0.0);
    let pos2 = Isometry::identity();

    let result = query::collide(&c, &pos1, &c, &pos2, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());
    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-9);
    assert_relative_eq!(contact.normal, -Vector::x(), epsilon = 1.0e-9);

    let pos1 = Isometry::translation(0.0, 0.2, 0.0);
    let result = query::collide(&c, &pos1, &c, &pos2, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());
    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 1.8, epsilon = 1.0e-9);
    assert_relative_eq!(contact.normal, -Vector::y(), epsilon = 1.0e-9);
}

#[test]
fn face_manifold_contains_the_deepest_vertex() {
    let big = Shape::cuboid(Vector::new(10.0, 1.0, 10.0)).unwrap();
    let small = Shape::cuboid(Vector::new(1.0, 1.0, 1.0)).unwrap();
    let pos1 = Isometry::identity();
    // Resting on top of the big box, sunk by 0.25.
    let pos2 = Isometry::translation(0.0, 1.75, 0.0);

    let request = CollisionRequest {
        max_contacts: 8,
        ..Default::default()
    };

    let result = query::collide(&big, &pos1, &small, &pos2, &request).unwrap();
    assert!(result.is_collision());
    assert!(result.num_contacts() >= 4);

    let max_depth = result
        .contacts()
        .iter()
        .map(|c| c.depth)
        .fold(0.0, f64::max);
    assert_relative_eq!(max_depth, 0.25, epsilon = 1.0e-9);

    // The first contact is the deepest one.
    assert_relative_eq!(result.contacts()[0].depth, max_depth, epsilon = 1.0e-9);

    for contact in result.contacts() {
        assert_relative_eq!(contact.normal, Vector::y(), epsilon = 1.0e-9);
        assert_relative_eq!(contact.depth, 0.25, epsilon = 1.0e-9);
        // Contact points lie inside the overlap footprint.
        assert!(contact.position.x.abs() <= 1.0 + 1.0e-9);
        assert!(contact.position.z.abs() <= 1.0 + 1.0e-9);
    }
}

#[test]
fn rotated_box_shallow_overlap() {
    let c = Shape::cuboid(Vector::new(1.0, 1.0, 1.0)).unwrap();
    let pos1 = Isometry::identity();

    // Rotate the second box by 45 degrees around z so that its edge dips
    // into the first box's face.
    let rot = collide3d::na::UnitQuaternion::from_axis_angle(
        &Vector::z_axis(),
        std::f64::consts::FRAC_PI_4,
    );
    let shift = 1.0 + std::f64::consts::SQRT_2 - 0.05;
    let pos2 = Isometry::from_parts(
        collide3d::na::Translation3::new(shift, 0.0, 0.0),
        rot,
    );

    let result = query::collide(&c, &pos1, &c, &pos2, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());

    let contact = result.contacts()[0];
    assert_relative_eq!(contact.normal, Vector::x(), epsilon = 1.0e-6);
    assert_relative_eq!(contact.depth, 0.05, epsilon = 1.0e-6);
}
