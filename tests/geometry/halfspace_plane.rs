use collide3d::math::{Isometry, Point, Vector};
use collide3d::query::{self, CollisionRequest, DistanceRequest};
use collide3d::shape::Shape;

#[test]
fn ball_on_halfspace_boundary() {
    let ball = Shape::ball(10.0).unwrap();
    let halfspace = Shape::halfspace(Vector::x(), 0.0).unwrap();
    let pos = Isometry::identity();

    let result =
        query::collide(&ball, &pos, &halfspace, &pos, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());

    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 10.0, epsilon = 1.0e-3);
    assert_relative_eq!(contact.normal, Vector::new(-1.0, 0.0, 0.0), epsilon = 1.0e-3);
    assert_relative_eq!(
        contact.position,
        Point::new(-5.0, 0.0, 0.0),
        epsilon = 1.0e-3
    );
}

#[test]
fn halfspace_penetration_is_monotone_along_the_inward_normal() {
    let ball = Shape::ball(5.0).unwrap();
    let floor = Shape::halfspace(Vector::z(), 0.0).unwrap();
    let pos_floor = Isometry::identity();

    let mut last_depth = 0.0;

    for z in [4.9, 3.0, 1.0, 0.0, -2.0, -4.0] {
        let pos_ball = Isometry::translation(0.0, 0.0, z);
        let result = query::collide(
            &ball,
            &pos_ball,
            &floor,
            &pos_floor,
            &CollisionRequest::default(),
        )
        .unwrap();

        assert!(result.is_collision());
        let depth = result.contacts()[0].depth;
        assert!(depth >= last_depth);
        last_depth = depth;
    }
}

#[test]
fn plane_contact_is_two_sided() {
    let ball = Shape::ball(5.0).unwrap();
    let plane = Shape::plane(Vector::z(), 0.0).unwrap();
    let pos_plane = Isometry::identity();

    // Ball mostly above the plane: pushed up, normal from the ball toward
    // the surface.
    let pos_ball = Isometry::translation(0.0, 0.0, 3.0);
    let result = query::collide(
        &ball,
        &pos_ball,
        &plane,
        &pos_plane,
        &CollisionRequest::default(),
    )
    .unwrap();
    assert!(result.is_collision());
    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 2.0, epsilon = 1.0e-6);
    assert_relative_eq!(contact.normal, -Vector::z(), epsilon = 1.0e-6);

    // Mirror configuration below the plane.
    let pos_ball = Isometry::translation(0.0, 0.0, -3.0);
    let result = query::collide(
        &ball,
        &pos_ball,
        &plane,
        &pos_plane,
        &CollisionRequest::default(),
    )
    .unwrap();
    assert!(result.is_collision());
    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 2.0, epsilon = 1.0e-6);
    assert_relative_eq!(contact.normal, Vector::z(), epsilon = 1.0e-6);
}

#[test]
fn ball_clear_of_the_plane_does_not_collide() {
    let ball = Shape::ball(5.0).unwrap();
    let plane = Shape::plane(Vector::z(), 0.0).unwrap();
    let pos_plane = Isometry::identity();
    let pos_ball = Isometry::translation(0.0, 0.0, 7.5);

    let result = query::collide(
        &ball,
        &pos_ball,
        &plane,
        &pos_plane,
        &CollisionRequest::default(),
    )
    .unwrap();
    assert!(!result.is_collision());

    let dist = query::distance(
        &ball,
        &pos_ball,
        &plane,
        &pos_plane,
        &DistanceRequest::default(),
    )
    .unwrap();
    assert_relative_eq!(dist.distance, 2.5, epsilon = 1.0e-6);
}

#[test]
fn triangle_against_halfspace_uses_the_deepest_vertex() {
    let triangle = Shape::triangle(
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 2.0),
        Point::new(-1.0, 0.0, -1.0),
    )
    .unwrap();
    let floor = Shape::halfspace(Vector::z(), 0.0).unwrap();
    let pos = Isometry::identity();

    let result =
        query::collide(&triangle, &pos, &floor, &pos, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());

    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 1.0, epsilon = 1.0e-9);
    assert_relative_eq!(contact.normal, -Vector::z(), epsilon = 1.0e-9);
}

#[test]
fn triangle_against_plane_reports_the_occupied_side() {
    let triangle = Shape::triangle(
        Point::new(0.0, 0.0, 3.0),
        Point::new(1.0, 0.0, 2.0),
        Point::new(-1.0, 0.0, -1.0),
    )
    .unwrap();
    let plane = Shape::plane(Vector::z(), 0.0).unwrap();
    let pos = Isometry::identity();

    let result =
        query::collide(&triangle, &pos, &plane, &pos, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());

    // The bulk of the triangle is above the plane, so it is pushed up.
    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 1.0, epsilon = 1.0e-9);
    assert_relative_eq!(contact.normal, -Vector::z(), epsilon = 1.0e-9);
}
