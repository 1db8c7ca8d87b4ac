use collide3d::math::{Isometry, Vector};
use collide3d::query::{self, CollisionRequest, DistanceRequest, GjkSolverType};
use collide3d::shape::Shape;

#[test]
fn touching_balls_collide_with_zero_depth() {
    let b1 = Shape::ball(20.0).unwrap();
    let b2 = Shape::ball(10.0).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(30.0, 0.0, 0.0);

    let result = query::collide(&b1, &pos1, &b2, &pos2, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());

    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 0.0, epsilon = 1.0e-3);
    assert_relative_eq!(contact.normal, Vector::new(1.0, 0.0, 0.0), epsilon = 1.0e-3);
    assert_relative_eq!(contact.position.x, 20.0, epsilon = 1.0e-3);
}

#[test]
fn overlapping_balls_report_radius_weighted_contact() {
    let b1 = Shape::ball(20.0).unwrap();
    let b2 = Shape::ball(10.0).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(29.9, 0.0, 0.0);

    let result = query::collide(&b1, &pos1, &b2, &pos2, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());

    let contact = result.contacts()[0];
    assert_relative_eq!(contact.depth, 0.1, epsilon = 1.0e-3);
    assert_relative_eq!(contact.normal, Vector::new(1.0, 0.0, 0.0), epsilon = 1.0e-3);
    assert_relative_eq!(contact.position.x, 20.0 - 0.1 * 20.0 / 30.0, epsilon = 1.0e-3);
}

#[test]
fn separated_balls_do_not_collide() {
    let b1 = Shape::ball(20.0).unwrap();
    let b2 = Shape::ball(10.0).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(40.0, 0.0, 0.0);

    let result = query::collide(&b1, &pos1, &b2, &pos2, &CollisionRequest::default()).unwrap();
    assert!(!result.is_collision());

    let dist = query::distance(&b1, &pos1, &b2, &pos2, &DistanceRequest::default()).unwrap();
    assert_relative_eq!(dist.distance, 10.0, epsilon = 1.0e-3);
}

#[test]
fn concentric_balls_report_zero_normal_and_maximal_depth() {
    let b1 = Shape::ball(20.0).unwrap();
    let b2 = Shape::ball(10.0).unwrap();
    let pos = Isometry::identity();

    let result = query::collide(&b1, &pos, &b2, &pos, &CollisionRequest::default()).unwrap();
    assert!(result.is_collision());

    let contact = result.contacts()[0];
    assert_eq!(contact.normal, Vector::zeros());
    assert_relative_eq!(contact.depth, 30.0, epsilon = 1.0e-9);
}

#[test]
fn ball_distance_is_exact() {
    let b1 = Shape::ball(1.25).unwrap();
    let b2 = Shape::ball(0.75).unwrap();
    let pos1 = Isometry::translation(-1.0, 2.0, 0.5);

    for t in [3.0, 5.5, 10.0, 123.25] {
        let pos2 = Isometry::translation(-1.0, 2.0 + t, 0.5);
        let res = query::distance(&b1, &pos1, &b2, &pos2, &DistanceRequest::default()).unwrap();
        assert_relative_eq!(res.distance, t - 2.0, epsilon = 1.0e-12);

        let (p1, p2) = res.nearest_points.unwrap();
        assert_relative_eq!(p1.y, 2.0 + 1.25, epsilon = 1.0e-9);
        assert_relative_eq!(p2.y, 2.0 + t - 0.75, epsilon = 1.0e-9);
    }
}

#[test]
fn ball_collision_boolean_matches_across_backends() {
    let b1 = Shape::ball(1.0).unwrap();
    let b2 = Shape::ball(1.0).unwrap();
    let pos1 = Isometry::identity();

    let mut request = CollisionRequest::default();

    for x in [0.5, 1.5, 1.99, 2.5, 4.0] {
        let pos2 = Isometry::translation(x, 0.0, 0.0);

        request.gjk_solver = GjkSolverType::VoronoiSimplex;
        let r1 = query::collide(&b1, &pos1, &b2, &pos2, &request).unwrap();

        request.gjk_solver = GjkSolverType::SimplexDescent;
        let r2 = query::collide(&b1, &pos1, &b2, &pos2, &request).unwrap();

        assert_eq!(r1.is_collision(), r2.is_collision());
    }
}
