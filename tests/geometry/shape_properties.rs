use collide3d::math::{Isometry, Point, Real, Vector};
use collide3d::na::UnitQuaternion;
use collide3d::query::{self, CollisionRequest, DistanceRequest, QueryError};
use collide3d::shape::{Shape, ShapeError};

#[test]
fn construction_rejects_invalid_parameters() {
    assert_eq!(Shape::ball(0.0), Err(ShapeError::NonPositiveParameter));
    assert_eq!(
        Shape::ball(Real::INFINITY),
        Err(ShapeError::NonFiniteParameter)
    );
    assert_eq!(
        Shape::cylinder(1.0, -2.0),
        Err(ShapeError::NonPositiveParameter)
    );
    assert_eq!(
        Shape::halfspace(Vector::new(0.5, 0.0, 0.0), 1.0),
        Err(ShapeError::NonUnitNormal)
    );
    assert_eq!(
        Shape::convex_polyhedron(
            vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
            &[[0, 1, 2]],
        ),
        Err(ShapeError::DegenerateConvexSet)
    );
}

#[test]
fn request_validation() {
    let ball = Shape::ball(1.0).unwrap();
    let pos = Isometry::identity();

    let request = CollisionRequest {
        max_contacts: 0,
        ..Default::default()
    };
    assert_eq!(
        query::collide(&ball, &pos, &ball, &pos, &request),
        Err(QueryError::InvalidRequest)
    );

    let request = CollisionRequest {
        distance_tolerance: -1.0,
        ..Default::default()
    };
    assert_eq!(
        query::collide(&ball, &pos, &ball, &pos, &request),
        Err(QueryError::InvalidRequest)
    );

    let request = DistanceRequest {
        distance_tolerance: Real::NAN,
        ..Default::default()
    };
    assert!(query::distance(&ball, &pos, &ball, &pos, &request).is_err());
}

#[test]
fn sphere_volume_matches_the_analytic_formula() {
    let radius = 5.0;
    let ball = Shape::ball(radius).unwrap();
    let volume = 4.0 / 3.0 * std::f64::consts::PI * radius * radius * radius;

    assert_relative_eq!(ball.volume().unwrap(), volume, epsilon = 1.0e-12);
}

#[test]
fn mass_properties_spot_checks() {
    // Cuboid inertia for half-extents (1, 2, 3) and unit density.
    let cuboid = Shape::cuboid(Vector::new(1.0, 2.0, 3.0)).unwrap();
    let mprops = cuboid.mass_properties(1.0).unwrap();
    assert_relative_eq!(mprops.mass, 48.0, epsilon = 1.0e-9);
    assert_relative_eq!(
        mprops.principal_inertia(),
        Vector::new(208.0, 160.0, 80.0),
        epsilon = 1.0e-9
    );

    // The cone centroid sits a quarter of its height above the base.
    let cone = Shape::cone(2.0, 1.0).unwrap();
    let mprops = cone.mass_properties(1.0).unwrap();
    assert_relative_eq!(mprops.local_com, Point::new(0.0, 0.0, -1.0), epsilon = 1.0e-9);

    // A capsule is a cylinder plus a ball.
    let capsule = Shape::capsule(2.0, 0.5).unwrap();
    let mprops = capsule.mass_properties(2.0).unwrap();
    let expected_mass = 2.0
        * (std::f64::consts::PI * 0.25 * 4.0
            + 4.0 / 3.0 * std::f64::consts::PI * 0.125);
    assert_relative_eq!(mprops.mass, expected_mass, epsilon = 1.0e-9);

    // Unbounded and flat shapes have no mass properties.
    assert!(Shape::plane(Vector::z(), 0.0).unwrap().mass_properties(1.0).is_none());
    assert!(Shape::halfspace(Vector::z(), 0.0)
        .unwrap()
        .mass_properties(1.0)
        .is_none());
}

#[test]
fn support_points_stay_inside_the_local_aabb() {
    let shapes = [
        Shape::ball(1.5).unwrap(),
        Shape::cuboid(Vector::new(1.0, 2.0, 0.5)).unwrap(),
        Shape::capsule(1.0, 0.5).unwrap(),
        Shape::cylinder(0.7, 1.2).unwrap(),
        Shape::cone(0.9, 1.1).unwrap(),
        Shape::ellipsoid(Vector::new(0.4, 1.3, 2.0)).unwrap(),
    ];

    let dirs = [
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(-1.0, 0.0, 0.0),
        Vector::new(0.0, 1.0, 0.0),
        Vector::new(0.0, 0.0, -1.0),
        Vector::new(1.0, 1.0, 1.0),
        Vector::new(-0.3, 0.9, -0.6),
        Vector::new(0.2, -0.1, 0.8),
    ];

    for shape in &shapes {
        let aabb = shape.local_aabb().loosened(1.0e-9);
        let support_map = shape.as_support_map().unwrap();

        for dir in &dirs {
            let pt = support_map.local_support_point(dir);
            assert!(
                aabb.contains_local_point(&pt),
                "{:?} support escaped its AABB along {:?}",
                shape.shape_type(),
                dir
            );
        }
    }
}

#[test]
fn world_aabb_from_rotation_encloses_the_translated_one() {
    let capsule = Shape::capsule(2.0, 1.0).unwrap();

    let translation = Vector::new(3.0, -1.0, 2.0);
    let translated = capsule.translated_aabb(&translation);
    let transformed = capsule.compute_aabb(&Isometry::translation(
        translation.x,
        translation.y,
        translation.z,
    ));
    assert_eq!(translated, transformed);

    // Under a general transform the rotated AABB still fits in the bound
    // derived from the local bounding sphere.
    let pos = Isometry::from_parts(
        collide3d::na::Translation3::new(1.0, 2.0, 3.0),
        UnitQuaternion::from_axis_angle(&Vector::x_axis(), 1.1),
    );
    let aabb = capsule.compute_aabb(&pos);
    let bsphere = capsule.local_bounding_sphere().transform_by(&pos);

    for k in 0..3 {
        assert!(aabb.mins[k] >= bsphere.center[k] - bsphere.radius - 1.0e-9);
        assert!(aabb.maxs[k] <= bsphere.center[k] + bsphere.radius + 1.0e-9);
    }
}

#[test]
fn distance_witness_points_are_on_the_shapes() {
    let ball = Shape::ball(2.0).unwrap();
    let cuboid = Shape::cuboid(Vector::new(1.0, 1.0, 1.0)).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(10.0, 0.0, 0.0);

    let res = query::distance(&ball, &pos1, &cuboid, &pos2, &DistanceRequest::default()).unwrap();
    assert_relative_eq!(res.distance, 7.0, epsilon = 1.0e-6);

    let (p1, p2) = res.nearest_points.unwrap();
    assert_relative_eq!(p1, Point::new(2.0, 0.0, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(p2, Point::new(9.0, 0.0, 0.0), epsilon = 1.0e-6);
}

#[test]
fn convex_polyhedron_distance_through_gjk() {
    // A cube given explicitly as a convex mesh.
    let he = 1.0;
    let points = vec![
        Point::new(-he, -he, -he),
        Point::new(he, -he, -he),
        Point::new(he, he, -he),
        Point::new(-he, he, -he),
        Point::new(-he, -he, he),
        Point::new(he, -he, he),
        Point::new(he, he, he),
        Point::new(-he, he, he),
    ];
    let faces = [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [1, 2, 6],
        [1, 6, 5],
        [2, 3, 7],
        [2, 7, 6],
        [3, 0, 4],
        [3, 4, 7],
    ];
    let convex = Shape::convex_polyhedron(points, &faces).unwrap();
    let ball = Shape::ball(1.0).unwrap();

    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(5.0, 0.0, 0.0);

    let res = query::distance(&convex, &pos1, &ball, &pos2, &DistanceRequest::default()).unwrap();
    assert_relative_eq!(res.distance, 3.0, epsilon = 1.0e-6);
}

#[test]
fn shape_triangle_intersection_honors_the_triangle_transform() {
    let ball = Shape::ball(1.0).unwrap();
    let pos = Isometry::translation(0.0, 0.0, 3.5);

    // The triangle lives in a frame lifted by z = 3.
    let tf_tri = Isometry::translation(0.0, 0.0, 3.0);
    let contact = query::intersect_shape_triangle(
        &ball,
        &pos,
        Point::new(-5.0, -5.0, 0.0),
        Point::new(5.0, -5.0, 0.0),
        Point::new(0.0, 5.0, 0.0),
        Some(&tf_tri),
    )
    .unwrap()
    .expect("expected an intersection");

    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-6);
    assert_relative_eq!(contact.normal, -Vector::z(), epsilon = 1.0e-6);
    assert_relative_eq!(contact.position.z, 2.75, epsilon = 1.0e-6);
}
