use collide3d::math::{Isometry, Real, Vector};
use collide3d::query::{self, CollisionRequest, GjkSolverType};
use collide3d::shape::Shape;

// Sweep one shape across the other along a diagonal; used both for the
// warm-start equivalence check and for the backend agreement check.
fn sweep_positions(n: usize) -> Vec<Isometry<Real>> {
    let start = Vector::new(-20.0, -20.0, -20.0);
    let end = Vector::new(20.0, 20.0, 20.0);

    (0..n)
        .map(|i| {
            let t = start + (end - start) * (i as Real / (n - 1) as Real);
            Isometry::translation(t.x, t.y, t.z)
        })
        .collect()
}

#[test]
fn cached_guess_does_not_change_boolean_outcomes() {
    let s1 = Shape::cylinder(5.0, 5.0).unwrap();
    let s2 = Shape::cone(5.0, 5.0).unwrap();
    let pos1 = Isometry::identity();

    let positions = sweep_positions(201);

    // Warm-started run, feeding each result's guess into the next query.
    let mut request = CollisionRequest {
        enable_cached_gjk_guess: true,
        ..Default::default()
    };
    let mut warm = Vec::new();
    for pos2 in &positions {
        let result = query::collide(&s1, &pos1, &s2, pos2, &request).unwrap();
        warm.push(result.is_collision());

        if let Some(guess) = result.cached_gjk_guess {
            request.cached_gjk_guess = guess;
        }
    }

    // Cold run.
    let request = CollisionRequest::default();
    let mut cold = Vec::new();
    for pos2 in &positions {
        let result = query::collide(&s1, &pos1, &s2, pos2, &request).unwrap();
        cold.push(result.is_collision());
    }

    assert_eq!(warm, cold);
}

#[test]
fn both_backends_agree_on_intersection_outcomes() {
    let s1 = Shape::cylinder(5.0, 5.0).unwrap();
    let s2 = Shape::cone(5.0, 5.0).unwrap();
    let pos1 = Isometry::identity();

    let voronoi = CollisionRequest {
        gjk_solver: GjkSolverType::VoronoiSimplex,
        ..Default::default()
    };
    let descent = CollisionRequest {
        gjk_solver: GjkSolverType::SimplexDescent,
        ..Default::default()
    };

    for pos2 in sweep_positions(101) {
        let r1 = query::collide(&s1, &pos1, &s2, &pos2, &voronoi).unwrap();
        let r2 = query::collide(&s1, &pos1, &s2, &pos2, &descent).unwrap();

        assert_eq!(
            r1.is_collision(),
            r2.is_collision(),
            "backends disagree at {:?}",
            pos2.translation
        );
    }
}

#[test]
fn contact_computation_can_be_disabled() {
    let s1 = Shape::ball(2.0).unwrap();
    let s2 = Shape::cuboid(Vector::new(1.0, 1.0, 1.0)).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(2.5, 0.0, 0.0);

    let request = CollisionRequest {
        enable_contact: false,
        ..Default::default()
    };

    let result = query::collide(&s1, &pos1, &s2, &pos2, &request).unwrap();
    assert!(result.is_collision());

    // Only the boolean is set: no contact is produced.
    assert_eq!(result.num_contacts(), 0);
}

#[test]
fn max_contacts_bounds_the_manifold() {
    let big = Shape::cuboid(Vector::new(10.0, 1.0, 10.0)).unwrap();
    let small = Shape::cuboid(Vector::new(1.0, 1.0, 1.0)).unwrap();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.0, 1.75, 0.0);

    for max_contacts in [1, 2, 4] {
        let request = CollisionRequest {
            max_contacts,
            ..Default::default()
        };
        let result = query::collide(&big, &pos1, &small, &pos2, &request).unwrap();
        assert!(result.is_collision());
        assert!(result.num_contacts() <= max_contacts);
    }
}
