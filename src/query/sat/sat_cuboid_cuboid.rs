use crate::math::{Isometry, Real, Vector};
use crate::shape::{Cuboid, SupportMap};

/// Computes the separation between two cuboids along the line directed by
/// `axis1`, expressed in the local frame of the first cuboid.
///
/// The axis is re-oriented to point from the first cuboid toward the second
/// one; the returned separation is positive if the cuboids are separated
/// along that axis, negative if their projections overlap.
pub fn cuboid_cuboid_compute_separation_wrt_local_line(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
    axis1: &Vector<Real>,
) -> (Real, Vector<Real>) {
    let signum = Real::copysign(1.0, pos12.translation.vector.dot(axis1));
    let axis1 = axis1 * signum;
    let axis2 = pos12.inverse_transform_vector(&-axis1);
    let local_pt1 = cuboid1.local_support_point(&axis1);
    let local_pt2 = cuboid2.local_support_point(&axis2);
    let pt2 = pos12 * local_pt2;
    let separation = (pt2 - local_pt1).dot(&axis1);
    (separation, axis1)
}

/// Finds the face normal of the first cuboid with the largest separation
/// from the second cuboid.
///
/// Returns the separation and the axis, in the local frame of the first
/// cuboid.
pub fn cuboid_cuboid_find_local_separating_normal_oneway(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for i in 0..3 {
        let axis1 = Vector::ith(i, 1.0);
        let (separation, axis1) =
            cuboid_cuboid_compute_separation_wrt_local_line(cuboid1, cuboid2, pos12, &axis1);

        if separation > best_separation {
            best_separation = separation;
            best_dir = axis1;
        }
    }

    (best_separation, best_dir)
}

/// Finds the edge-edge cross-product axis with the largest separation
/// between two cuboids.
///
/// The nine candidate axes are the cross products of one edge direction of
/// each cuboid. Returns the separation and the axis, in the local frame of
/// the first cuboid.
pub fn cuboid_cuboid_find_local_separating_edge_twoway(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for i in 0..3 {
        let axis1: Vector<Real> = Vector::ith(i, 1.0);

        for j in 0..3 {
            let axis2 = pos12 * Vector::ith(j, 1.0);
            let cross = axis1.cross(&axis2);

            if let Some(cross) =
                na::Unit::try_new(cross, crate::math::DEFAULT_EPSILON.sqrt())
            {
                let (separation, axis) = cuboid_cuboid_compute_separation_wrt_local_line(
                    cuboid1,
                    cuboid2,
                    pos12,
                    &cross,
                );

                if separation > best_separation {
                    best_separation = separation;
                    best_dir = axis;
                }
            }
        }
    }

    (best_separation, best_dir)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Isometry, Vector};
    use crate::shape::Cuboid;

    #[test]
    fn separated_boxes_have_positive_separation() {
        let c1 = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
        let c2 = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
        let pos12 = Isometry::translation(3.0, 0.0, 0.0);

        let (sep, axis) = cuboid_cuboid_find_local_separating_normal_oneway(&c1, &c2, &pos12);
        assert_relative_eq!(sep, 1.0, epsilon = 1.0e-9);
        assert_relative_eq!(axis, Vector::x(), epsilon = 1.0e-9);
    }

    #[test]
    fn overlapping_boxes_have_negative_separation() {
        let c1 = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
        let c2 = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
        let pos12 = Isometry::translation(1.5, 0.0, 0.0);

        let (sep, _) = cuboid_cuboid_find_local_separating_normal_oneway(&c1, &c2, &pos12);
        assert_relative_eq!(sep, -0.5, epsilon = 1.0e-9);
    }
}
