use crate::math::{Isometry, Point, Real};
use crate::shape::{Plane, SupportMap};

/// Distance between a plane and a support-mapped shape, with witness points
/// in the local frame of the plane.
///
/// The distance is zero when the shape straddles or touches the surface.
pub fn distance_plane_support_map<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    plane: &Plane,
    other: &G,
) -> (Real, Point<Real>, Point<Real>) {
    let highest = other.support_point_toward(pos12, &plane.normal);
    let lowest = other.support_point_toward(pos12, &-plane.normal);
    let d_max = plane.normal.dot(&highest.coords) - plane.offset;
    let d_min = plane.normal.dot(&lowest.coords) - plane.offset;

    // The closest feature lies on the side the shape occupies.
    let (distance, closest) = if d_min > 0.0 {
        (d_min, lowest)
    } else if d_max < 0.0 {
        (-d_max, highest)
    } else {
        (0.0, lowest)
    };

    let on_plane = closest - *plane.normal * (plane.normal.dot(&closest.coords) - plane.offset);

    (distance, on_plane, closest)
}

/// Distance between a support-mapped shape and a plane, with witness points
/// in the local frame of the shape.
pub fn distance_support_map_plane<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    other: &G,
    plane: &Plane,
) -> (Real, Point<Real>, Point<Real>) {
    let (dist, p2, p1) = distance_plane_support_map(&pos12.inverse(), plane, other);
    (dist, pos12 * p1, pos12 * p2)
}
