use crate::math::{Isometry, Point, Real};
use crate::shape::{HalfSpace, SupportMap};

/// Distance between a half-space and a support-mapped shape, with witness
/// points in the local frame of the half-space.
pub fn distance_halfspace_support_map<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    halfspace: &HalfSpace,
    other: &G,
) -> (Real, Point<Real>, Point<Real>) {
    let deepest = other.support_point_toward(pos12, &-halfspace.normal);
    let distance = halfspace.normal.dot(&deepest.coords) - halfspace.offset;
    let on_plane = deepest - *halfspace.normal * distance;

    (distance.max(0.0), on_plane, deepest)
}

/// Distance between a support-mapped shape and a half-space, with witness
/// points in the local frame of the shape.
pub fn distance_support_map_halfspace<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    other: &G,
    halfspace: &HalfSpace,
) -> (Real, Point<Real>, Point<Real>) {
    let (dist, p2, p1) = distance_halfspace_support_map(&pos12.inverse(), halfspace, other);
    (dist, pos12 * p1, pos12 * p2)
}
