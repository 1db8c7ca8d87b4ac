use crate::math::{Isometry, Real};
use crate::query::Contact;
use crate::shape::{HalfSpace, SupportMap};

/// Contact between a half-space and a support-mapped shape (cuboid, capsule,
/// convex polyhedron, etc.).
///
/// The contact point on the half-space is the projection of the deepest
/// point of the shape onto the boundary plane.
pub fn contact_halfspace_support_map<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    halfspace: &HalfSpace,
    other: &G,
    prediction: Real,
) -> Option<Contact> {
    let deepest = other.support_point_toward(pos12, &-halfspace.normal);
    let distance = halfspace.normal.dot(&deepest.coords) - halfspace.offset;

    if distance <= prediction {
        let point1 = deepest - *halfspace.normal * distance;
        let point2 = pos12.inverse_transform_point(&deepest);
        let normal2 = pos12.inverse_transform_unit_vector(&-halfspace.normal);

        Some(Contact::new(
            point1,
            point2,
            halfspace.normal,
            normal2,
            distance,
        ))
    } else {
        None
    }
}

/// Contact between a support-mapped shape (cuboid, capsule, convex
/// polyhedron, etc.) and a half-space.
pub fn contact_support_map_halfspace<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    other: &G,
    halfspace: &HalfSpace,
    prediction: Real,
) -> Option<Contact> {
    contact_halfspace_support_map(&pos12.inverse(), halfspace, other, prediction)
        .map(|c| c.flipped())
}
