use crate::math::{Isometry, Real};
use crate::query::Contact;
use crate::shape::{Plane, SupportMap};

/// Contact between a plane and a support-mapped shape (cuboid, capsule,
/// triangle, etc.).
///
/// A plane is a two-sided surface: the contact normal points from the plane
/// toward the side holding the bulk of the shape, and the depth is the
/// smallest translation along that normal separating the shape from the
/// surface.
pub fn contact_plane_support_map<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    plane: &Plane,
    other: &G,
    prediction: Real,
) -> Option<Contact> {
    let highest = other.support_point_toward(pos12, &plane.normal);
    let lowest = other.support_point_toward(pos12, &-plane.normal);
    let d_max = plane.normal.dot(&highest.coords) - plane.offset;
    let d_min = plane.normal.dot(&lowest.coords) - plane.offset;

    if d_min > prediction || -d_max > prediction {
        // The shape lies entirely on one side, too far from the surface.
        return None;
    }

    // Push the shape toward the side already holding most of it.
    let (normal1, dist, deepest) = if d_min + d_max >= 0.0 {
        (plane.normal, d_min, lowest)
    } else {
        (-plane.normal, -d_max, highest)
    };

    let point1 = deepest - *plane.normal * (plane.normal.dot(&deepest.coords) - plane.offset);
    let point2 = pos12.inverse_transform_point(&deepest);
    let normal2 = pos12.inverse_transform_unit_vector(&-normal1);

    Some(Contact::new(point1, point2, normal1, normal2, dist))
}

/// Contact between a support-mapped shape and a plane.
pub fn contact_support_map_plane<G: ?Sized + SupportMap>(
    pos12: &Isometry<Real>,
    other: &G,
    plane: &Plane,
    prediction: Real,
) -> Option<Contact> {
    contact_plane_support_map(&pos12.inverse(), plane, other, prediction).map(|c| c.flipped())
}
