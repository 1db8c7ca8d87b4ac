use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::query::sat;
use crate::query::Contact;
use crate::shape::{Cuboid, SupportMap};
use crate::utils;
use arrayvec::ArrayVec;
use na::Unit;

/// The contact between two cuboids holding the deepest point only.
///
/// The separating-axis test runs over the fifteen candidate axes (three face
/// normals per cuboid plus the nine edge-edge cross products); the axis of
/// minimum penetration gives the contact normal.
pub fn contact_cuboid_cuboid(
    pos12: &Isometry<Real>,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    prediction: Real,
) -> Option<Contact> {
    let mut manifold = ArrayVec::new();
    contact_manifold_cuboid_cuboid(pos12, cuboid1, cuboid2, prediction, &mut manifold);
    manifold.first().copied()
}

/// The contact manifold between two cuboids.
///
/// On a face-face configuration the manifold is the incident face clipped
/// against the reference face; on an edge-edge configuration it is a single
/// point. Contacts are sorted by increasing signed distance, so the deepest
/// point always comes first.
pub fn contact_manifold_cuboid_cuboid(
    pos12: &Isometry<Real>,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    prediction: Real,
    contacts: &mut ArrayVec<Contact, 8>,
) {
    contacts.clear();

    let (sep1, axis1) =
        sat::cuboid_cuboid_find_local_separating_normal_oneway(cuboid1, cuboid2, pos12);
    if sep1 > prediction {
        return;
    }

    let pos21 = pos12.inverse();
    let (sep2, axis2) =
        sat::cuboid_cuboid_find_local_separating_normal_oneway(cuboid2, cuboid1, &pos21);
    if sep2 > prediction {
        return;
    }

    let (sep_edge, axis_edge) =
        sat::cuboid_cuboid_find_local_separating_edge_twoway(cuboid1, cuboid2, pos12);
    if sep_edge > prediction {
        return;
    }

    if sep_edge > sep1 && sep_edge > sep2 {
        if let Some(contact) = edge_edge_contact(pos12, cuboid1, cuboid2, &axis_edge, sep_edge) {
            contacts.push(contact);
        }
    } else if sep1 >= sep2 {
        face_face_manifold(pos12, cuboid1, cuboid2, &axis1, prediction, contacts, false);
    } else {
        face_face_manifold(&pos21, cuboid2, cuboid1, &axis2, prediction, contacts, true);
    }

    contacts.sort_by(|a, b| a.dist.total_cmp(&b.dist));
}

// Contact manifold with `cuboid1` as the reference box. `axis1` is the
// reference face normal, in the local frame of `cuboid1`, oriented toward
// `cuboid2`. If `flip` is set, the produced contacts are flipped so that the
// caller's original ordering is restored.
fn face_face_manifold(
    pos12: &Isometry<Real>,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    axis1: &Vector<Real>,
    prediction: Real,
    contacts: &mut ArrayVec<Contact, 8>,
    flip: bool,
) {
    // The reference face is normal to the dominant coordinate axis.
    let a = axis1.iamax();
    let sign_a = Real::copysign(1.0, axis1[a]);
    let normal1 = Unit::new_unchecked(Vector::ith(a, sign_a));
    let face_offset = cuboid1.half_extents[a];
    let u = (a + 1) % 3;
    let w = (a + 2) % 3;

    // The incident face of `cuboid2` is the one whose normal is the most
    // anti-parallel to the reference normal.
    let normal2_2 = pos12.inverse_transform_unit_vector(&-normal1);
    let b = normal2_2.iamax();
    let sign_b = Real::copysign(1.0, normal2_2[b]);

    let he2 = cuboid2.half_extents;
    let bu = (b + 1) % 3;
    let bw = (b + 2) % 3;
    let mut incident: ArrayVec<Point<Real>, 8> = ArrayVec::new();

    for (su, sw) in [(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)] {
        let mut vtx = Point::origin();
        vtx[b] = he2[b] * sign_b;
        vtx[bu] = he2[bu] * su;
        vtx[bw] = he2[bw] * sw;
        incident.push(pos12 * vtx);
    }

    // Clip the incident face against the four side planes of the reference
    // face.
    for (axis, sign) in [(u, 1.0), (u, -1.0), (w, 1.0), (w, -1.0)] {
        let limit = cuboid1.half_extents[axis];
        clip_polygon(&mut incident, |pt| limit - pt[axis] * sign);

        if incident.is_empty() {
            return;
        }
    }

    for pt in &incident {
        let dist = normal1.dot(&pt.coords) - face_offset;

        if dist <= prediction {
            let point1 = pt - *normal1 * dist;
            let point2 = pos12.inverse_transform_point(pt);
            let normal2 = pos12.inverse_transform_unit_vector(&-normal1);
            let contact = Contact::new(point1, point2, normal1, normal2, dist);

            let contact = if flip { contact.flipped() } else { contact };

            if contacts.is_full() {
                // Keep the deepest points when the clipped polygon exceeds
                // the manifold capacity.
                if let Some((worst, _)) = contacts
                    .iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.dist.total_cmp(&b.dist))
                {
                    if contacts[worst].dist > contact.dist {
                        contacts[worst] = contact;
                    }
                }
            } else {
                contacts.push(contact);
            }
        }
    }
}

// Sutherland-Hodgman pass against the half-plane `margin(pt) >= 0`.
fn clip_polygon<F: Fn(&Point<Real>) -> Real>(polygon: &mut ArrayVec<Point<Real>, 8>, margin: F) {
    let input: ArrayVec<Point<Real>, 8> = polygon.clone();
    polygon.clear();

    for i in 0..input.len() {
        let current = input[i];
        let next = input[(i + 1) % input.len()];
        let d_current = margin(&current);
        let d_next = margin(&next);

        if d_current >= 0.0 {
            push_clipped(polygon, current);
        }

        if (d_current >= 0.0) != (d_next >= 0.0) {
            let t = d_current / (d_current - d_next);
            push_clipped(polygon, current + (next - current) * t);
        }
    }
}

fn push_clipped(polygon: &mut ArrayVec<Point<Real>, 8>, pt: Point<Real>) {
    if !polygon.is_full() {
        polygon.push(pt);
    }
}

// Single contact between the supporting edges realizing an edge-edge
// separating axis. `axis1` is in the local frame of `cuboid1`, oriented
// toward `cuboid2`.
fn edge_edge_contact(
    pos12: &Isometry<Real>,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    axis1: &Vector<Real>,
    separation: Real,
) -> Option<Contact> {
    let normal1 = Unit::try_new(*axis1, crate::math::DEFAULT_EPSILON)?;

    let (e1a, e1b) = supporting_edge(cuboid1, &normal1);

    let normal2_2 = pos12.inverse_transform_unit_vector(&-normal1);
    let (e2a, e2b) = supporting_edge(cuboid2, &normal2_2);
    let e2a = pos12 * e2a;
    let e2b = pos12 * e2b;

    let (point1, point2_1) = utils::closest_points_segment_segment(&e1a, &e1b, &e2a, &e2b);
    let point2 = pos12.inverse_transform_point(&point2_1);
    let normal2 = pos12.inverse_transform_unit_vector(&-normal1);

    Some(Contact::new(point1, point2, normal1, normal2, separation))
}

// The edge of the cuboid supporting the direction `dir`: the supporting
// vertex together with its neighbor along the axis most orthogonal to `dir`.
fn supporting_edge(cuboid: &Cuboid, dir: &UnitVector<Real>) -> (Point<Real>, Point<Real>) {
    let vertex = cuboid.local_support_point(dir);

    let mut k = 0;
    let mut smallest = Real::MAX;
    for i in 0..3 {
        let align = dir[i].abs();
        if align < smallest {
            smallest = align;
            k = i;
        }
    }

    let mut other = vertex;
    other[k] = -vertex[k];
    (vertex, other)
}

#[cfg(test)]
mod test {
    use super::contact_cuboid_cuboid;
    use crate::math::{Isometry, Vector};
    use crate::shape::Cuboid;

    #[test]
    fn face_face_depth_and_normal() {
        let c = Cuboid::new(Vector::new(2.0, 1.0, 1.0));
        let pos12 = Isometry::translation(3.5, 0.0, 0.0);

        let contact = contact_cuboid_cuboid(&pos12, &c, &c, 10.0).unwrap();
        assert_relative_eq!(contact.dist, -0.5, epsilon = 1.0e-9);
        assert_relative_eq!(*contact.normal1, Vector::x(), epsilon = 1.0e-9);
    }

    #[test]
    fn separated_boxes_produce_no_contact() {
        let c1 = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
        let c2 = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
        let pos12 = Isometry::translation(2.5, 0.0, 0.0);

        assert!(contact_cuboid_cuboid(&pos12, &c1, &c2, 0.0).is_none());
    }
}
