use crate::mass_properties::MassProperties;
use crate::math::{Matrix, Point, Real};
use crate::shape::ConvexPolyhedron;
use num::Zero;

impl MassProperties {
    /// Computes the mass properties of a convex polyhedron by decomposing it
    /// into tetrahedra.
    pub fn from_convex_polyhedron(density: Real, poly: &ConvexPolyhedron) -> MassProperties {
        let (volume, com) = convex_signed_volume_and_center_of_mass(poly);

        if volume.is_zero() {
            return MassProperties::zero();
        }

        let mut itot = Matrix::zeros();

        for i in 0..poly.faces().len() {
            let tri = poly.face_triangle(i);
            let vol = tetrahedron_signed_volume(&com, &tri.a, &tri.b, &tri.c);
            let ipart = tetrahedron_unit_inertia_tensor_wrt_point(&com, &com, &tri.a, &tri.b, &tri.c);

            itot += ipart * vol;
        }

        let sign = volume.signum();
        Self::with_inertia_matrix(com, volume * density * sign, itot * density * sign)
    }
}

/// The signed volume of the tetrahedron `(a, b, c, d)`.
pub fn tetrahedron_signed_volume(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> Real {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;

    ab.cross(&ac).dot(&ad) / 6.0
}

/// Computes the signed volume and center of mass of a convex polyhedron from
/// tetrahedra rooted at an arbitrary interior point.
pub fn convex_signed_volume_and_center_of_mass(poly: &ConvexPolyhedron) -> (Real, Point<Real>) {
    let root = poly.points()[0];
    let mut res = Point::origin();
    let mut vol = 0.0;

    for i in 0..poly.faces().len() {
        let tri = poly.face_triangle(i);
        let volume = tetrahedron_signed_volume(&root, &tri.a, &tri.b, &tri.c);
        let center = (root.coords + tri.a.coords + tri.b.coords + tri.c.coords) / 4.0;

        res += center * volume;
        vol += volume;
    }

    if vol.is_zero() {
        (vol, root)
    } else {
        (vol, res / vol)
    }
}

/// Computes the unit inertia tensor of a tetrahedron, with regard to the given `point`.
fn tetrahedron_unit_inertia_tensor_wrt_point(
    point: &Point<Real>,
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
    p4: &Point<Real>,
) -> Matrix<Real> {
    let p1 = p1 - point;
    let p2 = p2 - point;
    let p3 = p3 - point;
    let p4 = p4 - point;

    // Just for readability.
    let x1 = p1[0];
    let y1 = p1[1];
    let z1 = p1[2];
    let x2 = p2[0];
    let y2 = p2[1];
    let z2 = p2[2];
    let x3 = p3[0];
    let y3 = p3[1];
    let z3 = p3[2];
    let x4 = p4[0];
    let y4 = p4[1];
    let z4 = p4[2];

    let diag_x = x1 * x1
        + x1 * x2
        + x2 * x2
        + x1 * x3
        + x2 * x3
        + x3 * x3
        + x1 * x4
        + x2 * x4
        + x3 * x4
        + x4 * x4;
    let diag_y = y1 * y1
        + y1 * y2
        + y2 * y2
        + y1 * y3
        + y2 * y3
        + y3 * y3
        + y1 * y4
        + y2 * y4
        + y3 * y4
        + y4 * y4;
    let diag_z = z1 * z1
        + z1 * z2
        + z2 * z2
        + z1 * z3
        + z2 * z3
        + z3 * z3
        + z1 * z4
        + z2 * z4
        + z3 * z4
        + z4 * z4;

    let a0 = (diag_y + diag_z) * 0.1;
    let b0 = (diag_z + diag_x) * 0.1;
    let c0 = (diag_x + diag_y) * 0.1;

    let a1 = (y1 * z1 * 2.0
        + y2 * z1
        + y3 * z1
        + y4 * z1
        + y1 * z2
        + y2 * z2 * 2.0
        + y3 * z2
        + y4 * z2
        + y1 * z3
        + y2 * z3
        + y3 * z3 * 2.0
        + y4 * z3
        + y1 * z4
        + y2 * z4
        + y3 * z4
        + y4 * z4 * 2.0)
        * 0.05;
    let b1 = (x1 * z1 * 2.0
        + x2 * z1
        + x3 * z1
        + x4 * z1
        + x1 * z2
        + x2 * z2 * 2.0
        + x3 * z2
        + x4 * z2
        + x1 * z3
        + x2 * z3
        + x3 * z3 * 2.0
        + x4 * z3
        + x1 * z4
        + x2 * z4
        + x3 * z4
        + x4 * z4 * 2.0)
        * 0.05;
    let c1 = (x1 * y1 * 2.0
        + x2 * y1
        + x3 * y1
        + x4 * y1
        + x1 * y2
        + x2 * y2 * 2.0
        + x3 * y2
        + x4 * y2
        + x1 * y3
        + x2 * y3
        + x3 * y3 * 2.0
        + x4 * y3
        + x1 * y4
        + x2 * y4
        + x3 * y4
        + x4 * y4 * 2.0)
        * 0.05;

    Matrix::new(a0, -b1, -c1, -b1, b0, -a1, -c1, -a1, c0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vector;

    #[test]
    fn cube_matches_cuboid_formula() {
        let he = Vector::new(1.0, 2.0, 3.0);
        let points = vec![
            Point::new(-he.x, -he.y, -he.z),
            Point::new(he.x, -he.y, -he.z),
            Point::new(he.x, he.y, -he.z),
            Point::new(-he.x, he.y, -he.z),
            Point::new(-he.x, -he.y, he.z),
            Point::new(he.x, -he.y, he.z),
            Point::new(he.x, he.y, he.z),
            Point::new(-he.x, he.y, he.z),
        ];
        // Outward-oriented triangulated faces of the box.
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
        let poly = ConvexPolyhedron::from_convex_mesh(points, &faces).unwrap();

        let mprops = MassProperties::from_convex_polyhedron(1.0, &poly);
        let expected = MassProperties::from_cuboid(1.0, he);

        assert_relative_eq!(mprops.mass, expected.mass, epsilon = 1.0e-9);
        assert_relative_eq!(mprops.local_com, expected.local_com, epsilon = 1.0e-9);
        assert_relative_eq!(mprops.inertia, expected.inertia, epsilon = 1.0e-7);
    }
}
