//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::SupportMap;
use crate::utils;

/// A triangle shape.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

/// Description of the location of a point on a triangle.
#[derive(Copy, Clone, Debug)]
pub enum TrianglePointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on an edge.
    ///
    /// The 0-th edge is the segment AB.
    /// The 1-st edge is the segment BC.
    /// The 2-nd edge is the segment AC.
    OnEdge(u32, [Real; 2]),
    /// The point lies on the triangle interior.
    OnFace([Real; 3]),
}

impl TrianglePointLocation {
    /// The barycentric coordinates corresponding to this point location.
    pub fn barycentric_coordinates(&self) -> [Real; 3] {
        let mut bcoords = [0.0; 3];

        match self {
            TrianglePointLocation::OnVertex(i) => bcoords[*i as usize] = 1.0,
            TrianglePointLocation::OnEdge(i, uv) => {
                let idx = match i {
                    0 => (0, 1),
                    1 => (1, 2),
                    2 => (0, 2),
                    _ => unreachable!(),
                };

                bcoords[idx.0] = uv[0];
                bcoords[idx.1] = uv[1];
            }
            TrianglePointLocation::OnFace(uvw) => {
                bcoords[0] = uvw[0];
                bcoords[1] = uvw[1];
                bcoords[2] = uvw[2];
            }
        }

        bcoords
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// The normal points such that it is collinear to `AB × AC`. Returns
    /// `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        utils::ccw_face_normal([&self.a, &self.b, &self.c])
    }

    /// A vector normal of this triangle, not normalized.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The centroid of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        let coords = (self.a.coords + self.b.coords + self.c.coords) / 3.0;
        Point::from(coords)
    }

    /// Tests whether the three vertices of this triangle are affinely
    /// dependent (colinear or coincident).
    pub fn is_affinely_dependent(&self) -> bool {
        let p1p2 = self.b - self.a;
        let p1p3 = self.c - self.a;

        let sqnorm = p1p2.cross(&p1p3).norm_squared();
        let max_side = p1p2.norm_squared().max(p1p3.norm_squared());

        sqnorm <= crate::math::DEFAULT_EPSILON * crate::math::DEFAULT_EPSILON * max_side * max_side
    }

    /// Computes the local-space AABB of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points([&self.a, &self.b, &self.c])
    }

    /// Projects a point on this triangle and reports where the projection
    /// landed.
    pub fn project_local_point_and_get_location(
        &self,
        pt: &Point<Real>,
    ) -> (Point<Real>, TrianglePointLocation) {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let ab_ap = ab.dot(&ap);
        let ac_ap = ac.dot(&ap);

        if ab_ap <= 0.0 && ac_ap <= 0.0 {
            // Voronoï region of `a`.
            return (a, TrianglePointLocation::OnVertex(0));
        }

        let bp = pt - b;
        let ab_bp = ab.dot(&bp);
        let ac_bp = ac.dot(&bp);

        if ab_bp >= 0.0 && ac_bp <= ab_bp {
            // Voronoï region of `b`.
            return (b, TrianglePointLocation::OnVertex(1));
        }

        let cp = pt - c;
        let ab_cp = ab.dot(&cp);
        let ac_cp = ac.dot(&cp);

        if ac_cp >= 0.0 && ab_cp <= ac_cp {
            // Voronoï region of `c`.
            return (c, TrianglePointLocation::OnVertex(2));
        }

        let n = ab.cross(&ac);

        let vc = n.dot(&ab.cross(&ap));
        if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
            // Voronoï region of `ab`.
            let v = ab_ap / (ab_ap - ab_bp);
            let bcoords = [1.0 - v, v];
            return (a + ab * v, TrianglePointLocation::OnEdge(0, bcoords));
        }

        let vb = -n.dot(&ac.cross(&cp));
        if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
            // Voronoï region of `ac`.
            let w = ac_ap / (ac_ap - ac_cp);
            let bcoords = [1.0 - w, w];
            return (a + ac * w, TrianglePointLocation::OnEdge(2, bcoords));
        }

        let bc = c - b;
        let va = n.dot(&bc.cross(&bp));
        if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
            // Voronoï region of `bc`.
            let w = bc.dot(&bp) / bc.norm_squared();
            let bcoords = [1.0 - w, w];
            return (b + bc * w, TrianglePointLocation::OnEdge(1, bcoords));
        }

        // Voronoï region of the face.
        let denom = va + vb + vc;
        if denom != 0.0 {
            let denom = 1.0 / denom;
            let v = vb * denom;
            let w = vc * denom;
            let bcoords = [1.0 - v - w, v, w];
            let res = a + ab * v + ac * w;

            return (res, TrianglePointLocation::OnFace(bcoords));
        }

        // The triangle is degenerate: fall back to the closest edge.
        let (proj_ab, uv_ab) = utils::project_point_on_segment(&a, &b, pt);
        let (proj_bc, uv_bc) = utils::project_point_on_segment(&b, &c, pt);
        let (proj_ac, uv_ac) = utils::project_point_on_segment(&a, &c, pt);

        let d_ab = (proj_ab - pt).norm_squared();
        let d_bc = (proj_bc - pt).norm_squared();
        let d_ac = (proj_ac - pt).norm_squared();

        if d_ab <= d_bc && d_ab <= d_ac {
            (proj_ab, TrianglePointLocation::OnEdge(0, uv_ab))
        } else if d_bc <= d_ac {
            (proj_bc, TrianglePointLocation::OnEdge(1, uv_bc))
        } else {
            (proj_ac, TrianglePointLocation::OnEdge(2, uv_ac))
        }
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let d1 = self.a.coords.dot(dir);
        let d2 = self.b.coords.dot(dir);
        let d3 = self.c.coords.dot(dir);

        if d1 > d2 {
            if d1 > d3 {
                self.a
            } else {
                self.c
            }
        } else if d2 > d3 {
            self.b
        } else {
            self.c
        }
    }
}

impl PointQuery for Triangle {
    #[inline]
    fn project_local_point(&self, pt: &Point<Real>, _solid: bool) -> PointProjection {
        let (proj, _) = self.project_local_point_and_get_location(pt);
        PointProjection::new(relative_eq!(proj, *pt), proj)
    }
}

#[cfg(test)]
mod test {
    use super::{Triangle, TrianglePointLocation};
    use crate::math::Point;

    #[test]
    fn projection_locations() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        );

        let (proj, loc) = tri.project_local_point_and_get_location(&Point::new(-1.0, -1.0, 0.0));
        assert_eq!(proj, Point::new(0.0, 0.0, 0.0));
        assert!(matches!(loc, TrianglePointLocation::OnVertex(0)));

        let (proj, loc) = tri.project_local_point_and_get_location(&Point::new(1.0, -1.0, 0.0));
        assert_eq!(proj, Point::new(1.0, 0.0, 0.0));
        assert!(matches!(loc, TrianglePointLocation::OnEdge(0, _)));

        let (proj, loc) = tri.project_local_point_and_get_location(&Point::new(0.5, 0.5, 1.0));
        assert_eq!(proj, Point::new(0.5, 0.5, 0.0));
        assert!(matches!(loc, TrianglePointLocation::OnFace(_)));
    }
}
