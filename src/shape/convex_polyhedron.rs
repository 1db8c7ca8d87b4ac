//! Convex polyhedron described by its vertices and triangulated faces.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{SupportMap, Triangle};

/// A convex polyhedron described by an explicit set of vertices and a
/// triangulated face index buffer.
///
/// The convexity of the input is not verified: querying a non-convex vertex
/// set produces meaningless results. Degeneracy is verified: construction
/// fails unless the vertex set contains at least four non-coplanar points.
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPolyhedron {
    points: Vec<Point<Real>>,
    faces: Vec<[u32; 3]>,
}

impl ConvexPolyhedron {
    /// Attempts to create a new convex polyhedron from the vertices and the
    /// triangulated faces of a convex mesh.
    ///
    /// Returns `None` if fewer than four vertices are given, if a face index
    /// is out of bounds, or if all vertices are coplanar.
    pub fn from_convex_mesh(
        points: Vec<Point<Real>>,
        faces: &[[u32; 3]],
    ) -> Option<ConvexPolyhedron> {
        if points.len() < 4 || faces.is_empty() {
            return None;
        }

        for face in faces {
            if face.iter().any(|i| *i as usize >= points.len()) {
                return None;
            }
        }

        if !points.iter().all(|pt| pt.coords.iter().all(|e| e.is_finite())) {
            return None;
        }

        // Reject coplanar vertex sets: look for one vertex significantly off
        // the plane spanned by the first non-degenerate triple.
        let span = points
            .iter()
            .skip(1)
            .find(|pt| (**pt - points[0]).norm_squared() > DEFAULT_EPSILON)?;
        let d1 = *span - points[0];
        let second = points.iter().find(|pt| {
            d1.cross(&(**pt - points[0])).norm_squared()
                > DEFAULT_EPSILON * d1.norm_squared()
        })?;
        let normal = d1.cross(&(*second - points[0]));
        let _off_plane = points.iter().find(|pt| {
            (**pt - points[0]).dot(&normal).abs()
                > DEFAULT_EPSILON.sqrt() * normal.norm()
        })?;

        Some(ConvexPolyhedron {
            points,
            faces: faces.to_vec(),
        })
    }

    /// The vertices of this convex polyhedron.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The triangulated faces of this convex polyhedron.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// The `i`-th face of this polyhedron as a triangle.
    #[inline]
    pub fn face_triangle(&self, i: usize) -> Triangle {
        let idx = self.faces[i];
        Triangle::new(
            self.points[idx[0] as usize],
            self.points[idx[1] as usize],
            self.points[idx[2] as usize],
        )
    }

    /// Computes the local-space AABB of this polyhedron.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.points.iter())
    }
}

impl SupportMap for ConvexPolyhedron {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Exhaustive max over the vertices. The first maximizer wins, which
        // keeps ties deterministic for equal directions.
        let mut best = 0;
        let mut best_dot = self.points[0].coords.dot(dir);

        for (i, pt) in self.points.iter().enumerate().skip(1) {
            let dot = pt.coords.dot(dir);
            if dot > best_dot {
                best = i;
                best_dot = dot;
            }
        }

        self.points[best]
    }
}

#[cfg(test)]
mod test {
    use super::ConvexPolyhedron;
    use crate::math::{Point, Vector};
    use crate::shape::SupportMap;

    fn tetrahedron() -> ConvexPolyhedron {
        let points = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ];
        let faces = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
        ConvexPolyhedron::from_convex_mesh(points, &faces).unwrap()
    }

    #[test]
    fn rejects_coplanar_points() {
        let points = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
        ];
        let faces = [[0, 1, 2], [1, 3, 2]];
        assert!(ConvexPolyhedron::from_convex_mesh(points, &faces).is_none());
    }

    #[test]
    fn support_point_is_a_vertex() {
        let poly = tetrahedron();
        let support = poly.local_support_point(&Vector::new(1.0, 0.1, 0.1));
        assert_eq!(support, Point::new(1.0, 0.0, 0.0));
    }
}
