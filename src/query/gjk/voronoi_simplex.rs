use crate::math::{Point, Real};
use crate::query::gjk::{self, CSOPoint};
use crate::shape::{Triangle, TrianglePointLocation};
use crate::utils;

/// A simplex of dimension up to 3 using Voronoï regions for computing point
/// projections.
#[derive(Clone, Debug)]
pub struct VoronoiSimplex {
    prev_vertices: [usize; 4],
    prev_dim: usize,
    prev_proj: [Real; 3],

    vertices: [CSOPoint; 4],
    proj: [Real; 3],
    dim: usize,
}

impl Default for VoronoiSimplex {
    fn default() -> Self {
        Self::new()
    }
}

impl VoronoiSimplex {
    /// Creates a new empty simplex.
    pub fn new() -> VoronoiSimplex {
        VoronoiSimplex {
            prev_vertices: [0, 1, 2, 3],
            prev_proj: [0.0; 3],
            prev_dim: 0,
            vertices: [CSOPoint::origin(); 4],
            proj: [0.0; 3],
            dim: 0,
        }
    }

    /// Swap two vertices of this simplex.
    pub fn swap(&mut self, i1: usize, i2: usize) {
        self.vertices.swap(i1, i2);
        self.prev_vertices.swap(i1, i2);
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.prev_dim = 0;
        self.dim = 0;
        self.vertices[0] = pt;
    }

    /// Add a point to this simplex.
    ///
    /// Returns `false` (and leaves the simplex unchanged) if the point would
    /// degenerate the simplex: a duplicate vertex, a point on the line of a
    /// segment, on the plane of a triangle, or producing a flat tetrahedron.
    pub fn add_point(&mut self, pt: CSOPoint) -> bool {
        self.prev_dim = self.dim;
        self.prev_proj = self.proj;
        self.prev_vertices = [0, 1, 2, 3];

        for i in 0..self.dim + 1 {
            if (self.vertices[i].point - pt.point).norm_squared() < gjk::eps_tol() {
                return false;
            }
        }

        match self.dim {
            1 => {
                let ab = self.vertices[1] - self.vertices[0];
                let ap = pt.point - self.vertices[0].point;

                if ab.cross(&ap).norm_squared() < gjk::eps_tol() * ab.norm_squared() {
                    return false;
                }
            }
            2 => {
                let ab = self.vertices[1] - self.vertices[0];
                let ac = self.vertices[2] - self.vertices[0];
                let ap = pt.point - self.vertices[0].point;
                let n = ab.cross(&ac);

                if n.dot(&ap).abs() < gjk::eps_tol() * n.norm() {
                    return false;
                }
            }
            _ => {}
        }

        self.dim += 1;
        self.vertices[self.dim] = pt;
        true
    }

    /// Retrieves the barycentric coordinate associated to the `i`-th vertex
    /// by the last call to `project_origin_and_reduce`.
    pub fn proj_coord(&self, i: usize) -> Real {
        assert!(i <= self.dim, "Index out of bounds.");
        self.proj[i]
    }

    /// The i-th point of this simplex.
    pub fn point(&self, i: usize) -> &CSOPoint {
        assert!(i <= self.dim, "Index out of bounds.");
        &self.vertices[i]
    }

    /// Retrieves the barycentric coordinate associated to the `i`-th vertex
    /// before the last call to `project_origin_and_reduce`.
    pub fn prev_proj_coord(&self, i: usize) -> Real {
        assert!(i <= self.prev_dim, "Index out of bounds.");
        self.prev_proj[i]
    }

    /// The i-th point of the simplex before the last call to
    /// `project_origin_and_reduce`.
    pub fn prev_point(&self, i: usize) -> &CSOPoint {
        assert!(i <= self.prev_dim, "Index out of bounds.");
        &self.vertices[self.prev_vertices[i]]
    }

    /// Projects the origin on the boundary of this simplex and reduces `self`
    /// to the smallest subsimplex containing that projection.
    ///
    /// Returns the projection, or `Point::origin()` if the origin lies inside
    /// of the simplex. The state of the simplex before the projection is
    /// saved, and can be retrieved using the methods prefixed by `prev_`.
    pub fn project_origin_and_reduce(&mut self) -> Point<Real> {
        if self.dim == 0 {
            self.proj[0] = 1.0;
            self.vertices[0].point
        } else if self.dim == 1 {
            let (proj, bcoords) = utils::project_point_on_segment(
                &self.vertices[0].point,
                &self.vertices[1].point,
                &Point::origin(),
            );

            if bcoords[1] == 0.0 {
                self.proj[0] = 1.0;
                self.dim = 0;
            } else if bcoords[0] == 0.0 {
                self.proj[0] = 1.0;
                self.swap(0, 1);
                self.dim = 0;
            } else {
                self.proj[0] = bcoords[0];
                self.proj[1] = bcoords[1];
            }

            proj
        } else if self.dim == 2 {
            self.reduce_to_triangle_projection()
        } else {
            assert!(self.dim == 3);
            self.reduce_tetrahedron()
        }
    }

    // Projects the origin on the triangle spanned by the first three vertices
    // and reduces the simplex to the smallest sub-simplex containing the
    // projection. Assumes `self.dim == 2`.
    fn reduce_to_triangle_projection(&mut self) -> Point<Real> {
        let tri = Triangle::new(
            self.vertices[0].point,
            self.vertices[1].point,
            self.vertices[2].point,
        );
        let (proj, location) = tri.project_local_point_and_get_location(&Point::origin());

        match location {
            TrianglePointLocation::OnVertex(i) => {
                self.swap(0, i as usize);
                self.proj[0] = 1.0;
                self.dim = 0;
            }
            TrianglePointLocation::OnEdge(0, coords) => {
                self.proj[0] = coords[0];
                self.proj[1] = coords[1];
                self.dim = 1;
            }
            TrianglePointLocation::OnEdge(1, coords) => {
                self.swap(0, 2);
                self.proj[0] = coords[1];
                self.proj[1] = coords[0];
                self.dim = 1;
            }
            TrianglePointLocation::OnEdge(2, coords) => {
                self.swap(1, 2);
                self.proj[0] = coords[0];
                self.proj[1] = coords[1];
                self.dim = 1;
            }
            TrianglePointLocation::OnEdge(..) => unreachable!(),
            TrianglePointLocation::OnFace(coords) => {
                self.proj = coords;
            }
        }

        proj
    }

    // Reduction of a full tetrahedron: find the face whose Voronoï region
    // contains the origin, or report that the origin is enclosed.
    fn reduce_tetrahedron(&mut self) -> Point<Real> {
        // Each entry is a face (three vertex indices) and the opposite
        // vertex, tested in canonical order.
        const FACES: [([usize; 3], usize); 4] = [
            ([0, 1, 2], 3),
            ([0, 1, 3], 2),
            ([0, 2, 3], 1),
            ([1, 2, 3], 0),
        ];

        let mut best: Option<([usize; 3], Real)> = None;

        for (face, opp) in FACES {
            let a = self.vertices[face[0]].point;
            let b = self.vertices[face[1]].point;
            let c = self.vertices[face[2]].point;

            let mut n = (b - a).cross(&(c - a));
            // Orient the normal away from the opposite vertex.
            if n.dot(&(self.vertices[opp].point - a)) > 0.0 {
                n = -n;
            }

            // The origin can only project on faces that see it.
            if n.dot(&(-a.coords)) > 0.0 {
                let tri = Triangle::new(a, b, c);
                let (proj, _) = tri.project_local_point_and_get_location(&Point::origin());
                let dist = proj.coords.norm_squared();

                match best {
                    Some((_, best_dist)) if best_dist <= dist => {}
                    _ => best = Some((face, dist)),
                }
            }
        }

        let Some((face, _)) = best else {
            // No face separates the origin from the tetrahedron interior.
            return Point::origin();
        };

        // Bring the retained face into the first three slots, preserving
        // its vertex order.
        match face {
            [0, 1, 2] => {}
            [0, 1, 3] => self.swap(2, 3),
            [0, 2, 3] => {
                self.swap(1, 2);
                self.swap(2, 3);
            }
            [1, 2, 3] => {
                self.swap(0, 1);
                self.swap(1, 2);
                self.swap(2, 3);
            }
            _ => unreachable!(),
        }

        self.dim = 2;
        self.reduce_to_triangle_projection()
    }

    /// Compute the projection of the origin on the boundary of this simplex,
    /// without reducing the simplex.
    pub fn project_origin(&mut self) -> Point<Real> {
        if self.dim == 0 {
            self.vertices[0].point
        } else if self.dim == 1 {
            let (proj, _) = utils::project_point_on_segment(
                &self.vertices[0].point,
                &self.vertices[1].point,
                &Point::origin(),
            );
            proj
        } else if self.dim == 2 {
            let tri = Triangle::new(
                self.vertices[0].point,
                self.vertices[1].point,
                self.vertices[2].point,
            );
            tri.project_local_point_and_get_location(&Point::origin()).0
        } else {
            let mut copy = self.clone();
            copy.reduce_tetrahedron()
        }
    }

    /// Tests if the given point is already a vertex of this simplex.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        for i in 0..self.dim + 1 {
            if self.vertices[i].point == *pt {
                return true;
            }
        }

        false
    }

    /// The dimension of the smallest subspace that can contain this simplex.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// The dimension of the simplex before the last call to
    /// `project_origin_and_reduce`.
    pub fn prev_dimension(&self) -> usize {
        self.prev_dim
    }

    /// The maximum squared length of the vertices of this simplex.
    pub fn max_sq_len(&self) -> Real {
        let mut max_sq_len = 0.0;

        for i in 0..self.dim + 1 {
            let norm = self.vertices[i].point.coords.norm_squared();

            if norm > max_sq_len {
                max_sq_len = norm
            }
        }

        max_sq_len
    }
}
