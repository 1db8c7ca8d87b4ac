//! Support mapping based Cylinder shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::SupportMap;
use num::Zero;

/// Cylinder shape with its principal axis aligned with the `z` axis.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The half-height of the cylinder.
    pub half_height: Real,
    /// The radius of the cylinder.
    pub radius: Real,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `z` axis.
    /// * `radius` - the radius of the cylinder.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        assert!(half_height.is_sign_positive() && radius.is_sign_positive());

        Cylinder {
            half_height,
            radius,
        }
    }

    /// Computes the local-space AABB of this cylinder.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::new(self.radius, self.radius, self.half_height);
        Aabb::new(-half_extents, half_extents)
    }
}

impl SupportMap for Cylinder {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut vres = *dir;

        vres.z = 0.0;

        if vres.normalize_mut().is_zero() {
            vres = na::zero()
        } else {
            vres *= self.radius;
        }

        vres.z = self.half_height.copysign(dir.z);

        Point::from(vres)
    }
}

impl PointQuery for Cylinder {
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        // Project on the basis.
        let mut dir_from_basis_center = pt.coords.xy();
        let planar_dist_from_basis_center = dir_from_basis_center.normalize_mut();

        if planar_dist_from_basis_center <= crate::math::DEFAULT_EPSILON {
            dir_from_basis_center = na::Vector2::x();
        }

        let proj2d = dir_from_basis_center * self.radius;

        if pt.z >= -self.half_height
            && pt.z <= self.half_height
            && planar_dist_from_basis_center <= self.radius
        {
            // The point is inside of the cylinder.
            if solid {
                PointProjection::new(true, *pt)
            } else {
                let dist_to_top = self.half_height - pt.z;
                let dist_to_bottom = pt.z - (-self.half_height);
                let dist_to_side = self.radius - planar_dist_from_basis_center;

                if dist_to_top < dist_to_bottom && dist_to_top < dist_to_side {
                    let projection_on_top = Point::new(pt.x, pt.y, self.half_height);
                    PointProjection::new(true, projection_on_top)
                } else if dist_to_bottom < dist_to_top && dist_to_bottom < dist_to_side {
                    let projection_on_bottom = Point::new(pt.x, pt.y, -self.half_height);
                    PointProjection::new(true, projection_on_bottom)
                } else {
                    let projection_on_side = Point::new(proj2d[0], proj2d[1], pt.z);
                    PointProjection::new(true, projection_on_side)
                }
            }
        } else {
            // The point is outside of the cylinder.
            if pt.z > self.half_height {
                if planar_dist_from_basis_center <= self.radius {
                    PointProjection::new(false, Point::new(pt.x, pt.y, self.half_height))
                } else {
                    PointProjection::new(false, Point::new(proj2d[0], proj2d[1], self.half_height))
                }
            } else if pt.z < -self.half_height {
                if planar_dist_from_basis_center <= self.radius {
                    PointProjection::new(false, Point::new(pt.x, pt.y, -self.half_height))
                } else {
                    PointProjection::new(false, Point::new(proj2d[0], proj2d[1], -self.half_height))
                }
            } else {
                // Project on the side.
                PointProjection::new(false, Point::new(proj2d[0], proj2d[1], pt.z))
            }
        }
    }
}
