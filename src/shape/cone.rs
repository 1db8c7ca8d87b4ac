//! Support mapping based Cone shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::SupportMap;
use crate::utils;
use num::Zero;

/// Cone shape with its principal axis aligned with the `z` axis, its apex at
/// `(0, 0, half_height)` and its base disc at `z = -half_height`.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    /// The half-height of the cone.
    pub half_height: Real,
    /// The base radius of the cone.
    pub radius: Real,
}

impl Cone {
    /// Creates a new cone.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cone along the `z` axis.
    /// * `radius` - the radius of the cone base.
    pub fn new(half_height: Real, radius: Real) -> Cone {
        assert!(half_height.is_sign_positive() && radius.is_sign_positive());

        Cone {
            half_height,
            radius,
        }
    }

    /// The apex of this cone.
    #[inline]
    pub fn apex(&self) -> Point<Real> {
        Point::new(0.0, 0.0, self.half_height)
    }

    /// Computes the local-space AABB of this cone.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::new(self.radius, self.radius, self.half_height);
        Aabb::new(-half_extents, half_extents)
    }
}

impl SupportMap for Cone {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut vres = *dir;

        vres.z = 0.0;

        if vres.normalize_mut().is_zero() {
            vres = na::zero();
            vres.z = self.half_height.copysign(dir.z);
        } else {
            vres *= self.radius;
            vres.z = -self.half_height;

            // Keep the base rim point unless the apex is strictly better.
            if dir.dot(&vres) < dir.z * self.half_height {
                vres = na::zero();
                vres.z = self.half_height;
            }
        }

        Point::from(vres)
    }
}

impl PointQuery for Cone {
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        // Project on the basis.
        let mut dir_from_basis_center = pt.coords.xy();
        let planar_dist_from_basis_center = dir_from_basis_center.normalize_mut();

        if planar_dist_from_basis_center <= crate::math::DEFAULT_EPSILON {
            dir_from_basis_center = na::Vector2::x();
        }

        let projection_on_basis = Point::new(pt.x, pt.y, -self.half_height);

        if pt.z < -self.half_height && planar_dist_from_basis_center <= self.radius {
            // The projection is on the basis.
            return PointProjection::new(false, projection_on_basis);
        }

        // Project on the basis circle.
        let proj2d = dir_from_basis_center * self.radius;
        let projection_on_basis_circle = Point::new(proj2d[0], proj2d[1], -self.half_height);

        // Project on the conic side.
        let apex_point = self.apex();
        let (proj_on_side, _) =
            utils::project_point_on_segment(&apex_point, &projection_on_basis_circle, pt);
        let conic_side_segment_dir = projection_on_basis_circle - apex_point;

        let apex_to_basis_center = Vector::new(0.0, 0.0, -2.0 * self.half_height);

        // Now determine if the point is inside of the cone.
        if pt.z >= -self.half_height
            && pt.z <= self.half_height
            && conic_side_segment_dir
                .cross(&(pt - apex_point))
                .dot(&conic_side_segment_dir.cross(&apex_to_basis_center))
                >= 0.0
        {
            if solid {
                PointProjection::new(true, *pt)
            } else {
                // We are inside of the cone, so the correct projection is
                // either on the basis of the cone, or on the conic side.
                if (proj_on_side - pt).norm_squared() > (projection_on_basis - pt).norm_squared() {
                    PointProjection::new(true, projection_on_basis)
                } else {
                    PointProjection::new(true, proj_on_side)
                }
            }
        } else {
            // We are outside of the cone.
            PointProjection::new(false, proj_on_side)
        }
    }
}
