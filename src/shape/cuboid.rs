//! Support mapping based Cuboid shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::SupportMap;

/// A rectangular box centered at the origin of its local frame, described by
/// its half-extents along each coordinate axis.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        assert!(half_extents.iter().all(|e| e.is_sign_positive()));
        Cuboid { half_extents }
    }

    /// Computes the local-space AABB of this cuboid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(self.half_extents);
        Aabb::new(-half_extents, half_extents)
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::from(self.half_extents.zip_map(dir, |extent, dir| extent.copysign(dir)))
    }
}

impl PointQuery for Cuboid {
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        let mins = -self.half_extents;
        let maxs = self.half_extents;

        let clamped = Point::from(Vector::new(
            pt.x.clamp(mins.x, maxs.x),
            pt.y.clamp(mins.y, maxs.y),
            pt.z.clamp(mins.z, maxs.z),
        ));

        if clamped != *pt {
            return PointProjection::new(false, clamped);
        }

        if solid {
            return PointProjection::new(true, *pt);
        }

        // The point is inside: project it onto the nearest face.
        let mut best_dist = Real::MAX;
        let mut best_axis = 0;
        let mut best_side = 1.0;

        for i in 0..3 {
            let dist_max = maxs[i] - pt[i];
            let dist_min = pt[i] - mins[i];

            if dist_max < best_dist {
                best_dist = dist_max;
                best_axis = i;
                best_side = 1.0;
            }

            if dist_min < best_dist {
                best_dist = dist_min;
                best_axis = i;
                best_side = -1.0;
            }
        }

        let mut proj = *pt;
        proj[best_axis] = self.half_extents[best_axis] * best_side;
        PointProjection::new(true, proj)
    }
}
