//! Support mapping based Capsule shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery};
use crate::shape::SupportMap;
use na::Unit;

/// A capsule: the set of points at distance at most `radius` from the segment
/// joining `(0, 0, -half_height)` to `(0, 0, half_height)`.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The half-height of the inner segment of the capsule, along the local
    /// `z` axis.
    pub half_height: Real,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule.
    ///
    /// # Arguments:
    /// * `half_height` - half the length of the capsule's inner segment along
    ///   the `z` axis.
    /// * `radius` - the radius of the capsule.
    pub fn new(half_height: Real, radius: Real) -> Capsule {
        assert!(half_height.is_sign_positive() && radius.is_sign_positive());

        Capsule {
            half_height,
            radius,
        }
    }

    /// The endpoint of the inner segment with negative `z` coordinate.
    #[inline]
    pub fn segment_a(&self) -> Point<Real> {
        Point::new(0.0, 0.0, -self.half_height)
    }

    /// The endpoint of the inner segment with positive `z` coordinate.
    #[inline]
    pub fn segment_b(&self) -> Point<Real> {
        Point::new(0.0, 0.0, self.half_height)
    }

    /// Computes the local-space AABB of this capsule.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::new(
            self.radius,
            self.radius,
            self.half_height + self.radius,
        );
        Aabb::new(-half_extents, half_extents)
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Ball support shifted to whichever cap the direction selects.
        let cap = Vector::new(0.0, 0.0, self.half_height.copysign(dir.z));

        if let Some(dir) = Unit::try_new(*dir, 0.0) {
            Point::from(cap + *dir * self.radius)
        } else {
            Point::from(cap)
        }
    }
}

impl PointQuery for Capsule {
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection {
        // Closest point on the inner segment.
        let z = pt.z.clamp(-self.half_height, self.half_height);
        let on_axis = Point::new(0.0, 0.0, z);
        let dproj = pt - on_axis;

        if let Some((dir, dist)) = Unit::try_new_and_get(dproj, crate::math::DEFAULT_EPSILON) {
            let inside = dist <= self.radius;
            if solid && inside {
                PointProjection::new(true, *pt)
            } else {
                PointProjection::new(inside, on_axis + *dir * self.radius)
            }
        } else {
            // The point lies on the capsule axis.
            if solid {
                PointProjection::new(true, *pt)
            } else {
                let dist_to_cap = self.half_height + self.radius - pt.z.abs();
                if dist_to_cap < self.radius {
                    let proj =
                        Point::new(0.0, 0.0, (self.half_height + self.radius).copysign(pt.z));
                    PointProjection::new(true, proj)
                } else {
                    PointProjection::new(true, Point::new(self.radius, 0.0, z))
                }
            }
        }
    }
}
