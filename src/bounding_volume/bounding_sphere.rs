//! Bounding sphere.

use crate::math::{Isometry, Point, Real};

/// A bounding sphere: a center and a radius enclosing a shape.
///
/// Cheap world-space overbounds can be derived from the local bounding sphere
/// of a shape under any rigid transform: the world center is the transformed
/// local center and the radius is unchanged.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of this bounding sphere.
    pub center: Point<Real>,
    /// The radius of this bounding sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> Self {
        BoundingSphere { center, radius }
    }

    /// The center of this bounding sphere.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The radius of this bounding sphere.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// This bounding sphere transformed by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }

    /// Tests whether this bounding sphere intersects `other`.
    #[inline]
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let sum_radius = self.radius + other.radius;
        na::distance_squared(&self.center, &other.center) <= sum_radius * sum_radius
    }
}
