//! Plane shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector};

/// An infinite plane: the set of points `x` such that `normal · x = offset`.
///
/// Unlike [`HalfSpace`](crate::shape::HalfSpace), a plane is a two-sided
/// surface with no interior: penetration is measured against the surface from
/// whichever side the other shape lies on.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// The unit normal of the plane.
    pub normal: UnitVector<Real>,
    /// The signed offset of the plane along `normal`.
    pub offset: Real,
}

impl Plane {
    /// Builds a new plane from its unit normal and offset.
    #[inline]
    pub fn new(normal: UnitVector<Real>, offset: Real) -> Plane {
        Plane { normal, offset }
    }

    /// The signed distance from `pt` to this plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// The projection of `pt` onto this plane.
    #[inline]
    pub fn project_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - *self.normal * self.signed_distance(pt)
    }

    /// Computes the local-space AABB of this plane.
    ///
    /// A plane is unbounded, so this covers the whole space.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let max = Point::from(Vector::repeat(Real::MAX));
        Aabb::new(-max, max)
    }
}
