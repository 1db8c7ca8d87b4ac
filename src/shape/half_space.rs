//! Support mapping based HalfSpace shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector};

/// A half-space delimited by a plane.
///
/// The set of points `x` such that `normal · x ≤ offset` belongs to the
/// half-space.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct HalfSpace {
    /// The unit outward normal of the half-space boundary plane.
    pub normal: UnitVector<Real>,
    /// The signed offset of the boundary plane, along `normal`.
    pub offset: Real,
}

impl HalfSpace {
    /// Builds a new half-space from its outward normal and plane offset.
    #[inline]
    pub fn new(normal: UnitVector<Real>, offset: Real) -> HalfSpace {
        HalfSpace { normal, offset }
    }

    /// The signed distance from `pt` to the boundary plane.
    ///
    /// Negative inside the half-space.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// Tests whether `pt` belongs to this half-space.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        self.signed_distance(pt) <= 0.0
    }

    /// The projection of `pt` onto the boundary plane of this half-space.
    #[inline]
    pub fn project_onto_boundary(&self, pt: &Point<Real>) -> Point<Real> {
        pt - *self.normal * self.signed_distance(pt)
    }

    /// Computes the local-space AABB of this half-space.
    ///
    /// A half-space is unbounded, so this covers the whole space.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let max = Point::from(Vector::repeat(Real::MAX));
        Aabb::new(-max, max)
    }
}
