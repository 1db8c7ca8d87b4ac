//! Axis-aligned bounding boxes.

use crate::bounding_volume::BoundingSphere;
use crate::math::{Isometry, Point, Real, Vector};
use crate::utils::IsometryOps;

/// An axis-aligned bounding box.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Aabb {
    /// The minimum coordinates of this AABB.
    pub mins: Point<Real>,
    /// The maximum coordinates of this AABB.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// `mins` must be componentwise smaller than or equal to `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` set to `+∞` and `maxs` to `-∞`.
    ///
    /// Useful as the neutral element of `merged`.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::from(Vector::repeat(Real::MAX)),
            Point::from(Vector::repeat(-Real::MAX)),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates the smallest AABB enclosing the given set of points.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.mins = result.mins.inf(pt);
            result.maxs = result.maxs.sup(pt);
        }

        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The radius of the smallest sphere centered at `self.center()` and
    /// enclosing this AABB.
    #[inline]
    pub fn radius(&self) -> Real {
        self.half_extents().norm()
    }

    /// The smallest sphere enclosing this AABB.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.radius())
    }

    /// The AABB of `self` transformed by the rigid transform `m`.
    ///
    /// The result encloses the rotated box exactly (it is generally larger
    /// than the rotated box itself).
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let ls_center = self.center();
        let center = m * ls_center;
        let ws_half_extents = m.absolute_transform_vector(&self.half_extents());

        Aabb::from_half_extents(center, ws_half_extents)
    }

    /// The AABB of `self` translated by `dir`, without rotation.
    #[inline]
    pub fn translated(&self, dir: &Vector<Real>) -> Self {
        Aabb::new(self.mins + dir, self.maxs + dir)
    }

    /// Enlarges this AABB by `amount` on all sides.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Self {
        Aabb::new(
            self.mins - Vector::repeat(amount),
            self.maxs + Vector::repeat(amount),
        )
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Self {
        Aabb::new(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs))
    }

    /// Tests whether this AABB intersects `other`.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.mins.x <= other.maxs.x
            && other.mins.x <= self.maxs.x
            && self.mins.y <= other.maxs.y
            && other.mins.y <= self.maxs.y
            && self.mins.z <= other.maxs.z
            && other.mins.z <= self.maxs.z
    }

    /// Tests whether this AABB contains the point `pt`.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        pt.x >= self.mins.x
            && pt.x <= self.maxs.x
            && pt.y >= self.mins.y
            && pt.y <= self.maxs.y
            && pt.z >= self.mins.z
            && pt.z <= self.maxs.z
    }

    /// Tests whether this AABB contains `other`.
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        self.contains_local_point(&other.mins) && self.contains_local_point(&other.maxs)
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.maxs - self.mins;
        extents.x * extents.y * extents.z
    }
}
