use crate::math::{Isometry, Point, Real, Vector};
use core::mem;
use na::Unit;

/// Geometric description of a contact between two shapes.
///
/// Unless stated otherwise by the function producing it, `point1` and
/// `normal1` are expressed in the local frame of the first shape, and
/// `point2` and `normal2` in the local frame of the second shape.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Contact {
    /// Position of the contact on the first shape.
    pub point1: Point<Real>,
    /// Position of the contact on the second shape.
    pub point2: Point<Real>,
    /// Contact normal, pointing outward from the first shape.
    pub normal1: Unit<Vector<Real>>,
    /// Contact normal, pointing outward from the second shape.
    ///
    /// In world space this is always `-normal1`.
    pub normal2: Unit<Vector<Real>>,
    /// Signed distance between the two contact points: negative when the
    /// shapes are penetrating, in which case `-dist` is the penetration
    /// depth.
    pub dist: Real,
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        point1: Point<Real>,
        point2: Point<Real>,
        normal1: Unit<Vector<Real>>,
        normal2: Unit<Vector<Real>>,
        dist: Real,
    ) -> Self {
        Contact {
            point1,
            point2,
            normal1,
            normal2,
            dist,
        }
    }

    /// Swaps the points and normals of this contact.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.point1, &mut self.point2);
        mem::swap(&mut self.normal1, &mut self.normal2);
    }

    /// Returns a new contact containing the swapped points and normals of `self`.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Transform the points and normals from this contact by
    /// the given transformations.
    #[inline]
    pub fn transform_by_mut(&mut self, pos1: &Isometry<Real>, pos2: &Isometry<Real>) {
        self.point1 = pos1 * self.point1;
        self.point2 = pos2 * self.point2;
        self.normal1 = pos1 * self.normal1;
        self.normal2 = pos2 * self.normal2;
    }
}
