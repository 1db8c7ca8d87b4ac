//! Outcome of collision and distance queries.

use crate::math::{Point, Real, Vector};
use smallvec::SmallVec;

/// A single contact point produced by a collision query, in world
/// coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPoint {
    /// The contact position.
    pub position: Point<Real>,
    /// The unit contact normal, pointing from the first shape toward the
    /// second one.
    ///
    /// When the contact configuration is degenerate (two concentric balls,
    /// for example) the normal is the zero vector.
    pub normal: Vector<Real>,
    /// The penetration depth at this contact, zero when the shapes are
    /// exactly touching.
    pub depth: Real,
}

/// The outcome of a collision query.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CollisionResult {
    colliding: bool,
    contacts: SmallVec<[ContactPoint; 4]>,
    /// The warm-start direction to feed back into the next request's
    /// `cached_gjk_guess` when exploiting temporal coherence. Expressed in
    /// the local frame of the first shape.
    pub cached_gjk_guess: Option<Vector<Real>>,
}

impl CollisionResult {
    /// A result with no contact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the two shapes are colliding.
    #[inline]
    pub fn is_collision(&self) -> bool {
        self.colliding
    }

    /// The contact points computed by the query.
    ///
    /// Empty if the shapes do not collide, or when contact computation was
    /// disabled by the request.
    #[inline]
    pub fn contacts(&self) -> &[ContactPoint] {
        &self.contacts
    }

    /// The number of contacts.
    #[inline]
    pub fn num_contacts(&self) -> usize {
        self.contacts.len()
    }

    // Records a collision without contact details.
    pub(crate) fn mark_collision(&mut self) {
        self.colliding = true;
    }

    pub(crate) fn push_contact(&mut self, contact: ContactPoint, max_contacts: usize) {
        self.colliding = true;
        if self.contacts.len() < max_contacts {
            self.contacts.push(contact);
        }
    }
}

/// The outcome of a distance query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceResult {
    /// The separation distance between the two shapes.
    ///
    /// A negative value means the solver could only prove that the shapes
    /// overlap; switch to a collision query to obtain the penetration depth.
    pub distance: Real,
    /// The witness points realizing the distance, in world coordinates, if
    /// requested and available.
    pub nearest_points: Option<(Point<Real>, Point<Real>)>,
    /// Set when the computed distance is less accurate than the requested
    /// tolerance.
    pub tolerance_saturated: bool,
}

impl DistanceResult {
    /// Initializes a distance result with no witness points.
    pub fn new(distance: Real) -> Self {
        DistanceResult {
            distance,
            nearest_points: None,
            tolerance_saturated: false,
        }
    }
}
