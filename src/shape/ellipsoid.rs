//! Support mapping based Ellipsoid shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// An ellipsoid centered at the origin of its local frame, with one radius per
/// coordinate axis.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipsoid {
    /// The radii of the ellipsoid along each local axis.
    pub radii: Vector<Real>,
}

impl Ellipsoid {
    /// Creates a new ellipsoid from its three radii.
    #[inline]
    pub fn new(radii: Vector<Real>) -> Ellipsoid {
        assert!(radii.iter().all(|r| r.is_sign_positive()));
        Ellipsoid { radii }
    }

    /// Computes the local-space AABB of this ellipsoid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(self.radii);
        Aabb::new(-half_extents, half_extents)
    }
}

impl SupportMap for Ellipsoid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Support of the image of the unit ball under the diagonal scaling by
        // the radii: pᵢ = radiiᵢ² dᵢ / ‖radii ∘ d‖.
        let scaled = self.radii.component_mul(dir);
        let norm = scaled.norm();

        if norm <= crate::math::DEFAULT_EPSILON {
            Point::origin()
        } else {
            Point::from(
                self.radii
                    .component_mul(&scaled)
                    .unscale(norm),
            )
        }
    }
}
