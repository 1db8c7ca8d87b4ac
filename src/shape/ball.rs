use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use na::Unit;

/// A ball shape centered at the origin of its local frame.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        assert!(radius.is_sign_positive());
        Ball { radius }
    }

    /// Computes the local-space AABB of this ball.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(Vector::repeat(self.radius));
        Aabb::new(-half_extents, half_extents)
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // The support of a ball at the zero direction is conventionally its
        // center.
        if let Some(dir) = Unit::try_new(*dir, 0.0) {
            self.local_support_point_toward(&dir)
        } else {
            Point::origin()
        }
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }
}
