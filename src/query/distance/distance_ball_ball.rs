use crate::math::{Isometry, Point, Real};
use crate::shape::Ball;

/// Distance between two balls, together with the witness points realizing
/// it, in the local frame of the first ball.
///
/// The distance is exact: `max(0, ‖c₂ − c₁‖ − r₁ − r₂)`. The witness points
/// are meaningless when the balls overlap.
#[inline]
pub fn distance_ball_ball(
    pos12: &Isometry<Real>,
    b1: &Ball,
    b2: &Ball,
) -> (Real, Point<Real>, Point<Real>) {
    let center2_1 = pos12.translation.vector;
    let distance_centers = center2_1.norm();
    let distance = (distance_centers - b1.radius - b2.radius).max(0.0);

    if distance_centers > crate::math::DEFAULT_EPSILON {
        let dir = center2_1 / distance_centers;
        let point1 = Point::from(dir * b1.radius);
        let point2 = Point::from(center2_1 - dir * b2.radius);
        (distance, point1, point2)
    } else {
        (distance, Point::origin(), Point::origin())
    }
}
