use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, Vector};

impl MassProperties {
    pub(crate) fn ball_volume_unit_inertia(radius: Real) -> (Real, Vector<Real>) {
        let volume = std::f64::consts::PI * radius * radius * radius * 4.0 / 3.0;
        let i = radius * radius * 2.0 / 5.0;

        (volume, Vector::repeat(i))
    }

    /// Computes the mass properties of a ball.
    pub fn from_ball(density: Real, radius: Real) -> Self {
        let (vol, unit_i) = Self::ball_volume_unit_inertia(radius);
        let mass = vol * density;
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}
