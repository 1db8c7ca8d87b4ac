use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, Vector};

impl MassProperties {
    pub(crate) fn ellipsoid_volume_unit_inertia(radii: Vector<Real>) -> (Real, Vector<Real>) {
        let volume = std::f64::consts::PI * radii.x * radii.y * radii.z * 4.0 / 3.0;

        let sx = radii.x * radii.x;
        let sy = radii.y * radii.y;
        let sz = radii.z * radii.z;

        (
            volume,
            Vector::new((sy + sz) / 5.0, (sx + sz) / 5.0, (sx + sy) / 5.0),
        )
    }

    /// Computes the mass properties of an ellipsoid.
    pub fn from_ellipsoid(density: Real, radii: Vector<Real>) -> Self {
        let (vol, unit_i) = Self::ellipsoid_volume_unit_inertia(radii);
        let mass = vol * density;
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}
