use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, Vector};

impl MassProperties {
    pub(crate) fn cylinder_z_volume_unit_inertia(
        half_height: Real,
        radius: Real,
    ) -> (Real, Vector<Real>) {
        let volume = std::f64::consts::PI * radius * radius * half_height * 2.0;
        let sq_radius = radius * radius;
        let sq_height = half_height * half_height * 4.0;
        let off_principal = sq_radius / 4.0 + sq_height / 12.0;
        let principal = sq_radius / 2.0;

        (volume, Vector::new(off_principal, off_principal, principal))
    }

    /// Computes the mass properties of a cylinder aligned with the `z` axis.
    pub fn from_cylinder(density: Real, half_height: Real, radius: Real) -> Self {
        let (vol, unit_i) = Self::cylinder_z_volume_unit_inertia(half_height, radius);
        let mass = vol * density;
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}
