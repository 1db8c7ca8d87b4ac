use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, Vector};

impl MassProperties {
    pub(crate) fn cone_z_volume_unit_inertia(
        half_height: Real,
        radius: Real,
    ) -> (Real, Vector<Real>) {
        let volume = radius * radius * std::f64::consts::PI * half_height * 2.0 / 3.0;
        let sq_radius = radius * radius;
        let sq_height = half_height * half_height * 4.0;
        let off_principal = sq_radius * 3.0 / 20.0 + sq_height * 3.0 / 80.0;
        let principal = sq_radius * 3.0 / 10.0;

        (volume, Vector::new(off_principal, off_principal, principal))
    }

    /// Computes the mass properties of a cone aligned with the `z` axis, with
    /// its apex at `z = half_height`.
    pub fn from_cone(density: Real, half_height: Real, radius: Real) -> Self {
        let (vol, unit_i) = Self::cone_z_volume_unit_inertia(half_height, radius);
        let mass = vol * density;

        // The centroid sits a quarter of the height above the base.
        Self::new(
            Point::new(0.0, 0.0, -half_height / 2.0),
            mass,
            unit_i * mass,
        )
    }
}
