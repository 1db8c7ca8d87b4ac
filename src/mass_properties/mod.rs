//! Mass, center of mass, and inertia tensors of the shape primitives.

pub use self::mass_properties::MassProperties;
pub use self::mass_properties_convex_polyhedron::{
    convex_signed_volume_and_center_of_mass, tetrahedron_signed_volume,
};

mod mass_properties;
mod mass_properties_ball;
mod mass_properties_capsule;
mod mass_properties_cone;
mod mass_properties_convex_polyhedron;
mod mass_properties_cuboid;
mod mass_properties_cylinder;
mod mass_properties_ellipsoid;
