//! Bounding volumes: axis-aligned bounding boxes and bounding spheres.

pub use self::aabb::Aabb;
pub use self::bounding_sphere::BoundingSphere;

mod aabb;
mod bounding_sphere;
