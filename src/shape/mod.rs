//! Collision shapes supported by this crate.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_polyhedron::ConvexPolyhedron;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::ellipsoid::Ellipsoid;
pub use self::half_space::HalfSpace;
pub use self::plane::Plane;
pub use self::shape::{Shape, ShapeData, ShapeError, ShapeType};
pub use self::support_map::SupportMap;
pub use self::triangle::{Triangle, TrianglePointLocation};

mod ball;
mod capsule;
mod cone;
mod convex_polyhedron;
mod cuboid;
mod cylinder;
mod ellipsoid;
mod half_space;
mod plane;
mod shape;
mod support_map;
mod triangle;
