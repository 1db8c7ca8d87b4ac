//! Collision and distance queries between pairs of shapes.
//!
//! The three entry points are:
//!
//! - [`collide`]: boolean collision plus contact points, normals and depths;
//! - [`distance`]: separation distance plus witness points;
//! - [`intersect_shape_triangle`]: intersection between a shape and a single
//!   triangle, for mesh-traversal callers.
//!
//! Each entry point is a pure function of the shapes, their transforms and
//! the request: no global state, no retained transforms, no allocation that
//! outlives the call.

pub use self::contact::Contact;
pub use self::dispatcher::{collide, distance};
pub use self::error::QueryError;
pub use self::point::{PointProjection, PointQuery};
pub use self::request::{CollisionRequest, DistanceRequest, GjkSolverType};
pub use self::result::{CollisionResult, ContactPoint, DistanceResult};
pub use self::shape_triangle::intersect_shape_triangle;

pub mod contact;
mod dispatcher;
pub mod distance;
pub mod epa;
mod error;
pub mod gjk;
pub mod point;
mod request;
mod result;
pub mod sat;
mod shape_triangle;
