//! Point projection on the shape primitives.

pub use self::point_query::{PointProjection, PointQuery};

mod point_query;
