//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::closest_points_segment_segment::closest_points_segment_segment;
pub use self::isometry_ops::IsometryOps;
pub use self::segment_projection::project_point_on_segment;

mod ccw_face_normal;
mod closest_points_segment_segment;
mod isometry_ops;
mod segment_projection;
