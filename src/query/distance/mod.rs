//! Distance computation between pairs of shapes, in the local frame of the
//! first shape.

pub use self::distance_ball_ball::distance_ball_ball;
pub use self::distance_halfspace_support_map::{
    distance_halfspace_support_map, distance_support_map_halfspace,
};
pub use self::distance_plane_support_map::{
    distance_plane_support_map, distance_support_map_plane,
};
pub use self::distance_support_map_support_map::{
    distance_support_map_support_map, distance_support_map_support_map_with_params,
    SupportMapDistance,
};

mod distance_ball_ball;
mod distance_halfspace_support_map;
mod distance_plane_support_map;
mod distance_support_map_support_map;
