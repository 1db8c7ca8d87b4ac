//! Contact computation between pairs of shapes, in the local frame of the
//! first shape.

pub use self::contact::Contact;
pub use self::contact_ball_ball::contact_ball_ball;
pub use self::contact_ball_point_projectable::{
    contact_ball_point_projectable, contact_point_projectable_ball,
};
pub use self::contact_cuboid_cuboid::{contact_cuboid_cuboid, contact_manifold_cuboid_cuboid};
pub use self::contact_halfspace_support_map::{
    contact_halfspace_support_map, contact_support_map_halfspace,
};
pub use self::contact_plane_support_map::{contact_plane_support_map, contact_support_map_plane};
pub use self::contact_support_map_support_map::{
    contact_support_map_support_map, contact_support_map_support_map_with_params,
};

mod contact;
mod contact_ball_ball;
mod contact_ball_point_projectable;
mod contact_cuboid_cuboid;
mod contact_halfspace_support_map;
mod contact_plane_support_map;
mod contact_support_map_support_map;
