mod ball_ball;
mod cuboid_cuboid;
mod cylinder_capsule;
mod gjk_cache;
mod halfspace_plane;
mod shape_properties;
mod symmetry;
