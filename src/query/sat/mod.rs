//! Separating-axis tests for box pairs.

pub use self::sat_cuboid_cuboid::{
    cuboid_cuboid_compute_separation_wrt_local_line, cuboid_cuboid_find_local_separating_edge_twoway,
    cuboid_cuboid_find_local_separating_normal_oneway,
};

mod sat_cuboid_cuboid;
