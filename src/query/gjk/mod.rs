//! The GJK distance algorithm and its simplex machinery.

pub use self::cso_point::CSOPoint;
pub use self::gjk::{closest_points, eps_tol, seed_simplex, GJKResult, MAX_ITERATIONS};
pub use self::simplex_descent::{intersection_simplex_descent, SimplexDescentResult};
pub use self::voronoi_simplex::VoronoiSimplex;

mod cso_point;
mod gjk;
mod simplex_descent;
mod voronoi_simplex;
