//! Configuration of collision and distance queries.

use crate::math::{Real, Vector};
use crate::query::gjk;
use crate::query::QueryError;

/// The iterative solver backend used for convex pairs without a specialized
/// routine.
///
/// Backends are value types selected per request; no global solver state
/// exists. Both backends must agree on intersection outcomes within the
/// request tolerance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GjkSolverType {
    /// GJK driven by Voronoï-region simplex projection, with exact witness
    /// points.
    #[default]
    VoronoiSimplex,
    /// GJK driven by the case-based simplex descent.
    SimplexDescent,
}

/// Configuration of a collision query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionRequest {
    /// The maximum number of contact points computed. Excess contacts are
    /// silently dropped.
    pub max_contacts: usize,
    /// Whether contact positions, normals and depths are computed, or only
    /// the boolean outcome.
    pub enable_contact: bool,
    /// The iterative solver backend used when no specialized routine exists
    /// for the shape pair.
    pub gjk_solver: GjkSolverType,
    /// Whether the GJK solver is seeded with `cached_gjk_guess`.
    pub enable_cached_gjk_guess: bool,
    /// The warm-start direction hint, as returned by a previous query
    /// through [`CollisionResult::cached_gjk_guess`], expressed in the local
    /// frame of the first shape.
    ///
    /// Exploiting it on temporally coherent queries cuts iteration counts
    /// dramatically without changing boolean outcomes.
    ///
    /// [`CollisionResult::cached_gjk_guess`]: crate::query::CollisionResult::cached_gjk_guess
    pub cached_gjk_guess: Vector<Real>,
    /// The absolute tolerance for GJK termination.
    pub distance_tolerance: Real,
}

impl Default for CollisionRequest {
    fn default() -> Self {
        CollisionRequest {
            max_contacts: 1,
            enable_contact: true,
            gjk_solver: GjkSolverType::default(),
            enable_cached_gjk_guess: false,
            cached_gjk_guess: Vector::x(),
            distance_tolerance: gjk::eps_tol(),
        }
    }
}

impl CollisionRequest {
    /// Checks that this request is well-formed.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.max_contacts < 1 {
            return Err(QueryError::InvalidRequest);
        }

        if !(self.distance_tolerance.is_finite() && self.distance_tolerance > 0.0) {
            return Err(QueryError::InvalidRequest);
        }

        Ok(())
    }
}

/// Configuration of a distance query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceRequest {
    /// Whether the witness points realizing the distance are computed.
    pub enable_nearest_points: bool,
    /// The iterative solver backend used when no specialized routine exists
    /// for the shape pair.
    pub gjk_solver: GjkSolverType,
    /// The absolute tolerance for GJK termination.
    pub distance_tolerance: Real,
}

impl Default for DistanceRequest {
    fn default() -> Self {
        DistanceRequest {
            enable_nearest_points: true,
            gjk_solver: GjkSolverType::default(),
            distance_tolerance: gjk::eps_tol(),
        }
    }
}

impl DistanceRequest {
    /// Checks that this request is well-formed.
    pub fn validate(&self) -> Result<(), QueryError> {
        if !(self.distance_tolerance.is_finite() && self.distance_tolerance > 0.0) {
            return Err(QueryError::InvalidRequest);
        }

        Ok(())
    }
}
