use crate::math::{Point, Real};

/// The projection of a point on a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointProjection {
    /// Whether the point to project was inside of the shape.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }
}

/// Trait of shapes supporting point projection in their local frame.
pub trait PointQuery {
    /// Projects a point on `self`.
    ///
    /// If the point is inside of `self` and `solid` is `true` the projection
    /// is the point itself; if `solid` is `false` the point is projected onto
    /// the shape boundary instead.
    fn project_local_point(&self, pt: &Point<Real>, solid: bool) -> PointProjection;

    /// The distance from `pt` to the boundary of `self`, or `0.0` when the
    /// point is inside.
    fn distance_to_local_point(&self, pt: &Point<Real>) -> Real {
        let proj = self.project_local_point(pt, true);
        na::distance(&proj.point, pt)
    }

    /// Tests whether `pt` is inside of `self`.
    fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        self.project_local_point(pt, true).is_inside
    }
}
