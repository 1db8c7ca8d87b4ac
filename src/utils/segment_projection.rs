use crate::math::{Point, Real};

/// Projects `pt` on the segment `[a, b]`.
///
/// Returns the projection and its barycentric coordinates `[1 - u, u]` with
/// respect to `(a, b)`.
#[inline]
pub fn project_point_on_segment(
    a: &Point<Real>,
    b: &Point<Real>,
    pt: &Point<Real>,
) -> (Point<Real>, [Real; 2]) {
    let ab = b - a;
    let ap = pt - a;
    let ab_ap = ab.dot(&ap);
    let sqnab = ab.norm_squared();

    if ab_ap <= 0.0 || sqnab == 0.0 {
        (*a, [1.0, 0.0])
    } else if ab_ap >= sqnab {
        (*b, [0.0, 1.0])
    } else {
        let u = ab_ap / sqnab;
        (a + ab * u, [1.0 - u, u])
    }
}
