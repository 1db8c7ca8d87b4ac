use crate::math::{Point, Real};

/// Computes the closest points between the segments `[p1, q1]` and
/// `[p2, q2]`.
pub fn closest_points_segment_segment(
    p1: &Point<Real>,
    q1: &Point<Real>,
    p2: &Point<Real>,
    q2: &Point<Real>,
) -> (Point<Real>, Point<Real>) {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let eps = crate::math::DEFAULT_EPSILON;
    let mut s;
    let mut t;

    if a <= eps && e <= eps {
        return (*p1, *p2);
    }

    if a <= eps {
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1.dot(&r);

        if e <= eps {
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let denom = a * e - b * b;

            if denom != 0.0 {
                s = ((b * f - c * e) / denom).clamp(0.0, 1.0);
            } else {
                // Parallel segments: pick an arbitrary consistent point.
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }
        }
    }

    (p1 + d1 * s, p2 + d2 * t)
}
