//! Segment-segment and segment-circle intersection in 2D.
//!
//! Unlike the tolerance-banded comparisons used elsewhere in the crate,
//! every denominator and discriminant here is compared against exact zero.
//! A grazing ray whose discriminant lands a few ulps off zero will take the
//! two-root branch instead of the tangent branch; this is a known numeric
//! fragility, and switching to epsilon comparisons would change which rays
//! report hits. Accepted limitation.

use super::Point2;

/// Bounded segment-segment intersection in 2D.
///
/// Solves the cross-ratio parametrization for segment `a0 -> a1` against
/// segment `b0 -> b1` and returns the intersection point only when both
/// parameters lie in `[0, 1]`.
///
/// A zero denominator means the lines are parallel, and `None` is returned.
/// Collinear overlapping segments also fall into this branch and are
/// deliberately unreported.
#[must_use]
#[allow(clippy::float_cmp, clippy::similar_names)]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<Point2> {
    let denom = (b1.y - b0.y) * (a1.x - a0.x) - (b1.x - b0.x) * (a1.y - a0.y);
    if denom == 0.0 {
        // Parallel (or collinear).
        return None;
    }

    let ua = ((b1.x - b0.x) * (a0.y - b0.y) - (b1.y - b0.y) * (a0.x - b0.x)) / denom;
    if !(0.0..=1.0).contains(&ua) {
        return None;
    }

    let ub = ((a1.x - a0.x) * (a0.y - b0.y) - (a1.y - a0.y) * (a0.x - b0.x)) / denom;
    if !(0.0..=1.0).contains(&ub) {
        return None;
    }

    Some(Point2::new(
        a0.x + ua * (a1.x - a0.x),
        a0.y + ua * (a1.y - a0.y),
    ))
}

/// Intersection of the ray `r0 -> r1` with a circle.
///
/// Substituting `P(t) = r0 + t * (r1 - r0)` into the circle equation gives
/// the quadratic `A t^2 + B t + C = 0`. Returns 0, 1, or 2 points:
///
/// - `A == 0` (zero-length ray): no intersections.
/// - discriminant `== 0`: the single tangent root, kept only if `t >= 0`.
/// - discriminant `> 0`: both roots, emitted as a pair iff
///   `t1 = (-B + sqrt(disc)) / 2A >= 0`. Note the guard is asymmetric: when
///   the ray starts inside the circle, `t2` is negative yet its point is
///   still emitted. That point sits behind the ray origin and is kept as an
///   intentional part of the contract.
/// - discriminant `< 0`: no intersections.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_circle_intersect_2d(
    r0: &Point2,
    r1: &Point2,
    center: &Point2,
    radius: f64,
) -> Vec<Point2> {
    let d = r1 - r0;
    let f = r0 - center;

    let a = d.dot(&d);
    let b = 2.0 * d.dot(&f);
    let c = f.dot(&f) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    let mut intersections = Vec::new();

    if a == 0.0 {
        // Degenerate ray.
        return intersections;
    }

    if discriminant == 0.0 {
        let t = -b / (2.0 * a);
        if t >= 0.0 {
            intersections.push(r0 + d * t);
        }
    } else if discriminant > 0.0 {
        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b + sqrt_disc) / (2.0 * a);
        let t2 = (-b - sqrt_disc) / (2.0 * a);

        if t1 >= 0.0 {
            intersections.push(r0 + d * t1);
            intersections.push(r0 + d * t2);
        }
    }

    intersections
}
