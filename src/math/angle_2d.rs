use super::Vector2;

/// Angle in degrees between two direction vectors, in `[0, 180]`.
///
/// Computed as `acos(clamp(dot / (|d1| * |d2|), -1, 1))`. If either vector
/// is zero-length the angle is undefined; this returns `0.0` as a neutral
/// result rather than failing, so callers must not rely on the sign or
/// exact value for degenerate input.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn angle_between_degrees(d1: &Vector2, d2: &Vector2) -> f64 {
    let mag = d1.norm() * d2.norm();
    if mag == 0.0 {
        return 0.0;
    }

    let cos_theta = (d1.dot(d2) / mag).clamp(-1.0, 1.0);
    cos_theta.acos().to_degrees()
}
