/// Wrap an angle in degrees into `[0, 360)`.
///
/// Non-finite input maps to `0.0` so it can never reach a camera pose.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    if (0.0..360.0).contains(&angle) {
        return angle;
    }
    let wrapped = angle - 360.0 * (angle / 360.0).floor();
    // tiny negative inputs can round up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Horizontal field of view for a vertical one at the given aspect ratio
/// (`width / height`), both in radians.
#[must_use]
pub fn horizontal_fov_radians(vertical_radians: f64, aspect: f64) -> f64 {
    2.0 * (aspect * (vertical_radians / 2.0).tan()).atan()
}
