use glam::{DQuat, DVec3};

use super::angle::normalize_degrees;
use super::axis_angle::AxisAngle;
use super::quat;

/// Below this `|cos(z/2)|` the pitch cannot be recovered from an axis-angle.
const POLE_EPSILON: f64 = 1e-9;

/// Rotation as a rotation about `z` followed by a rotation about `x`.
///
/// Both angles are stored in degrees, wrapped into `[0, 360)`.
///
/// Converting to [`AxisAngle`] is exact. The reverse,
/// [`Turntable::closest_to`], is a best-effort match: when the axis-angle
/// axis lies near the z pole the yaw is ill-defined and the result may
/// describe a different rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Turntable {
    x_rotation: f64,
    z_rotation: f64,
}

impl Turntable {
    /// Turntable from pitch (`x`) and yaw (`z`) in degrees.
    #[must_use]
    pub fn new(x_rotation: f64, z_rotation: f64) -> Self {
        Self {
            x_rotation: normalize_degrees(x_rotation),
            z_rotation: normalize_degrees(z_rotation),
        }
    }

    /// Turntable from pitch and yaw in radians.
    #[must_use]
    pub fn from_radians(x_rotation: f64, z_rotation: f64) -> Self {
        Self::new(x_rotation.to_degrees(), z_rotation.to_degrees())
    }

    /// Pitch in degrees, in `[0, 360)`.
    #[must_use]
    pub fn x_rotation(&self) -> f64 {
        self.x_rotation
    }

    /// Yaw in degrees, in `[0, 360)`.
    #[must_use]
    pub fn z_rotation(&self) -> f64 {
        self.z_rotation
    }

    /// Set the pitch in degrees; the stored value is wrapped.
    pub fn set_x_rotation(&mut self, degrees: f64) {
        self.x_rotation = normalize_degrees(degrees);
    }

    /// Set the yaw in degrees; the stored value is wrapped.
    pub fn set_z_rotation(&mut self, degrees: f64) {
        self.z_rotation = normalize_degrees(degrees);
    }

    /// Equivalent quaternion: the z rotation post-multiplied by the x
    /// rotation.
    #[must_use]
    pub fn to_quat(&self) -> DQuat {
        let qz = quat::from_axis_angle_degrees(DVec3::Z, self.z_rotation);
        let qx = quat::from_axis_angle_degrees(DVec3::X, self.x_rotation);
        quat::normalized(qz * qx)
    }

    /// Exact axis-angle form of this rotation.
    #[must_use]
    pub fn to_axis_angle(&self) -> AxisAngle {
        AxisAngle::from_quat(self.to_quat())
    }

    /// Closest turntable to an axis-angle rotation.
    ///
    /// Solves `z = 2·atan2(axis.y, axis.x)` and
    /// `cos(angle/2) = cos(x/2)·cos(z/2)` for `x`. Lossy: pure yaw rotations
    /// (axis on the z pole) collapse onto the pitch, and only rotations
    /// whose pitch lies in `[0, 180]` are recovered exactly.
    #[must_use]
    pub fn closest_to(rotation: &AxisAngle) -> Self {
        let axis = rotation.axis();
        let z = 2.0 * axis.y.atan2(axis.x);
        let half_z_cos = (z / 2.0).cos();
        let x = if half_z_cos.abs() <= POLE_EPSILON {
            0.0
        } else {
            let ratio = (rotation.angle_radians() / 2.0).cos() / half_z_cos;
            2.0 * ratio.clamp(-1.0, 1.0).acos()
        };
        Self::from_radians(x, z)
    }
}

impl From<AxisAngle> for Turntable {
    fn from(rotation: AxisAngle) -> Self {
        Self::closest_to(&rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_are_wrapped_on_set() {
        let mut t = Turntable::default();
        t.set_x_rotation(370.0);
        assert!((t.x_rotation() - 10.0).abs() < 1e-12);
        t.set_x_rotation(-10.0);
        assert!((t.x_rotation() - 350.0).abs() < 1e-12);
        t.set_z_rotation(-360.0);
        assert_eq!(t.z_rotation(), 0.0);
    }

    #[test]
    fn pure_pitch_is_rotation_about_x() {
        let aa = Turntable::new(40.0, 0.0).to_axis_angle();
        assert!((aa.axis() - DVec3::X).length() < 1e-9);
        assert!((aa.angle_degrees() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn z_is_applied_after_x() {
        // x first takes +Y to +Z, then z leaves +Z alone
        let q = Turntable::new(90.0, 90.0).to_quat();
        assert!((q * DVec3::Y - DVec3::Z).length() < 1e-9);
        // +X is untouched by x, then z takes it to +Y
        assert!((q * DVec3::X - DVec3::Y).length() < 1e-9);
    }

    #[test]
    fn closest_recovers_generic_turntable() {
        for (x, z) in [(30.0, 40.0), (120.0, 10.0), (75.0, 300.0)] {
            let source = Turntable::new(x, z);
            let back = Turntable::closest_to(&source.to_axis_angle());
            assert!(
                back.to_axis_angle()
                    .is_equivalent(&source.to_axis_angle(), 1e-9),
                "({x}, {z}) came back as {back:?}"
            );
        }
        let aa = Turntable::new(30.0, 40.0).to_axis_angle();
        let back = Turntable::closest_to(&aa);
        assert!((back.x_rotation() - 30.0).abs() < 1e-7);
        assert!((back.z_rotation() - 40.0).abs() < 1e-7);
    }

    #[test]
    fn pure_yaw_collapses_onto_pitch() {
        let yaw = AxisAngle::new(DVec3::Z, 90.0);
        let t = Turntable::closest_to(&yaw);
        assert!(t.x_rotation().is_finite() && t.z_rotation().is_finite());
        assert_eq!(t.z_rotation(), 0.0);
        assert!((t.x_rotation() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn pole_case_never_yields_nan() {
        let t = Turntable::closest_to(&AxisAngle::new(DVec3::NEG_X, 200.0));
        assert!(t.x_rotation().is_finite() && t.z_rotation().is_finite());
    }
}
