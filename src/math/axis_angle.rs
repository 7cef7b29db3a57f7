use glam::{DAffine3, DQuat, DVec3};

use super::angle::normalize_degrees;
use super::quat;
use super::turntable::Turntable;

/// Rotation as a unit axis plus an angle in degrees.
///
/// The axis is always unit length and the angle always lies in `[0, 360)`;
/// both are enforced on construction. A zero-length axis falls back to `+X`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    axis: DVec3,
    angle_degrees: f64,
}

impl AxisAngle {
    /// Zero rotation about `+X`.
    pub const IDENTITY: Self = Self {
        axis: DVec3::X,
        angle_degrees: 0.0,
    };

    /// Rotation of `angle_degrees` about `axis` (normalized here).
    #[must_use]
    pub fn new(axis: DVec3, angle_degrees: f64) -> Self {
        let len = axis.length();
        let axis = if len > quat::AXIS_EPSILON && len.is_finite() {
            axis / len
        } else {
            DVec3::X
        };
        Self {
            axis,
            angle_degrees: normalize_degrees(angle_degrees),
        }
    }

    /// Rotation of `angle_radians` about `axis`.
    #[must_use]
    pub fn from_radians(axis: DVec3, angle_radians: f64) -> Self {
        Self::new(axis, angle_radians.to_degrees())
    }

    /// Decompose a quaternion. The quaternion is normalized first; a zero
    /// rotation comes back as [`AxisAngle::IDENTITY`].
    #[must_use]
    pub fn from_quat(q: DQuat) -> Self {
        let q = quat::normalized(q);
        Self::new(quat::axis(q), quat::angle_radians(q).to_degrees())
    }

    /// Unit rotation axis.
    #[must_use]
    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    /// Rotation angle in degrees, in `[0, 360)`.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Rotation angle in radians.
    #[must_use]
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }

    /// Equivalent unit quaternion.
    #[must_use]
    pub fn to_quat(&self) -> DQuat {
        quat::from_axis_angle_degrees(self.axis, self.angle_degrees)
    }

    /// Rotation about the origin, without translation.
    #[must_use]
    pub fn to_transform(&self) -> DAffine3 {
        DAffine3::from_quat(self.to_quat())
    }

    /// Rotate a vector.
    #[must_use]
    pub fn rotate(&self, v: DVec3) -> DVec3 {
        self.to_quat() * v
    }

    /// Whether `other` describes the same rotation, regardless of how the
    /// axis and angle are signed or wrapped.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self, eps: f64) -> bool {
        quat::same_rotation(self.to_quat(), other.to_quat(), eps)
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Turntable> for AxisAngle {
    fn from(t: Turntable) -> Self {
        t.to_axis_angle()
    }
}
