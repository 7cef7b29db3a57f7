use glam::{DQuat, DVec3};

/// Below this length an axis is treated as degenerate.
pub const AXIS_EPSILON: f64 = 1e-12;

/// Below this `sin(acos(w))` the rotation is treated as zero-angle when
/// extracting its axis.
const SINGULAR_EPSILON: f64 = 1e-9;

/// Quaternion for a rotation of `angle_radians` about `axis`.
///
/// The axis does not need to be unit length. A zero-length axis or a
/// non-finite angle yields the identity rotation.
#[must_use]
pub fn from_axis_angle_radians(axis: DVec3, angle_radians: f64) -> DQuat {
    let len = axis.length();
    if !(len.is_finite() && len > AXIS_EPSILON && angle_radians.is_finite()) {
        return DQuat::IDENTITY;
    }
    let half = angle_radians / 2.0;
    let v = axis * (half.sin() / len);
    DQuat::from_xyzw(v.x, v.y, v.z, half.cos())
}

/// Quaternion for a rotation of `angle_degrees` about `axis`.
#[must_use]
pub fn from_axis_angle_degrees(axis: DVec3, angle_degrees: f64) -> DQuat {
    from_axis_angle_radians(axis, angle_degrees.to_radians())
}

/// Rotation angle of a unit quaternion, `2·acos(w)`, in `[0, 2π]`.
#[must_use]
pub fn angle_radians(q: DQuat) -> f64 {
    2.0 * q.w.clamp(-1.0, 1.0).acos()
}

/// Unit rotation axis of a unit quaternion.
///
/// For a zero rotation (`w ≈ ±1`) the axis is undefined; `+X` is returned
/// by convention.
#[must_use]
pub fn axis(q: DQuat) -> DVec3 {
    let s = q.w.clamp(-1.0, 1.0).acos().sin();
    if s.abs() <= SINGULAR_EPSILON {
        return DVec3::X;
    }
    let raw = DVec3::new(q.x, q.y, q.z) / s;
    let len = raw.length();
    if len > AXIS_EPSILON && len.is_finite() {
        raw / len
    } else {
        DVec3::X
    }
}

/// Scale `q` to unit length. Degenerate input yields the identity.
#[must_use]
pub fn normalized(q: DQuat) -> DQuat {
    let len = q.length();
    if !(len.is_finite() && len > AXIS_EPSILON) {
        return DQuat::IDENTITY;
    }
    DQuat::from_xyzw(q.x / len, q.y / len, q.z / len, q.w / len)
}

/// Whether two unit quaternions describe the same rotation (`q ≡ -q`).
#[must_use]
pub fn same_rotation(a: DQuat, b: DQuat, eps: f64) -> bool {
    a.dot(b).abs() >= 1.0 - eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_angle_components() {
        let q = from_axis_angle_degrees(DVec3::new(0.0, 0.0, 2.0), 90.0);
        let half = 45.0_f64.to_radians();
        assert!((q.w - half.cos()).abs() < 1e-12);
        assert!((q.z - half.sin()).abs() < 1e-12);
        assert!(q.x.abs() < 1e-12 && q.y.abs() < 1e-12);
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(from_axis_angle_degrees(DVec3::ZERO, 45.0), DQuat::IDENTITY);
        assert_eq!(
            from_axis_angle_radians(DVec3::X, f64::NAN),
            DQuat::IDENTITY
        );
    }

    #[test]
    fn zero_rotation_axis_falls_back_to_x() {
        assert_eq!(axis(DQuat::IDENTITY), DVec3::X);
        assert_eq!(axis(-DQuat::IDENTITY), DVec3::X);
        assert!(axis(DQuat::IDENTITY).is_finite());
    }

    #[test]
    fn hamilton_product_composes_rotations() {
        let a = from_axis_angle_degrees(DVec3::Z, 30.0);
        let b = from_axis_angle_degrees(DVec3::Z, 60.0);
        let c = normalized(a * b);
        assert!((angle_radians(c).to_degrees() - 90.0).abs() < 1e-9);
        assert!((axis(c) - DVec3::Z).length() < 1e-9);
    }

    #[test]
    fn normalize_handles_degenerate() {
        let q = normalized(DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0));
        assert_eq!(q, DQuat::IDENTITY);
        let q = normalized(DQuat::from_xyzw(0.0, 0.0, 2.0, 0.0));
        assert!((q.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negated_quaternion_is_same_rotation() {
        let q = from_axis_angle_degrees(DVec3::Y, 70.0);
        assert!(same_rotation(q, -q, 1e-12));
        assert!(!same_rotation(q, DQuat::IDENTITY, 1e-6));
    }
}
