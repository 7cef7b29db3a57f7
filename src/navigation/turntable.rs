use glam::DVec2;

use super::controller::{
    InteractionSession, NavContext, RotationMode, Rotator,
};
use crate::camera::pose::RotationState;

/// Default rotation in degrees per pixel of drag.
pub const DEFAULT_ROTATION_COEFFICIENT: f64 = 0.4;

/// Turntable rotator: vertical drag pitches about x, horizontal drag yaws
/// about z.
///
/// Pitch and yaw live in the pose's [`RotationState::Turntable`], so every
/// turntable binding continues from the same angles.
#[derive(Debug, Clone)]
pub struct TurntableRotator {
    coefficient: f64,
}

impl TurntableRotator {
    /// Rotator turning `coefficient` degrees per pixel.
    #[must_use]
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }

    /// Degrees per pixel.
    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl Default for TurntableRotator {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_COEFFICIENT)
    }
}

impl Rotator for TurntableRotator {
    fn mode(&self) -> RotationMode {
        RotationMode::Turntable
    }

    fn drag(
        &mut self,
        _session: &InteractionSession,
        _point: DVec2,
        delta: DVec2,
        ctx: &mut NavContext<'_>,
    ) -> bool {
        if delta == DVec2::ZERO || !delta.is_finite() {
            return false;
        }
        let mut t = ctx.pose.rotation().to_turntable();
        // past the pole the camera is upside down, so yaw flips
        let z_sign = if t.x_rotation() > 180.0 { 1.0 } else { -1.0 };
        t.set_x_rotation(t.x_rotation() - self.coefficient * delta.y);
        t.set_z_rotation(
            t.z_rotation() - z_sign * self.coefficient * delta.x,
        );
        log::trace!(
            "turntable: x {:.2}, z {:.2}",
            t.x_rotation(),
            t.z_rotation()
        );
        ctx.pose.set_rotation(RotationState::Turntable(t));
        true
    }
}
