//! Arcball rotation.
//!
//! Drag points are projected onto a hemisphere centered in the viewport
//! with radius `max(width, height) / 3`. The rotation carrying the start
//! point to the current point is composed onto the rotation snapshot taken
//! when the drag began.

use glam::{DVec2, DVec3};

use super::controller::{
    InteractionSession, NavContext, RotationMode, Rotator,
};
use crate::camera::pose::RotationState;
use crate::camera::projection::ViewportMetrics;
use crate::math::{quat, AxisAngle};

/// Project a raster point onto the arcball hemisphere.
///
/// Points inside the ball land on the sphere facing the viewer
/// (`z <= 0`); points outside are pulled onto its rim (`z = 0`).
#[must_use]
pub fn project_to_sphere(point: DVec2, viewport: &ViewportMetrics) -> DVec3 {
    let radius = viewport.width.max(viewport.height) / 3.0;
    let p = (point - viewport.center()) / radius;
    let l2 = p.length_squared();
    if l2 <= 1.0 {
        DVec3::new(p.x, p.y, -(1.0 - l2).sqrt())
    } else {
        let rim = p / l2.sqrt();
        DVec3::new(rim.x, rim.y, 0.0)
    }
}

/// Arcball rotator. Only the projected start point is kept per gesture.
#[derive(Debug, Clone, Default)]
pub struct ArcballRotator {
    start_vector: Option<DVec3>,
}

impl ArcballRotator {
    /// Create an idle arcball.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rotator for ArcballRotator {
    fn mode(&self) -> RotationMode {
        RotationMode::Arcball
    }

    fn begin(&mut self, session: &InteractionSession, ctx: &NavContext<'_>) {
        self.start_vector =
            Some(project_to_sphere(session.start_point, ctx.viewport));
    }

    fn drag(
        &mut self,
        session: &InteractionSession,
        point: DVec2,
        _delta: DVec2,
        ctx: &mut NavContext<'_>,
    ) -> bool {
        let start = *self.start_vector.get_or_insert_with(|| {
            project_to_sphere(session.start_point, ctx.viewport)
        });
        let current = project_to_sphere(point, ctx.viewport);

        let axis = start.cross(current);
        let angle = -start.dot(current).clamp(-1.0, 1.0).acos();
        if angle == 0.0 || axis.length() <= quat::AXIS_EPSILON {
            return false;
        }

        let start_q = session.start_rotation.axis_angle().to_quat();
        let delta_q = quat::from_axis_angle_radians(axis, angle);
        let rotation =
            AxisAngle::from_quat(quat::normalized(start_q * delta_q));
        log::trace!(
            "arcball: axis {:?}, {:.2} deg",
            rotation.axis(),
            rotation.angle_degrees()
        );
        ctx.pose.set_rotation(RotationState::AxisAngle(rotation));
        true
    }
}
