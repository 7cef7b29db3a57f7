use glam::DVec2;

use super::controller::NavContext;

/// Inputs the pan coefficient depends on. A change in any of them
/// invalidates the cached value.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CoefficientKey {
    distance: f64,
    horizontal_fov: f64,
    width: f64,
}

/// Moves the orbit origin in the view plane so the scene follows the
/// pointer.
///
/// One pixel of drag moves the origin by
/// `2 · distance · tan(hfov / 2) / width` world units along the camera's
/// local axes.
#[derive(Debug, Clone, Default)]
pub struct PanController {
    cached: Option<(CoefficientKey, f64)>,
}

impl PanController {
    /// Create a pan controller with an empty coefficient cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// World units per pixel, recomputed only when its inputs changed.
    pub fn coefficient(&mut self, ctx: &NavContext<'_>) -> f64 {
        let key = CoefficientKey {
            distance: ctx.pose.distance(),
            horizontal_fov: ctx.viewport.horizontal_fov_radians(),
            width: ctx.viewport.width,
        };
        match self.cached {
            Some((cached_key, coeff)) if cached_key == key => coeff,
            _ => {
                let half_width = (key.horizontal_fov / 2.0).tan();
                let coeff = 2.0 * key.distance * half_width / key.width;
                self.cached = Some((key, coeff));
                coeff
            }
        }
    }

    /// Shift the origin by `-coeff · (dx · local_x + dy · local_y)`.
    pub fn pan(&mut self, delta: DVec2, ctx: &mut NavContext<'_>) -> bool {
        if delta == DVec2::ZERO || !delta.is_finite() {
            return false;
        }
        let coeff = self.coefficient(ctx);
        let shift = ctx.transforms.local_x() * (coeff * delta.x)
            + ctx.transforms.local_y() * (coeff * delta.y);
        if !shift.is_finite() {
            log::warn!("skipping pan with non-finite shift {shift:?}");
            return false;
        }
        let origin = ctx.pose.origin() - shift;
        ctx.pose.set_origin(origin);
        true
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::camera::pose::{CameraPose, CameraTransforms, RotationState};
    use crate::camera::projection::ViewportMetrics;
    use crate::math::AxisAngle;

    fn rotated_pose() -> CameraPose {
        let mut pose = CameraPose::new(DVec3::new(1.0, 2.0, 3.0), 12.0);
        pose.set_rotation(RotationState::AxisAngle(AxisAngle::new(
            DVec3::new(0.2, 1.0, -0.4),
            37.0,
        )));
        pose
    }

    #[test]
    fn horizontal_drag_moves_along_local_x() {
        let mut pose = rotated_pose();
        let before = pose.origin();
        let transforms = CameraTransforms::from_pose(&pose);
        let viewport = ViewportMetrics::new(800.0, 600.0, 30.0);
        let coeff = 2.0
            * pose.distance()
            * (viewport.horizontal_fov_radians() / 2.0).tan()
            / viewport.width;
        let mut pan = PanController::new();
        let mut ctx = NavContext {
            pose: &mut pose,
            viewport: &viewport,
            transforms: &transforms,
        };
        assert!(pan.pan(DVec2::new(15.0, 0.0), &mut ctx));
        let expected = before - transforms.local_x() * (coeff * 15.0);
        assert!((pose.origin() - expected).length() < 1e-12);
    }

    #[test]
    fn coefficient_follows_distance() {
        let mut pose = rotated_pose();
        let transforms = CameraTransforms::from_pose(&pose);
        let viewport = ViewportMetrics::new(800.0, 600.0, 30.0);
        let mut pan = PanController::new();
        let first = pan.coefficient(&NavContext {
            pose: &mut pose,
            viewport: &viewport,
            transforms: &transforms,
        });
        pose.set_distance(24.0);
        let second = pan.coefficient(&NavContext {
            pose: &mut pose,
            viewport: &viewport,
            transforms: &transforms,
        });
        assert!((second - 2.0 * first).abs() < 1e-12);

        // with a vertical fov the per-pixel step depends on the height only
        let shorter = ViewportMetrics::new(800.0, 300.0, 30.0);
        let third = pan.coefficient(&NavContext {
            pose: &mut pose,
            viewport: &shorter,
            transforms: &transforms,
        });
        assert!((third - 2.0 * second).abs() < 1e-12);
    }

    #[test]
    fn zero_drag_is_a_no_op() {
        let mut pose = rotated_pose();
        let before = pose.origin();
        let transforms = CameraTransforms::from_pose(&pose);
        let viewport = ViewportMetrics::new(800.0, 600.0, 30.0);
        let mut ctx = NavContext {
            pose: &mut pose,
            viewport: &viewport,
            transforms: &transforms,
        };
        assert!(!PanController::new().pan(DVec2::ZERO, &mut ctx));
        assert_eq!(pose.origin(), before);
    }
}
