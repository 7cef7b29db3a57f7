use super::controller::NavContext;

/// Default distance change per unit of scroll.
pub const DEFAULT_SCROLL_COEFFICIENT: f64 = 0.002;
/// Default distance change per pixel of vertical drag.
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.003;

/// Scales the orbit distance.
///
/// Scrolling up moves the camera closer; dragging down moves it away. The
/// distance never drops below [`MIN_DISTANCE`](crate::camera::MIN_DISTANCE).
#[derive(Debug, Clone)]
pub struct ZoomController {
    scroll_coefficient: f64,
    drag_coefficient: f64,
}

impl ZoomController {
    /// Zoom controller with the given per-unit coefficients.
    #[must_use]
    pub fn new(scroll_coefficient: f64, drag_coefficient: f64) -> Self {
        Self {
            scroll_coefficient,
            drag_coefficient,
        }
    }

    /// `distance *= 1 - scroll_coefficient · delta_y`.
    pub fn scroll(&mut self, delta_y: f64, ctx: &mut NavContext<'_>) -> bool {
        self.scale(1.0 - self.scroll_coefficient * delta_y, ctx)
    }

    /// `distance *= 1 + drag_coefficient · delta_y`.
    pub fn drag(&mut self, delta_y: f64, ctx: &mut NavContext<'_>) -> bool {
        self.scale(1.0 + self.drag_coefficient * delta_y, ctx)
    }

    fn scale(&self, factor: f64, ctx: &mut NavContext<'_>) -> bool {
        if !factor.is_finite() || factor == 1.0 {
            return false;
        }
        let before = ctx.pose.distance();
        ctx.pose.set_distance(before * factor);
        log::trace!("zoom: {before:.4} -> {:.4}", ctx.pose.distance());
        ctx.pose.distance() != before
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_COEFFICIENT, DEFAULT_DRAG_COEFFICIENT)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::camera::pose::{CameraPose, CameraTransforms, MIN_DISTANCE};
    use crate::camera::projection::ViewportMetrics;

    fn zoom_with(
        start: f64,
        apply: impl FnOnce(&mut ZoomController, &mut NavContext<'_>) -> bool,
    ) -> (bool, f64) {
        let mut pose = CameraPose::new(DVec3::ZERO, start);
        let transforms = CameraTransforms::from_pose(&pose);
        let viewport = ViewportMetrics::new(640.0, 480.0, 30.0);
        let mut zoom = ZoomController::default();
        let changed = apply(
            &mut zoom,
            &mut NavContext {
                pose: &mut pose,
                viewport: &viewport,
                transforms: &transforms,
            },
        );
        (changed, pose.distance())
    }

    #[test]
    fn scroll_up_moves_closer() {
        let (changed, d) = zoom_with(10.0, |z, ctx| z.scroll(50.0, ctx));
        assert!(changed);
        assert!((d - 10.0 * (1.0 - 0.002 * 50.0)).abs() < 1e-12);
    }

    #[test]
    fn drag_down_moves_away() {
        let (changed, d) = zoom_with(10.0, |z, ctx| z.drag(20.0, ctx));
        assert!(changed);
        assert!((d - 10.0 * (1.0 + 0.003 * 20.0)).abs() < 1e-12);
    }

    #[test]
    fn large_scroll_never_flips_sign() {
        let (_, d) = zoom_with(10.0, |z, ctx| z.scroll(5000.0, ctx));
        assert_eq!(d, MIN_DISTANCE);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let (changed, d) = zoom_with(10.0, |z, ctx| z.scroll(0.0, ctx));
        assert!(!changed);
        assert_eq!(d, 10.0);
    }
}
