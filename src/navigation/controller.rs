//! Controller dispatch shared by every navigation response.

use std::fmt;

use glam::DVec2;

use super::behavior::InputCondition;
use super::pan::PanController;
use super::zoom::ZoomController;
use crate::camera::pose::{CameraPose, CameraTransforms, RotationState};
use crate::camera::projection::ViewportMetrics;

/// What a controller may read and write while handling one event.
///
/// The pose is the only mutable part; transforms are the ones computed
/// before the event and stay stale until the rig recomputes them.
pub struct NavContext<'a> {
    /// Pose being navigated.
    pub pose: &'a mut CameraPose,
    /// Current viewport metrics.
    pub viewport: &'a ViewportMetrics,
    /// Transforms derived from the pose before this event.
    pub transforms: &'a CameraTransforms,
}

/// Per-gesture state, alive from button press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    /// Input condition the gesture matched.
    pub condition: InputCondition,
    /// Pointer position when the gesture started.
    pub start_point: DVec2,
    /// Most recent pointer position.
    pub last_point: DVec2,
    /// Rotation when the gesture started.
    pub start_rotation: RotationState,
}

impl InteractionSession {
    /// Session starting at `point` with the pose's current rotation.
    #[must_use]
    pub fn new(
        condition: InputCondition,
        point: DVec2,
        start_rotation: RotationState,
    ) -> Self {
        Self {
            condition,
            start_point: point,
            last_point: point,
            start_rotation,
        }
    }
}

/// Rotation algorithm selected for rotate-drag bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Free rotation on a virtual hemisphere.
    Arcball,
    /// Independent pitch and yaw.
    #[default]
    Turntable,
}

/// A drag-driven rotation algorithm.
pub trait Rotator: fmt::Debug {
    /// Which algorithm this is.
    fn mode(&self) -> RotationMode;

    /// Called once when a gesture bound to this rotator starts.
    fn begin(
        &mut self,
        _session: &InteractionSession,
        _ctx: &NavContext<'_>,
    ) {
    }

    /// Apply a drag to the pose. Returns whether the pose changed.
    fn drag(
        &mut self,
        session: &InteractionSession,
        point: DVec2,
        delta: DVec2,
        ctx: &mut NavContext<'_>,
    ) -> bool;
}

/// The controller attached to one registered behavior.
#[derive(Debug)]
pub enum Controller {
    /// Rotation, arcball or turntable.
    Rotate(Box<dyn Rotator>),
    /// Origin shift in the view plane.
    Pan(PanController),
    /// Distance scaling.
    Zoom(ZoomController),
}

impl Controller {
    /// A gesture bound to this controller started.
    pub fn begin(
        &mut self,
        session: &InteractionSession,
        ctx: &NavContext<'_>,
    ) {
        if let Self::Rotate(rotator) = self {
            rotator.begin(session, ctx);
        }
    }

    /// Pointer moved during a gesture. Returns whether the pose changed.
    pub fn drag(
        &mut self,
        session: &InteractionSession,
        point: DVec2,
        delta: DVec2,
        ctx: &mut NavContext<'_>,
    ) -> bool {
        match self {
            Self::Rotate(rotator) => rotator.drag(session, point, delta, ctx),
            Self::Pan(pan) => pan.pan(delta, ctx),
            Self::Zoom(zoom) => zoom.drag(delta.y, ctx),
        }
    }

    /// Scroll event. Returns whether the pose changed.
    pub fn scroll(&mut self, delta: DVec2, ctx: &mut NavContext<'_>) -> bool {
        match self {
            Self::Rotate(_) => false,
            Self::Pan(pan) => pan.pan(delta, ctx),
            Self::Zoom(zoom) => zoom.scroll(delta.y, ctx),
        }
    }
}
