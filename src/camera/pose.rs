//! Camera pose and the transforms derived from it.
//!
//! [`CameraPose`] holds the orbit state (origin, distance, rotation).
//! [`CameraTransforms`] is recomputed from a pose after every mutation and
//! exposes the view and rotation-only transforms read-only.

use glam::{DAffine3, DVec3};

use crate::math::{AxisAngle, Turntable};

/// Smallest distance from origin a pose will hold.
pub const MIN_DISTANCE: f64 = 1e-6;

/// The canonical rotation of a pose.
///
/// Turntable controllers keep their pitch and yaw here so that every
/// turntable binding shares one state; arcball controllers write axis-angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationState {
    /// Free rotation, written by the arcball.
    AxisAngle(AxisAngle),
    /// Pitch/yaw rotation, written by the turntable.
    Turntable(Turntable),
}

impl RotationState {
    /// The rotation as axis-angle. Exact for both variants.
    #[must_use]
    pub fn axis_angle(&self) -> AxisAngle {
        match self {
            Self::AxisAngle(aa) => *aa,
            Self::Turntable(t) => t.to_axis_angle(),
        }
    }

    /// The rotation as turntable angles.
    ///
    /// Exact when already a turntable, otherwise the closest match.
    #[must_use]
    pub fn to_turntable(&self) -> Turntable {
        match self {
            Self::AxisAngle(aa) => Turntable::closest_to(aa),
            Self::Turntable(t) => *t,
        }
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::AxisAngle(AxisAngle::IDENTITY)
    }
}

/// Orbit state of the camera.
///
/// The camera sits `distance` units behind `origin` along the rotated view
/// axis. Setters ignore non-finite input and keep the distance strictly
/// positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    origin: DVec3,
    distance: f64,
    rotation: RotationState,
}

impl CameraPose {
    /// Pose orbiting `origin` at `distance` with no rotation.
    #[must_use]
    pub fn new(origin: DVec3, distance: f64) -> Self {
        let mut pose = Self::default();
        pose.set_origin(origin);
        pose.set_distance(distance);
        pose
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Distance from the camera to its origin.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Current rotation state.
    #[must_use]
    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Move the orbit origin. Non-finite input is ignored.
    pub fn set_origin(&mut self, origin: DVec3) {
        if !origin.is_finite() {
            log::warn!("ignoring non-finite camera origin {origin:?}");
            return;
        }
        self.origin = origin;
    }

    /// Set the orbit distance, clamped to [`MIN_DISTANCE`]. Non-finite
    /// input is ignored.
    pub fn set_distance(&mut self, distance: f64) {
        if !distance.is_finite() {
            log::warn!("ignoring non-finite camera distance {distance}");
            return;
        }
        self.distance = distance.max(MIN_DISTANCE);
    }

    /// Replace the rotation state.
    pub fn set_rotation(&mut self, rotation: RotationState) {
        self.rotation = rotation;
    }

    /// Camera position in world space.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        let back = DVec3::new(0.0, 0.0, -self.distance);
        self.origin + self.rotation.axis_angle().rotate(back)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            distance: 1.0,
            rotation: RotationState::default(),
        }
    }
}

/// Transforms derived from a [`CameraPose`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransforms {
    rotation_only: DAffine3,
    view: DAffine3,
}

impl CameraTransforms {
    /// Compose `translate(origin) · R · translate(0, 0, -distance)`.
    #[must_use]
    pub fn from_pose(pose: &CameraPose) -> Self {
        let rotation_only = pose.rotation().axis_angle().to_transform();
        let view = DAffine3::from_translation(pose.origin())
            * rotation_only
            * DAffine3::from_translation(DVec3::new(
                0.0,
                0.0,
                -pose.distance(),
            ));
        Self {
            rotation_only,
            view,
        }
    }

    /// The rotation alone, about the origin of rotation.
    #[must_use]
    pub fn rotation_only(&self) -> DAffine3 {
        self.rotation_only
    }

    /// Camera-to-world transform.
    #[must_use]
    pub fn view(&self) -> DAffine3 {
        self.view
    }

    /// Screen-right axis in world space.
    #[must_use]
    pub fn local_x(&self) -> DVec3 {
        self.rotation_only.transform_vector3(DVec3::X)
    }

    /// Screen-down axis in world space.
    #[must_use]
    pub fn local_y(&self) -> DVec3 {
        self.rotation_only.transform_vector3(DVec3::Y)
    }

    /// Inverse orientation, for axis-triad widgets that show world axes as
    /// seen by the camera.
    #[must_use]
    pub fn orientation_gizmo(&self) -> DAffine3 {
        self.rotation_only.inverse()
    }
}

impl Default for CameraTransforms {
    fn default() -> Self {
        Self::from_pose(&CameraPose::default())
    }
}
