//! Orbital camera: pose, derived transforms, projection and fitting.
//!
//! [`OrbitalCameraRig`] owns all of it and is the type hosts interact
//! with. The submodules are usable on their own for tools that only need
//! the math.

/// Fit-to-bounds math and animation.
pub mod fit;
/// Perspective scene-to-raster projection.
pub mod projection;
/// Camera pose and derived transforms.
pub mod pose;
/// The camera rig tying pose, projection and navigation together.
pub mod rig;

pub use fit::{fit_target, Bounds, ClipPlanes, FitAnimation, FitTarget};
pub use pose::{CameraPose, CameraTransforms, RotationState, MIN_DISTANCE};
pub use projection::{FovAxis, ProjectionTransform, ViewportMetrics};
pub use rig::{ListenerId, OrbitalCameraRig};
