//! Navigation behaviors and the controllers that carry them out.
//!
//! A [`NavigationBehavior`] pairs an input condition (drag with a button,
//! or scroll, plus held modifiers) with a [`Response`]. The
//! [`NavigationBehaviorRegistry`] attaches one [`Controller`] per
//! registered behavior and hands gestures to it:
//!
//! - rotate-drag goes to an [`ArcballRotator`] or [`TurntableRotator`]
//!   depending on the registry's [`RotationMode`]
//! - pan goes to a [`PanController`]
//! - zoom goes to a [`ZoomController`]

/// Hemisphere-projection rotation.
pub mod arcball;
/// Behavior descriptors.
pub mod behavior;
/// Controller dispatch and per-gesture state.
pub mod controller;
/// View-plane panning.
pub mod pan;
/// Behavior registry.
pub mod registry;
/// Pitch/yaw rotation.
pub mod turntable;
/// Distance scaling.
pub mod zoom;

pub use arcball::ArcballRotator;
pub use behavior::{InputCondition, NavigationBehavior, Response};
pub use controller::{
    Controller, InteractionSession, NavContext, RotationMode, Rotator,
};
pub use pan::PanController;
pub use registry::{Coefficients, NavigationBehaviorRegistry};
pub use turntable::TurntableRotator;
pub use zoom::ZoomController;
