//! Registered navigation behaviors and their live controllers.

use super::arcball::ArcballRotator;
use super::behavior::{InputCondition, NavigationBehavior, Response};
use super::controller::{Controller, RotationMode, Rotator};
use super::pan::PanController;
use super::turntable::{TurntableRotator, DEFAULT_ROTATION_COEFFICIENT};
use super::zoom::{
    ZoomController, DEFAULT_DRAG_COEFFICIENT, DEFAULT_SCROLL_COEFFICIENT,
};
use crate::error::NavError;

/// Tuning shared by every controller the registry builds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Turntable degrees per pixel.
    pub rotation: f64,
    /// Zoom factor per unit of scroll.
    pub scroll_zoom: f64,
    /// Zoom factor per pixel of drag.
    pub drag_zoom: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            rotation: DEFAULT_ROTATION_COEFFICIENT,
            scroll_zoom: DEFAULT_SCROLL_COEFFICIENT,
            drag_zoom: DEFAULT_DRAG_COEFFICIENT,
        }
    }
}

#[derive(Debug)]
struct Binding {
    behavior: NavigationBehavior,
    controller: Controller,
}

/// Maps input conditions to controllers.
///
/// At most one behavior is registered per [`InputCondition`]; adding a
/// behavior replaces whichever behavior held its input. Entries keep
/// insertion order.
#[derive(Debug, Default)]
pub struct NavigationBehaviorRegistry {
    bindings: Vec<Binding>,
    mode: RotationMode,
    coefficients: Coefficients,
}

impl NavigationBehaviorRegistry {
    /// Empty registry using `mode` for rotate-drag behaviors.
    #[must_use]
    pub fn new(mode: RotationMode, coefficients: Coefficients) -> Self {
        Self {
            bindings: Vec::new(),
            mode,
            coefficients,
        }
    }

    /// Register `behavior`, replacing any behavior with the same input.
    ///
    /// Returns the replaced behavior. Scroll-to-rotate has no controller
    /// and is rejected, leaving the registry unchanged.
    pub fn add(
        &mut self,
        behavior: NavigationBehavior,
    ) -> Result<Option<NavigationBehavior>, NavError> {
        let controller = self.build_controller(&behavior)?;
        let replaced = self.remove(&behavior);
        log::debug!("navigation: bound {behavior}");
        self.bindings.push(Binding {
            behavior,
            controller,
        });
        Ok(replaced)
    }

    /// Remove the behavior whose input matches `behavior`'s, ignoring the
    /// response. Returns `None` if nothing matched.
    pub fn remove(
        &mut self,
        behavior: &NavigationBehavior,
    ) -> Option<NavigationBehavior> {
        let index = self
            .bindings
            .iter()
            .position(|b| b.behavior.input_conditions_match(behavior))?;
        let removed = self.bindings.remove(index).behavior;
        log::debug!("navigation: unbound {removed}");
        Some(removed)
    }

    /// Remove every behavior.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Registered behaviors in insertion order.
    pub fn behaviors(&self) -> impl Iterator<Item = &NavigationBehavior> {
        self.bindings.iter().map(|b| &b.behavior)
    }

    /// Number of registered behaviors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no behavior is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Behavior bound to `input`, if any.
    #[must_use]
    pub fn behavior_for(
        &self,
        input: &InputCondition,
    ) -> Option<&NavigationBehavior> {
        self.bindings
            .iter()
            .find(|b| b.behavior.input == *input)
            .map(|b| &b.behavior)
    }

    /// Controller bound to `input`, if any.
    pub fn controller_mut(
        &mut self,
        input: &InputCondition,
    ) -> Option<&mut Controller> {
        self.bindings
            .iter_mut()
            .find(|b| b.behavior.input == *input)
            .map(|b| &mut b.controller)
    }

    /// Rotation algorithm used by rotate-drag behaviors.
    #[must_use]
    pub fn rotation_mode(&self) -> RotationMode {
        self.mode
    }

    /// Switch rotation algorithm, rebuilding every rotate-drag controller.
    pub fn set_rotation_mode(&mut self, mode: RotationMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        let coefficients = self.coefficients;
        for binding in &mut self.bindings {
            if let Controller::Rotate(rotator) = &mut binding.controller {
                *rotator = build_rotator(mode, &coefficients);
            }
        }
        log::debug!("navigation: rotation mode {mode:?}");
    }

    /// Current controller coefficients.
    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Replace the coefficients, rebuilding every controller.
    pub fn set_coefficients(&mut self, coefficients: Coefficients) {
        self.coefficients = coefficients;
        let mut bindings = std::mem::take(&mut self.bindings);
        bindings.retain_mut(|binding| {
            match self.build_controller(&binding.behavior) {
                Ok(controller) => {
                    binding.controller = controller;
                    true
                }
                Err(_) => false,
            }
        });
        self.bindings = bindings;
    }

    fn build_controller(
        &self,
        behavior: &NavigationBehavior,
    ) -> Result<Controller, NavError> {
        match (behavior.input, behavior.response) {
            (InputCondition::Scroll { .. }, Response::Rotate) => {
                log::warn!("navigation: no controller for {behavior}");
                Err(NavError::UnsupportedBehavior(*behavior))
            }
            (InputCondition::Drag { .. }, Response::Rotate) => {
                Ok(Controller::Rotate(build_rotator(
                    self.mode,
                    &self.coefficients,
                )))
            }
            (_, Response::Pan) => Ok(Controller::Pan(PanController::new())),
            (_, Response::Zoom) => Ok(Controller::Zoom(ZoomController::new(
                self.coefficients.scroll_zoom,
                self.coefficients.drag_zoom,
            ))),
        }
    }
}

fn build_rotator(
    mode: RotationMode,
    coefficients: &Coefficients,
) -> Box<dyn Rotator> {
    match mode {
        RotationMode::Arcball => Box::new(ArcballRotator::new()),
        RotationMode::Turntable => {
            Box::new(TurntableRotator::new(coefficients.rotation))
        }
    }
}
