use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;
use crate::navigation::{Coefficients, NavigationBehavior, Response};
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Navigation sensitivities, bindings and fit animation.
pub struct NavigationOptions {
    /// Turntable rotation in degrees per pixel.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotation_coefficient: f64,
    /// Relative distance change per unit of scroll.
    #[schemars(title = "Scroll Zoom Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub scroll_zoom_coefficient: f64,
    /// Relative distance change per pixel of zoom drag.
    #[schemars(title = "Drag Zoom Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub drag_zoom_coefficient: f64,
    /// Fit-to-bounds animation length in milliseconds (0 snaps).
    #[schemars(title = "Fit Animation (ms)", range(min = 0, max = 2000))]
    pub fit_animation_ms: u64,
    /// Easing curve for fit animations.
    #[schemars(skip)]
    pub fit_easing: EasingFunction,
    /// Input bindings, applied in order.
    #[schemars(skip)]
    pub bindings: Vec<NavigationBehavior>,
}

impl NavigationOptions {
    /// Controller coefficients from these options.
    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        Coefficients {
            rotation: self.rotation_coefficient,
            scroll_zoom: self.scroll_zoom_coefficient,
            drag_zoom: self.drag_zoom_coefficient,
        }
    }
}

/// Primary rotates, secondary pans, middle and scroll zoom.
#[must_use]
pub fn default_bindings() -> Vec<NavigationBehavior> {
    vec![
        NavigationBehavior::drag(MouseButton::Primary, Response::Rotate),
        NavigationBehavior::drag(MouseButton::Secondary, Response::Pan),
        NavigationBehavior::drag(MouseButton::Middle, Response::Zoom),
        NavigationBehavior::scroll(Response::Zoom),
    ]
}

impl Default for NavigationOptions {
    fn default() -> Self {
        let coefficients = Coefficients::default();
        Self {
            rotation_coefficient: coefficients.rotation,
            scroll_zoom_coefficient: coefficients.scroll_zoom,
            drag_zoom_coefficient: coefficients.drag_zoom,
            fit_animation_ms: 0,
            fit_easing: EasingFunction::EASE_OUT,
            bindings: default_bindings(),
        }
    }
}
