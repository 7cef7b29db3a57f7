use std::fmt;

use serde::{Deserialize, Serialize};

use crate::input::{Modifiers, MouseButton};

/// How the camera responds to a matched input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    /// Shift the orbit origin in the view plane.
    Pan,
    /// Scale the orbit distance.
    Zoom,
    /// Rotate about the orbit origin.
    Rotate,
}

/// The input half of a [`NavigationBehavior`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputCondition {
    /// Dragging with `button` held while exactly `modifiers` are held.
    Drag {
        /// Button that drives the drag.
        button: MouseButton,
        /// Modifiers that must be held.
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Scrolling while exactly `modifiers` are held.
    Scroll {
        /// Modifiers that must be held.
        #[serde(default)]
        modifiers: Modifiers,
    },
}

impl InputCondition {
    /// Modifiers this condition requires.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        match self {
            Self::Drag { modifiers, .. } | Self::Scroll { modifiers } => {
                *modifiers
            }
        }
    }
}

/// Declarative mapping from an input condition to a camera response.
///
/// Two behaviors with the same [`InputCondition`] compete for the same
/// input; the registry keeps at most one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationBehavior {
    /// What the camera does in response.
    pub response: Response,
    /// Input that triggers the behavior.
    pub input: InputCondition,
}

impl NavigationBehavior {
    /// Drag with `button` and no modifiers.
    #[must_use]
    pub fn drag(button: MouseButton, response: Response) -> Self {
        Self {
            input: InputCondition::Drag {
                button,
                modifiers: Modifiers::NONE,
            },
            response,
        }
    }

    /// Scroll with no modifiers.
    #[must_use]
    pub fn scroll(response: Response) -> Self {
        Self {
            input: InputCondition::Scroll {
                modifiers: Modifiers::NONE,
            },
            response,
        }
    }

    /// Same behavior requiring `modifiers`.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        match &mut self.input {
            InputCondition::Drag { modifiers: m, .. }
            | InputCondition::Scroll { modifiers: m } => *m = modifiers,
        }
        self
    }

    /// Whether both behaviors react to the same input, ignoring response.
    #[must_use]
    pub fn input_conditions_match(&self, other: &Self) -> bool {
        self.input == other.input
    }
}

impl fmt::Display for NavigationBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.input {
            InputCondition::Drag { button, modifiers } => {
                write!(f, "{modifiers}{button:?} drag")?;
            }
            InputCondition::Scroll { modifiers } => {
                write!(f, "{modifiers}scroll")?;
            }
        }
        write!(f, " -> {:?}", self.response)
    }
}
