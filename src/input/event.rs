use std::fmt;

use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// turns them into [`Gesture`](super::Gesture) values, or directly into
/// [`OrbitalCameraRig::handle_event`](crate::camera::OrbitalCameraRig::handle_event).
///
/// # Example
///
/// ```ignore
/// rig.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// rig.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Primary,
///     pressed: true,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute viewport position.
    CursorMoved {
        /// Horizontal position in viewport pixels.
        x: f64,
        /// Vertical position in viewport pixels (down is positive).
        y: f64,
    },
    /// Mouse button pressed or released at the current cursor position.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel or trackpad scroll.
    Scroll {
        /// Horizontal scroll amount.
        delta_x: f64,
        /// Vertical scroll amount (positive = zoom in for scroll-zoom).
        delta_y: f64,
    },
    /// Modifier key state changed.
    ModifiersChanged(Modifiers),
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (usually left) mouse button.
    Primary,
    /// Secondary (usually right) mouse button.
    Secondary,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Held modifier keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Shift is held.
    pub shift: bool,
    /// Alt (option) is held.
    pub alt: bool,
    /// Control is held.
    pub control: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        control: false,
    };
    /// Only shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        alt: false,
        control: false,
    };
    /// Only alt held.
    pub const ALT: Self = Self {
        shift: false,
        alt: true,
        control: false,
    };
    /// Only control held.
    pub const CONTROL: Self = Self {
        shift: false,
        alt: false,
        control: true,
    };

    /// Union of two modifier sets.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self {
            shift: self.shift || other.shift,
            alt: self.alt || other.alt,
            control: self.control || other.control,
        }
    }

    /// Whether no modifier is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.shift && !self.alt && !self.control
    }
}

/// Renders as a `+`-terminated prefix, e.g. `shift+alt+`.
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            write!(f, "shift+")?;
        }
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.control {
            write!(f, "control+")?;
        }
        Ok(())
    }
}
