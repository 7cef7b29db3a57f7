//! Converts raw platform events into navigation gestures.
//!
//! The `InputProcessor` owns all transient pointer state (cursor position,
//! the button that started the current drag, modifier keys). It is the only
//! thing that sits between raw window events and the camera rig's gesture
//! dispatch.

use glam::DVec2;

use super::event::{InputEvent, Modifiers, MouseButton};

/// A pointer gesture step derived from raw events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// A drag started, or restarted because the modifiers changed while the
    /// button was held.
    Begin {
        /// Button holding the drag.
        button: MouseButton,
        /// Modifiers held when the drag (re)started.
        modifiers: Modifiers,
        /// Cursor position at the start.
        point: DVec2,
    },
    /// The cursor moved while a drag is in progress.
    Drag {
        /// Current cursor position.
        point: DVec2,
        /// Movement since the previous cursor event.
        delta: DVec2,
    },
    /// The drag button was released.
    End,
    /// A scroll happened.
    Scroll {
        /// Scroll amount, x and y.
        delta: DVec2,
        /// Modifiers held while scrolling.
        modifiers: Modifiers,
    },
}

/// Tracks cursor, drag button and modifiers across raw events.
///
/// Only one button drives a drag at a time: further presses while a drag is
/// held are ignored until that button is released.
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last known cursor position in viewport pixels.
    cursor: DVec2,
    /// Button currently driving a drag.
    drag_button: Option<MouseButton>,
    /// Currently held modifier keys.
    modifiers: Modifiers,
}

impl InputProcessor {
    /// Create a processor with no button held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position.
    #[must_use]
    pub fn cursor(&self) -> DVec2 {
        self.cursor
    }

    /// Button currently driving a drag, if any.
    #[must_use]
    pub fn drag_button(&self) -> Option<MouseButton> {
        self.drag_button
    }

    /// Currently held modifiers.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Drop any drag in progress without emitting [`Gesture::End`].
    pub fn release(&mut self) {
        self.drag_button = None;
    }

    /// Process a raw input event and return zero or one gestures.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Gesture> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta_x, delta_y } => Some(Gesture::Scroll {
                delta: DVec2::new(delta_x, delta_y),
                modifiers: self.modifiers,
            }),
            InputEvent::ModifiersChanged(modifiers) => {
                self.handle_modifiers(modifiers)
            }
        }
    }

    fn handle_cursor_moved(&mut self, x: f64, y: f64) -> Option<Gesture> {
        let point = DVec2::new(x, y);
        if !point.is_finite() {
            return None;
        }
        let delta = point - self.cursor;
        self.cursor = point;
        self.drag_button.map(|_| Gesture::Drag { point, delta })
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<Gesture> {
        if pressed {
            if self.drag_button.is_some() {
                return None;
            }
            self.drag_button = Some(button);
            return Some(Gesture::Begin {
                button,
                modifiers: self.modifiers,
                point: self.cursor,
            });
        }

        if self.drag_button == Some(button) {
            self.drag_button = None;
            return Some(Gesture::End);
        }
        None
    }

    fn handle_modifiers(&mut self, modifiers: Modifiers) -> Option<Gesture> {
        if modifiers == self.modifiers {
            return None;
        }
        self.modifiers = modifiers;
        self.drag_button.map(|button| Gesture::Begin {
            button,
            modifiers,
            point: self.cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f64, y: f64) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn button(button: MouseButton, pressed: bool) -> InputEvent {
        InputEvent::MouseButton { button, pressed }
    }

    #[test]
    fn hover_produces_no_gesture() {
        let mut p = InputProcessor::new();
        assert_eq!(p.handle_event(moved(10.0, 10.0)), None);
        assert_eq!(p.cursor(), DVec2::new(10.0, 10.0));
    }

    #[test]
    fn press_drag_release_sequence() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(moved(10.0, 20.0));
        assert_eq!(
            p.handle_event(button(MouseButton::Primary, true)),
            Some(Gesture::Begin {
                button: MouseButton::Primary,
                modifiers: Modifiers::NONE,
                point: DVec2::new(10.0, 20.0),
            })
        );
        assert_eq!(
            p.handle_event(moved(13.0, 16.0)),
            Some(Gesture::Drag {
                point: DVec2::new(13.0, 16.0),
                delta: DVec2::new(3.0, -4.0),
            })
        );
        assert_eq!(
            p.handle_event(button(MouseButton::Primary, false)),
            Some(Gesture::End)
        );
        assert_eq!(p.drag_button(), None);
    }

    #[test]
    fn second_button_is_ignored_while_dragging() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(button(MouseButton::Secondary, true));
        assert_eq!(p.handle_event(button(MouseButton::Primary, true)), None);
        assert_eq!(p.handle_event(button(MouseButton::Primary, false)), None);
        assert_eq!(p.drag_button(), Some(MouseButton::Secondary));
    }

    #[test]
    fn modifier_change_mid_drag_restarts_gesture() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(moved(5.0, 5.0));
        let _ = p.handle_event(button(MouseButton::Primary, true));
        assert_eq!(
            p.handle_event(InputEvent::ModifiersChanged(Modifiers::SHIFT)),
            Some(Gesture::Begin {
                button: MouseButton::Primary,
                modifiers: Modifiers::SHIFT,
                point: DVec2::new(5.0, 5.0),
            })
        );
        // unchanged modifiers are not reported again
        assert_eq!(
            p.handle_event(InputEvent::ModifiersChanged(Modifiers::SHIFT)),
            None
        );
    }

    #[test]
    fn scroll_carries_modifiers() {
        let mut p = InputProcessor::new();
        let control = InputEvent::ModifiersChanged(Modifiers::CONTROL);
        let _ = p.handle_event(control);
        assert_eq!(
            p.handle_event(InputEvent::Scroll {
                delta_x: 0.0,
                delta_y: 3.0
            }),
            Some(Gesture::Scroll {
                delta: DVec2::new(0.0, 3.0),
                modifiers: Modifiers::CONTROL,
            })
        );
    }
}
