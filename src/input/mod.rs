//! Input handling: platform-agnostic event types and the processor that
//! turns raw pointer events into drag and scroll gestures.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into gestures.
pub mod processor;

pub use event::{InputEvent, Modifiers, MouseButton};
pub use processor::{Gesture, InputProcessor};
