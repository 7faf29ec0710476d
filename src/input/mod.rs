//! Input handling: event types, bindable key actions, and the input
//! processor that converts raw window events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{InputEvent, Modifiers, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
