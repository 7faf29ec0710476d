//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held buttons, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and
//! [`Easel::execute`](crate::Easel::execute).

use glam::Vec2;

use super::event::{InputEvent, Modifiers, MouseButton};
use crate::engine::command::EaselCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`EaselCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     easel.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyS") {
///     easel.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last known cursor position, `None` until the first move.
    last_cursor: Option<Vec2>,
    /// Whether the primary (orbit) button is held.
    primary_pressed: bool,
    /// Whether the secondary (pan) button is held.
    secondary_pressed: bool,
    /// Currently held modifiers.
    modifiers: Modifiers,
    /// Key chord → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            last_cursor: None,
            primary_pressed: false,
            secondary_pressed: false,
            modifiers: Modifiers::NONE,
            key_bindings,
        }
    }

    /// Currently held modifiers.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Chord string for `key` under the currently held modifiers.
    #[must_use]
    pub fn chord(&self, key: &str) -> String {
        self.modifiers.chord(key)
    }

    /// Look up a key press under the current modifiers and return the bound
    /// command, if any. A binding without modifiers also fires with
    /// modifiers held.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<EaselCommand> {
        self.key_bindings
            .lookup_key(&self.chord(key), key)
            .map(|action| action.to_command())
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<EaselCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                match button {
                    MouseButton::Left => self.primary_pressed = pressed,
                    MouseButton::Right => self.secondary_pressed = pressed,
                    MouseButton::Middle => {}
                }
                None
            }
            InputEvent::Scroll { delta } => self.handle_scroll(delta),
            InputEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
                None
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera command.
    /// The primary button wins when both are held.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<EaselCommand> {
        let pos = Vec2::new(x, y);
        let delta = self.last_cursor.map_or(Vec2::ZERO, |last| pos - last);
        self.last_cursor = Some(pos);

        if self.primary_pressed {
            Some(EaselCommand::Orbit { delta })
        } else if self.secondary_pressed {
            Some(EaselCommand::Pan { delta })
        } else {
            None
        }
    }

    /// Plain scroll dollies, Ctrl+scroll changes the field of view. Any
    /// other modifier combination is ignored.
    fn handle_scroll(&self, delta: f32) -> Option<EaselCommand> {
        if self.modifiers.is_empty() {
            Some(EaselCommand::Zoom { delta })
        } else if self.modifiers == Modifiers::CONTROL {
            Some(EaselCommand::ZoomFov { delta })
        } else {
            None
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    #[test]
    fn primary_drag_orbits() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );
        assert_eq!(input.handle_event(pressed(MouseButton::Left)), None);
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 14.0, y: 7.0 }),
            Some(EaselCommand::Orbit {
                delta: Vec2::new(4.0, -3.0)
            })
        );
    }

    #[test]
    fn secondary_drag_pans() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = input.handle_event(pressed(MouseButton::Right));
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 2.0, y: 5.0 }),
            Some(EaselCommand::Pan {
                delta: Vec2::new(2.0, 5.0)
            })
        );
    }

    #[test]
    fn primary_wins_over_secondary() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(pressed(MouseButton::Right));
        let _ = input.handle_event(pressed(MouseButton::Left));
        assert!(matches!(
            input.handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 }),
            Some(EaselCommand::Orbit { .. })
        ));
    }

    #[test]
    fn release_stops_dragging() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(pressed(MouseButton::Left));
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }),
            None
        );
    }

    #[test]
    fn scroll_depends_on_modifiers() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 120.0 }),
            Some(EaselCommand::Zoom { delta: 120.0 })
        );

        let _ = input
            .handle_event(InputEvent::ModifiersChanged(Modifiers::CONTROL));
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: -120.0 }),
            Some(EaselCommand::ZoomFov { delta: -120.0 })
        );

        let _ = input.handle_event(InputEvent::ModifiersChanged(Modifiers {
            shift: true,
            ..Modifiers::NONE
        }));
        assert_eq!(input.handle_event(InputEvent::Scroll { delta: 1.0 }), None);
    }

    #[test]
    fn key_press_matches_chord() {
        let mut input = InputProcessor::new();
        assert_eq!(input.handle_key_press("KeyS"), None);

        let _ = input
            .handle_event(InputEvent::ModifiersChanged(Modifiers::CONTROL));
        assert_eq!(
            input.handle_key_press("KeyS"),
            Some(EaselCommand::SaveCameras)
        );
        assert_eq!(
            input.handle_key_press("Digit1"),
            Some(EaselCommand::CycleCamera)
        );

        let _ = input.handle_event(InputEvent::ModifiersChanged(Modifiers {
            control: true,
            shift: true,
            alt: false,
        }));
        assert_eq!(input.handle_key_press("KeyS"), None);
        assert_eq!(input.handle_key_press("Escape"), Some(EaselCommand::Quit));
    }

    #[test]
    fn chord_orders_modifiers() {
        let mods = Modifiers {
            control: true,
            alt: true,
            shift: true,
        };
        assert_eq!(mods.chord("KeyA"), "Ctrl+Alt+Shift+KeyA");
        assert_eq!(Modifiers::NONE.chord("Escape"), "Escape");
    }
}
