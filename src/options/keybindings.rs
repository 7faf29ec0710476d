use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "KeybindingFile")]
/// Configurable keyboard bindings mapping actions to key chords.
///
/// A chord is the winit `KeyCode` debug string, prefixed by the held
/// modifiers in `Ctrl+Alt+Shift+` order, e.g. `"Ctrl+KeyS"` or `"Escape"`.
/// A chord without modifiers matches its key under any modifiers unless a
/// more specific chord is bound.
///
/// Bindings read from a file are laid over the defaults. A default whose
/// chord is taken by a file entry is dropped.
pub struct KeybindingOptions {
    /// Maps action → key chord (e.g. `SaveCameras` → `"Ctrl+KeyS"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (chord → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

/// On-disk shape of [`KeybindingOptions`]: only the entries a file sets.
#[derive(Deserialize)]
struct KeybindingFile {
    #[serde(default)]
    bindings: HashMap<KeyAction, String>,
}

impl From<KeybindingFile> for KeybindingOptions {
    fn from(file: KeybindingFile) -> Self {
        let mut opts = Self::default();
        opts.overlay(file.bindings);
        opts
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::CycleCamera, "Ctrl+Digit1".into()),
            (KeyAction::ToggleAutoRotate, "Ctrl+KeyR".into()),
            (KeyAction::IncreaseRotateSpeed, "Ctrl+Period".into()),
            (KeyAction::DecreaseRotateSpeed, "Ctrl+Comma".into()),
            (KeyAction::SaveCameras, "Ctrl+KeyS".into()),
            (KeyAction::LoadCameras, "Ctrl+KeyL".into()),
            (KeyAction::TogglePlane, "Ctrl+KeyP".into()),
            (KeyAction::TogglePlaneWireframe, "Ctrl+KeyW".into()),
            (KeyAction::ToggleAxes, "Ctrl+KeyX".into()),
            (KeyAction::ToggleDarkMode, "Ctrl+KeyD".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (chord → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key chord.
    #[must_use]
    pub fn lookup(&self, chord: &str) -> Option<KeyAction> {
        self.key_to_action.get(chord).copied()
    }

    /// Look up `key` pressed as `chord`: the exact chord first, then the
    /// bare key.
    #[must_use]
    pub fn lookup_key(&self, chord: &str, key: &str) -> Option<KeyAction> {
        self.lookup(chord).or_else(|| self.lookup(key))
    }

    /// Replace the bindings of every action in `user`, dropping other
    /// bindings that collide with the new chords.
    pub fn overlay(&mut self, user: HashMap<KeyAction, String>) {
        self.bindings.retain(|action, chord| {
            !user.contains_key(action) && !user.values().any(|c| c == chord)
        });
        self.bindings.extend(user);
        self.rebuild_reverse_map();
    }

    /// Rebind `action` to `chord`, replacing any previous binding.
    pub fn bind(&mut self, action: KeyAction, chord: impl Into<String>) {
        let _ = self.bindings.insert(action, chord.into());
        self.rebuild_reverse_map();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_keeps_unrelated_defaults() {
        let mut opts = KeybindingOptions::default();
        opts.overlay(HashMap::from([(KeyAction::Quit, "KeyQ".to_owned())]));
        assert_eq!(opts.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(opts.lookup("Escape"), None);
        assert_eq!(opts.lookup("Ctrl+KeyS"), Some(KeyAction::SaveCameras));
        assert_eq!(opts.bindings.len(), 11);
    }

    #[test]
    fn overlay_evicts_colliding_default() {
        let mut opts = KeybindingOptions::default();
        opts.overlay(HashMap::from([(
            KeyAction::ToggleAxes,
            "Ctrl+KeyS".to_owned(),
        )]));
        assert_eq!(opts.lookup("Ctrl+KeyS"), Some(KeyAction::ToggleAxes));
        assert!(!opts.bindings.contains_key(&KeyAction::SaveCameras));
        assert_eq!(opts.lookup("Ctrl+KeyX"), None);
    }

    #[test]
    fn bare_binding_matches_any_modifiers() {
        let opts = KeybindingOptions::default();
        assert_eq!(
            opts.lookup_key("Ctrl+Escape", "Escape"),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            opts.lookup_key("Shift+Escape", "Escape"),
            Some(KeyAction::Quit)
        );
        assert_eq!(opts.lookup_key("Ctrl+Shift+KeyS", "KeyS"), None);
    }
}
