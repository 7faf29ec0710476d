//! Centralized viewer options with TOML file support.
//!
//! Camera layout and navigation tuning, display toggles and key bindings are
//! consolidated here. Options serialize to/from TOML so a session can be
//! configured from a file passed on the command line.

mod camera;
mod display;
mod keybindings;

use std::path::Path;

pub use camera::{CameraOptions, DEFAULT_CAMERA_FILE_NAME};
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::EaselError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[display]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera stack and navigation parameters.
    pub camera: CameraOptions,
    /// Display toggles and background colors.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, EaselError> {
        let content = std::fs::read_to_string(path).map_err(EaselError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, EaselError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| EaselError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), EaselError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EaselError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EaselError::Io)?;
        }
        std::fs::write(path, content).map_err(EaselError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[display]
dark_mode = true
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert!(opts.display.dark_mode);
        // Everything else should be default
        assert!(opts.display.show_axes);
        assert_eq!(opts.camera.count, 3);
        assert_eq!(opts.camera.fovy, 75.0);
    }

    #[test]
    fn scene_scale_derives_from_extents() {
        let camera = CameraOptions {
            scene_extents: 2_000_000.0,
            ..CameraOptions::default()
        };
        assert_eq!(camera.scene_height(), 2_000.0);
        assert_eq!(camera.scene_user_limit(), 20_000.0);
    }

    #[test]
    fn camera_file_defaults_to_temp_dir() {
        let camera = CameraOptions::default();
        assert_eq!(
            camera.camera_file_path(),
            std::env::temp_dir().join(DEFAULT_CAMERA_FILE_NAME)
        );

        let custom = CameraOptions {
            camera_file: Some("/tmp/elsewhere.toml".into()),
            ..CameraOptions::default()
        };
        assert_eq!(
            custom.camera_file_path(),
            Path::new("/tmp/elsewhere.toml")
        );
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Ctrl+KeyS"),
            Some(KeyAction::SaveCameras)
        );
        assert_eq!(
            opts.keybindings.lookup("Ctrl+Digit1"),
            Some(KeyAction::CycleCamera)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        // Bare key without the modifier is not bound
        assert_eq!(opts.keybindings.lookup("KeyS"), None);
    }

    #[test]
    fn rebinding_replaces_old_chord() {
        let mut opts = Options::default();
        opts.keybindings.bind(KeyAction::SaveCameras, "Ctrl+KeyK");
        assert_eq!(
            opts.keybindings.lookup("Ctrl+KeyK"),
            Some(KeyAction::SaveCameras)
        );
        assert_eq!(opts.keybindings.lookup("Ctrl+KeyS"), None);
    }

    #[test]
    fn keybindings_survive_toml_load() {
        let toml_str = r#"
[keybindings.bindings]
quit = "KeyQ"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(
            opts.keybindings.lookup("Ctrl+KeyS"),
            Some(KeyAction::SaveCameras)
        );
        assert_eq!(
            opts.keybindings.lookup("Ctrl+Digit1"),
            Some(KeyAction::CycleCamera)
        );
    }

    #[test]
    fn clear_color_follows_dark_mode() {
        let mut display = DisplayOptions::default();
        assert_eq!(display.clear_color(), [0.98, 0.98, 0.98, 1.0]);
        display.dark_mode = true;
        assert_eq!(display.clear_color(), [0.1, 0.1, 0.1, 1.0]);
    }

    #[test]
    fn wire_color_is_configurable_per_mode() {
        let toml_str = r"
[display]
light_wire_color = [0.0, 0.0, 1.0]
";
        let mut display = Options::from_toml(toml_str).unwrap().display;
        assert_eq!(display.wire_color(), [0.0, 0.0, 1.0, 1.0]);
        display.dark_mode = true;
        assert_eq!(display.wire_color(), [0.9, 0.9, 0.9, 1.0]);
    }
}
