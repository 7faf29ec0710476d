use serde::{Deserialize, Serialize};

use crate::engine::command::EaselCommand;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// cycle_camera = "Ctrl+Digit1"
/// save_cameras = "Ctrl+KeyS"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Make the next camera slot active.
    CycleCamera,
    /// Toggle auto-rotation of the active camera.
    ToggleAutoRotate,
    /// Speed up auto-rotation of the active camera.
    IncreaseRotateSpeed,
    /// Slow down auto-rotation of the active camera.
    DecreaseRotateSpeed,
    /// Write the camera stack to the camera file.
    SaveCameras,
    /// Replace the camera stack from the camera file.
    LoadCameras,
    /// Show or hide the ground plane.
    TogglePlane,
    /// Switch the ground plane between filled and wireframe.
    TogglePlaneWireframe,
    /// Show or hide the world axes.
    ToggleAxes,
    /// Switch between light and dark background.
    ToggleDarkMode,
    /// Close the viewer.
    Quit,
}

impl KeyAction {
    /// The parameterless command this action triggers.
    #[must_use]
    pub fn to_command(self) -> EaselCommand {
        match self {
            Self::CycleCamera => EaselCommand::CycleCamera,
            Self::ToggleAutoRotate => EaselCommand::ToggleAutoRotate,
            Self::IncreaseRotateSpeed => EaselCommand::IncreaseRotateSpeed,
            Self::DecreaseRotateSpeed => EaselCommand::DecreaseRotateSpeed,
            Self::SaveCameras => EaselCommand::SaveCameras,
            Self::LoadCameras => EaselCommand::LoadCameras,
            Self::TogglePlane => EaselCommand::TogglePlane,
            Self::TogglePlaneWireframe => EaselCommand::TogglePlaneWireframe,
            Self::ToggleAxes => EaselCommand::ToggleAxes,
            Self::ToggleDarkMode => EaselCommand::ToggleDarkMode,
            Self::Quit => EaselCommand::Quit,
        }
    }
}
