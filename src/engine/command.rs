//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture or a programmatic call, is represented as an `EaselCommand`.
//! Consumers construct commands and pass them to
//! [`Easel::execute`](crate::Easel::execute).

use glam::Vec2;

/// A discrete or parameterized operation the viewer can perform.
///
/// ```ignore
/// easel.execute(EaselCommand::CycleCamera);
/// easel.execute(EaselCommand::Zoom { delta: 120.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EaselCommand {
    // ── Camera navigation ───────────────────────────────────────────
    /// Orbit the active camera by `delta` pixels of mouse movement.
    Orbit {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the active camera's pivot by `delta` pixels of mouse movement.
    Pan {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Dolly the active camera (positive = closer).
    Zoom {
        /// Scroll amount in wheel angle units.
        delta: f32,
    },

    /// Narrow or widen the active camera's field of view
    /// (positive = narrower).
    ZoomFov {
        /// Scroll amount in wheel angle units.
        delta: f32,
    },

    // ── Camera stack ────────────────────────────────────────────────
    /// Make the next camera slot active, wrapping around.
    CycleCamera,

    /// Toggle auto-rotation of the active camera.
    ToggleAutoRotate,

    /// Increase the active camera's auto-rotation speed by one increment.
    IncreaseRotateSpeed,

    /// Decrease the active camera's auto-rotation speed by one increment.
    DecreaseRotateSpeed,

    /// Persist every camera slot to the camera file.
    SaveCameras,

    /// Replace the camera stack from the camera file.
    LoadCameras,

    // ── Display ─────────────────────────────────────────────────────
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
