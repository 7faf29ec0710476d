use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Display toggles for the built-in scene decorations.
pub struct DisplayOptions {
    /// Whether to draw the checkerboard ground plane.
    pub show_plane: bool,
    /// Draw the ground plane as outlines instead of filled squares.
    pub plane_wireframe: bool,
    /// Whether to draw the RGB world axes.
    pub show_axes: bool,
    /// Dark background instead of the light one.
    pub dark_mode: bool,
    /// Half-size of the ground plane.
    pub plane_extent: f32,
    /// Edge length of one checkerboard square.
    pub plane_cell_size: f32,
    /// Length of each world axis.
    pub axis_length: f32,
    /// Background color in light mode.
    pub light_clear_color: [f32; 3],
    /// Background color in dark mode.
    pub dark_clear_color: [f32; 3],
    /// Wireframe plane color in light mode.
    pub light_wire_color: [f32; 3],
    /// Wireframe plane color in dark mode.
    pub dark_wire_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_plane: false,
            plane_wireframe: false,
            show_axes: true,
            dark_mode: false,
            plane_extent: 10_000.0,
            plane_cell_size: 1_000.0,
            axis_length: 100.0,
            light_clear_color: [0.98, 0.98, 0.98],
            dark_clear_color: [0.1, 0.1, 0.1],
            light_wire_color: [0.1, 0.1, 0.1],
            dark_wire_color: [0.9, 0.9, 0.9],
        }
    }
}

impl DisplayOptions {
    /// Background color for the current mode.
    #[must_use]
    pub fn clear_color(&self) -> [f32; 4] {
        let [r, g, b] = if self.dark_mode {
            self.dark_clear_color
        } else {
            self.light_clear_color
        };
        [r, g, b, 1.0]
    }

    /// Outline color for the wireframe plane in the current mode.
    #[must_use]
    pub fn wire_color(&self) -> [f32; 4] {
        let [r, g, b] = if self.dark_mode {
            self.dark_wire_color
        } else {
            self.light_wire_color
        };
        [r, g, b, 1.0]
    }
}
