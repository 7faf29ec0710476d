use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name of the camera stack inside the OS temp directory when no
/// explicit path is configured.
pub const DEFAULT_CAMERA_FILE_NAME: &str = "easel_render_cams.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera stack layout, projection and navigation parameters.
pub struct CameraOptions {
    /// Number of camera slots created at startup. A loaded camera file
    /// overrides this.
    pub count: usize,
    /// Overall scene size. Height and zoom limit derive from it.
    pub scene_extents: f32,
    /// Distance of slot 0 from its pivot.
    pub base_distance: f32,
    /// Extra distance added per slot index.
    pub distance_step: f32,
    /// Extra yaw per slot index, in degrees.
    pub yaw_step_deg: f32,
    /// Extra pitch per slot index, in degrees.
    pub pitch_step_deg: f32,
    /// Vertical field of view in degrees for fresh slots.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Scale applied to raw pixel deltas before orbit and pan.
    pub drag_scale: f32,
    /// Orbit angle per scaled drag unit, in degrees.
    pub orbit_step_deg: f32,
    /// Pivot translation per scaled drag unit.
    pub pan_scale: f32,
    /// Base of the exponential zoom curve.
    pub zoom_base: f32,
    /// Exponent per wheel unit for distance zoom.
    pub zoom_rate: f32,
    /// Exponent per wheel unit for field-of-view zoom.
    pub fov_zoom_rate: f32,
    /// Initial auto-rotation yaw increment per step, in radians.
    pub rotate_speed: f32,
    /// Granularity of rotate speed adjustments.
    pub rotate_speed_increment: f32,
    /// Interval between auto-rotation steps, in milliseconds.
    pub step_interval_ms: u64,
    /// Where the camera stack is persisted. Defaults to a file in the OS
    /// temp directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_file: Option<PathBuf>,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            count: 3,
            scene_extents: 1_000_000.0,
            base_distance: 500.0,
            distance_step: 20.0,
            yaw_step_deg: 45.0,
            pitch_step_deg: 25.0,
            fovy: 75.0,
            znear: 1.0,
            zfar: 50_000.0,
            drag_scale: 0.01,
            orbit_step_deg: 30.0,
            pan_scale: 300.0,
            zoom_base: 1.2,
            zoom_rate: 0.01,
            fov_zoom_rate: 0.005,
            rotate_speed: 0.1,
            rotate_speed_increment: 0.02,
            step_interval_ms: 33,
            camera_file: None,
        }
    }
}

impl CameraOptions {
    /// Height of the ground plane below the origin.
    #[must_use]
    pub fn scene_height(&self) -> f32 {
        self.scene_extents / 1000.0
    }

    /// Upper bound on camera distance.
    #[must_use]
    pub fn scene_user_limit(&self) -> f32 {
        self.scene_extents / 100.0
    }

    /// Resolved camera file location.
    #[must_use]
    pub fn camera_file_path(&self) -> PathBuf {
        self.camera_file.clone().unwrap_or_else(|| {
            std::env::temp_dir().join(DEFAULT_CAMERA_FILE_NAME)
        })
    }
}
