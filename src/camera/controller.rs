use glam::Vec2;

use crate::camera::core::Camera;
use crate::camera::stack::CameraStack;
use crate::camera::state::CameraState;
use crate::camera::store::CameraStore;
use crate::error::EaselError;
use crate::options::CameraOptions;

/// Multi-slot camera controller: navigation, persistence and projection.
///
/// Mutations go through the methods below and apply synchronously to the
/// active slot. [`camera`](Self::camera) is a pure query that renderers
/// call once per frame.
pub struct CameraController {
    stack: CameraStack,
    store: CameraStore,
    options: CameraOptions,
    viewport: (u32, u32),
}

impl CameraController {
    /// Build the default stack, then adopt the camera file if one exists or
    /// write the defaults to establish it.
    ///
    /// Persistence is best effort here: an unreadable or unwritable camera
    /// file is logged and the defaults are kept.
    #[must_use]
    pub fn new(options: CameraOptions, store: CameraStore) -> Self {
        let stack = CameraStack::new(&options);
        log::info!("Easel can render with {} cameras.", stack.len());

        let mut controller = Self {
            stack,
            store,
            options,
            viewport: (1, 1),
        };

        if controller.store.exists() {
            if let Err(e) = controller.load() {
                log::warn!("Keeping default cameras: {e}");
            }
        } else if let Err(e) = controller.save() {
            log::warn!("Could not establish camera file: {e}");
        }
        controller
    }

    /// Controller persisting to the file configured in `options`.
    #[must_use]
    pub fn from_options(options: CameraOptions) -> Self {
        let store = CameraStore::new(options.camera_file_path());
        Self::new(options, store)
    }

    /// The camera stack.
    #[must_use]
    pub fn stack(&self) -> &CameraStack {
        &self.stack
    }

    /// The active camera slot.
    #[must_use]
    pub fn active(&self) -> &CameraState {
        self.stack.active()
    }

    /// Navigation and projection parameters.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Backing camera file.
    #[must_use]
    pub fn store(&self) -> &CameraStore {
        &self.store
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Record a new viewport size. Zero dimensions are treated as one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    /// Viewport width / height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1 as f32
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Orbit by a pixel drag delta.
    pub fn orbit(&mut self, delta: Vec2) {
        let per_pixel =
            self.options.drag_scale * self.options.orbit_step_deg.to_radians();
        self.stack.active_mut().orbit(delta * per_pixel);
    }

    /// Pan the pivot by a pixel drag delta.
    pub fn pan(&mut self, delta: Vec2) {
        let per_pixel = self.options.drag_scale * self.options.pan_scale;
        self.stack.active_mut().pan(delta * per_pixel);
    }

    /// Dolly by a wheel delta, clamped to the scene user limit.
    pub fn zoom(&mut self, delta: f32) {
        let factor = self.options.zoom_base.powf(-delta * self.options.zoom_rate);
        let limit = self.options.scene_user_limit();
        self.stack.active_mut().dolly(factor, limit);
    }

    /// Scale the field of view by a wheel delta. Returns `false` when the
    /// result would leave the valid range and was rejected.
    pub fn zoom_fov(&mut self, delta: f32) -> bool {
        let factor = self
            .options
            .zoom_base
            .powf(-delta * self.options.fov_zoom_rate);
        self.stack.active_mut().scale_fov(factor)
    }

    // ── Stack ───────────────────────────────────────────────────────

    /// Activate the next slot. Returns the new active index.
    pub fn cycle(&mut self) -> usize {
        let index = self.stack.cycle();
        log::info!("Easel rendering with camera {index}.");
        index
    }

    /// Toggle auto-rotation of the active slot; returns the new setting.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.stack.active_mut().toggle_auto_rotate()
    }

    /// Raise the active slot's rotate speed. Returns whether it changed.
    pub fn increase_rotate_speed(&mut self) -> bool {
        self.stack.active_mut().increase_rotate_speed()
    }

    /// Lower the active slot's rotate speed. Returns whether it changed.
    pub fn decrease_rotate_speed(&mut self) -> bool {
        self.stack.active_mut().decrease_rotate_speed()
    }

    /// Whether the active slot is auto-rotating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.stack.active().auto_rotate
    }

    /// Advance auto-rotation of the active slot by one step. Returns
    /// whether anything moved.
    pub fn step(&mut self) -> bool {
        self.stack.active_mut().step()
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Write every slot to the camera file, replacing it.
    pub fn save(&self) -> Result<(), EaselError> {
        self.store.save(&self.stack.record())?;
        log::info!("Saved Easel cameras to {}", self.store.path().display());
        Ok(())
    }

    /// Replace the stack from the camera file.
    ///
    /// Returns `Ok(false)` and keeps the current cameras when no file
    /// exists.
    pub fn load(&mut self) -> Result<bool, EaselError> {
        let Some(record) = self.store.load()? else {
            log::warn!(
                "No Easel cameras found in {}. Please save first using Ctrl+S",
                self.store.path().display()
            );
            return Ok(false);
        };
        self.stack.apply_record(&record, &self.options);
        log::info!("Loaded Easel cameras from {}", self.store.path().display());
        Ok(true)
    }

    // ── Projection ──────────────────────────────────────────────────

    /// View and projection parameters of the active slot.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera_from(self.stack.active())
    }

    /// View and projection parameters of slot `index`, without switching.
    #[must_use]
    pub fn camera_for(&self, index: usize) -> Option<Camera> {
        self.stack.get(index).map(|state| self.camera_from(state))
    }

    fn camera_from(&self, state: &CameraState) -> Camera {
        let pose = state.pose();
        Camera {
            eye: pose.position,
            target: pose.look_at,
            up: pose.up,
            aspect: self.aspect(),
            fovy: state.fovy,
            znear: self.options.znear,
            zfar: self.options.zfar,
        }
    }
}
