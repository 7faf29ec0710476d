//! The viewer core: camera stack, display state, input and modules.
//!
//! [`Easel`] is windowing- and GPU-agnostic. A frontend forwards raw input
//! through [`Easel::handle_input`] / [`Easel::handle_key`], drives
//! [`Easel::step`] on a timer while [`Easel::is_animating`], and each
//! frame reads [`Easel::camera`] and [`Easel::build_draw_list`].

pub mod command;
mod input;

use std::time::Duration;

use glam::Mat4;

use crate::camera::controller::CameraController;
use crate::camera::core::Camera;
use crate::camera::store::CameraStore;
use crate::draw::DrawList;
use crate::error::EaselError;
use crate::input::InputProcessor;
use crate::module::EaselModule;
use crate::options::{DisplayOptions, Options};

/// What a mutation did to the visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChanged {
    /// Nothing visible changed.
    Unchanged,
    /// The frame should be redrawn.
    Redraw,
    /// The viewer should close.
    Exit,
}

impl StateChanged {
    /// Whether a redraw was requested.
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        self == Self::Redraw
    }

    /// Combine two outcomes, keeping the strongest.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Exit, _) | (_, Self::Exit) => Self::Exit,
            (Self::Redraw, _) | (_, Self::Redraw) => Self::Redraw,
            _ => Self::Unchanged,
        }
    }
}

/// Multi-camera viewer state.
pub struct Easel {
    camera: CameraController,
    display: DisplayOptions,
    input: InputProcessor,
    modules: Vec<Box<dyn EaselModule>>,
    step_interval: Duration,
}

impl Easel {
    /// Viewer persisting cameras to the file named by `options.camera`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let store = CameraStore::new(options.camera.camera_file_path());
        Self::with_store(options, store)
    }

    /// Viewer persisting cameras through `store`.
    #[must_use]
    pub fn with_store(options: Options, store: CameraStore) -> Self {
        let Options {
            camera,
            display,
            keybindings,
        } = options;
        let step_interval = Duration::from_millis(camera.step_interval_ms.max(1));
        Self {
            camera: CameraController::new(camera, store),
            display,
            input: InputProcessor::with_key_bindings(keybindings),
            modules: Vec::new(),
            step_interval,
        }
    }

    /// Register a module. Modules draw in registration order.
    pub fn add_module(&mut self, module: Box<dyn EaselModule>) {
        log::info!("Added module {}", module.name());
        self.modules.push(module);
    }

    /// Initialize every registered module.
    ///
    /// # Errors
    ///
    /// Returns the first module error.
    pub fn init_modules(&mut self) -> Result<(), EaselError> {
        for module in &mut self.modules {
            module.init()?;
        }
        Ok(())
    }

    /// Number of registered modules.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// The camera controller.
    #[must_use]
    pub fn camera_controller(&self) -> &CameraController {
        &self.camera
    }

    /// View and projection of the active camera.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera.camera()
    }

    /// Current display toggles.
    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Background color for the current mode.
    #[must_use]
    pub fn clear_color(&self) -> [f32; 4] {
        self.display.clear_color()
    }

    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Whether the active camera needs periodic [`step`](Self::step)s.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.camera.is_animating()
    }

    /// Interval between auto-rotation steps.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    // ── Frame ───────────────────────────────────────────────────────

    /// Record a new viewport size in physical pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// One timer tick: advance auto-rotation and every module.
    pub fn step(&mut self) -> StateChanged {
        let mut redraw = self.camera.step();
        for module in &mut self.modules {
            redraw |= module.step();
        }
        if redraw {
            StateChanged::Redraw
        } else {
            StateChanged::Unchanged
        }
    }

    /// Geometry for the current frame: ground plane and axes if enabled,
    /// then every module.
    #[must_use]
    pub fn build_draw_list(&self) -> DrawList {
        let mut list = DrawList::new();
        self.draw_into(&mut list);
        list
    }

    /// Append the current frame's geometry to `list`.
    pub fn draw_into(&self, list: &mut DrawList) {
        if self.display.show_plane {
            list.checkerboard(
                self.display.plane_extent,
                self.display.plane_cell_size,
                self.camera.options().scene_height(),
                self.display.plane_wireframe,
                self.display.wire_color(),
            );
        }
        if self.display.show_axes {
            list.axes(self.display.axis_length);
        }
        for module in &self.modules {
            let _ = list.set_transform(Mat4::IDENTITY);
            module.draw(list);
        }
        let _ = list.set_transform(Mat4::IDENTITY);
    }
}
