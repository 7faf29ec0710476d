//! Standalone viewer window backed by winit and wgpu.
//!
//! ```no_run
//! # use easel::Viewer;
//! Viewer::builder()
//!     .with_title("Easel")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::{Easel, StateChanged},
    error::EaselError,
    gpu::{render_context::RenderContext, scene_renderer::SceneRenderer},
    module::EaselModule,
    options::Options,
    InputEvent, MouseButton,
};

/// Wheel angle units reported per scrolled line.
const WHEEL_UNITS_PER_LINE: f32 = 120.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
    modules: Vec<Box<dyn EaselModule>>,
}

impl ViewerBuilder {
    /// Create a builder with title "Easel", default options and no modules.
    fn new() -> Self {
        Self {
            options: None,
            title: "Easel".into(),
            modules: Vec::new(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Register a module to draw alongside the built-in decorations.
    #[must_use]
    pub fn with_module(mut self, module: Box<dyn EaselModule>) -> Self {
        self.modules.push(module);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
            modules: self.modules,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the scene through the active camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
    modules: Vec<Box<dyn EaselModule>>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Fails if a module does not initialize, the event loop cannot start,
    /// or the GPU cannot be set up for the window.
    pub fn run(self) -> Result<(), EaselError> {
        let mut easel = Easel::new(self.options);
        for module in self.modules {
            easel.add_module(module);
        }
        easel.init_modules()?;

        let event_loop =
            EventLoop::new().map_err(|e| EaselError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            gfx: None,
            easel,
            title: self.title,
            next_step: Instant::now(),
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| EaselError::Viewer(e.to_string()))?;
        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// GPU state, created once the window exists.
struct Graphics {
    context: RenderContext,
    renderer: SceneRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    gfx: Option<Graphics>,
    easel: Easel,
    title: String,
    /// When the next auto-rotation step is due.
    next_step: Instant,
    /// First fatal error, reported from [`Viewer::run`].
    error: Option<EaselError>,
}

/// Surface size for a window size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// Scroll amount in wheel angle units.
fn scroll_units(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y * WHEEL_UNITS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
    }
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: EaselError) {
        log::error!("{error}");
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    /// Apply the outcome of an input or command.
    fn apply(&self, event_loop: &ActiveEventLoop, changed: StateChanged) {
        match changed {
            StateChanged::Unchanged => {}
            StateChanged::Redraw => self.request_redraw(),
            StateChanged::Exit => event_loop.exit(),
        }
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.easel.resize(width, height);
        if let Some(gfx) = &mut self.gfx {
            gfx.context.resize(width, height);
            gfx.renderer.resize(&gfx.context);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let Some(gfx) = &mut self.gfx else {
            return Ok(());
        };
        let camera = self.easel.camera();
        let list = self.easel.build_draw_list();
        gfx.renderer.prepare(&gfx.context, &camera, &list);

        let frame = gfx.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gfx.context.create_encoder();
        gfx.renderer
            .render(&mut encoder, &view, self.easel.clear_color());
        gfx.context.submit(encoder);
        frame.present();
        Ok(())
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 800));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, EaselError::Viewer(e.to_string()));
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (vp_w, vp_h),
        )) {
            Ok(c) => c,
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };
        let renderer = SceneRenderer::new(&context);

        self.easel.resize(vp_w, vp_h);
        self.gfx = Some(Graphics { context, renderer });
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                let (vp_w, vp_h) = viewport_size(size);
                self.resize(vp_w, vp_h);
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => match self.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                    if let Some(gfx) = &self.gfx {
                        gfx.context.reconfigure();
                    }
                    self.request_redraw();
                }
                Err(e) => log::error!("render error: {e:?}"),
            },

            WindowEvent::MouseInput { button, state, .. } => {
                let changed = self.easel.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
                self.apply(event_loop, changed);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let changed = self.easel.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                self.apply(event_loop, changed);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let changed = self.easel.handle_input(InputEvent::Scroll {
                    delta: scroll_units(delta),
                });
                self.apply(event_loop, changed);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                let _ = self.easel.handle_input(InputEvent::ModifiersChanged(
                    modifiers.state().into(),
                ));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let changed = self.easel.handle_key(&format!("{code:?}"));
                self.apply(event_loop, changed);
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.easel.is_animating() {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }
        let now = Instant::now();
        if now >= self.next_step {
            let changed = self.easel.step();
            self.apply(event_loop, changed);
            self.next_step = now + self.easel.step_interval();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_step));
    }
}
