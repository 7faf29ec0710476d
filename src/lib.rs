// -- Lint policy ---------------------------------------------------------
// Crate-wide lints live in Cargo.toml; only test allowances are set here.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Multi-camera 3D viewer built on wgpu.
//!
//! Easel keeps a fixed set of orbiting camera slots, each with its own
//! orientation, distance, field of view, pivot and auto-rotation. The
//! active slot is driven by mouse and keyboard input and the whole set can
//! be saved to and restored from a camera file.
//!
//! # Key entry points
//!
//! - [`Easel`] - windowing-agnostic viewer state and command execution
//! - [`camera::CameraController`] - the multi-camera navigation core
//! - [`Options`] - runtime configuration (camera, display, key bindings)
//! - [`EaselModule`] - plug-in visualizations that draw into a
//!   [`DrawList`]
//! - `Viewer` (feature `viewer`) - a winit window rendering with wgpu
//!
//! # Architecture
//!
//! Input flows one way: raw events become [`EaselCommand`]s in the
//! [`input::InputProcessor`], and [`Easel::execute`] applies them to the
//! camera stack or display state, reporting a [`StateChanged`]. Rendering
//! only queries: each frame reads [`Easel::camera`] and
//! [`Easel::build_draw_list`].

pub mod camera;
pub mod draw;
pub mod engine;
pub mod error;
pub mod input;
pub mod module;
pub mod options;

#[cfg(feature = "viewer")]
pub mod gpu;
#[cfg(feature = "viewer")]
mod viewer;

pub use draw::{DrawList, Vertex};
pub use engine::command::EaselCommand;
pub use engine::{Easel, StateChanged};
pub use error::EaselError;
pub use input::{InputEvent, Modifiers, MouseButton};
pub use module::EaselModule;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
