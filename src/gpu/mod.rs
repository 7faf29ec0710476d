//! GPU backend for the viewer.
//!
//! Provides wgpu device/surface initialization, growable vertex buffers,
//! and the renderer that draws a frame's lines and triangles.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// Shared pipeline and bind group layout helpers.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth-tested line and triangle renderer.
pub mod scene_renderer;
/// Depth attachment.
pub mod texture;
