//! Multi-camera navigation core.
//!
//! A fixed set of orbiting camera slots, one of which is active. Each slot
//! carries its own Euler angles, distance, field of view, pivot and
//! auto-rotation settings. The whole set persists to a camera file.

/// Slot-aware controller: navigation, persistence and projection.
pub mod controller;
/// Camera view/projection and GPU uniform types.
pub mod core;
/// Axis-chaining Euler rotation.
pub mod rotation;
/// Ordered camera slots with one active.
pub mod stack;
/// Per-slot camera state and derived pose.
pub mod state;
/// Camera file persistence.
pub mod store;

pub use self::controller::CameraController;
pub use self::core::{Camera, CameraUniform};
pub use self::stack::CameraStack;
pub use self::state::{CameraState, Pose, FOVY_RANGE};
pub use self::store::{CameraRecord, CameraStore};
