//! Pluggable visualizations hosted by the viewer.

use crate::draw::DrawList;
use crate::error::EaselError;

/// A visualization the viewer drives alongside its own scene decorations.
///
/// Modules are initialized once, stepped on every auto-rotation tick,
/// asked to draw every frame, and offered any key the viewer's bindings
/// do not claim.
pub trait EaselModule {
    /// Human-readable name used in log messages.
    fn name(&self) -> &str;

    /// One-time setup before the first frame.
    ///
    /// # Errors
    ///
    /// An error aborts viewer startup.
    fn init(&mut self) -> Result<(), EaselError> {
        Ok(())
    }

    /// Advance module state by one tick. Returns `true` if a redraw is
    /// needed.
    fn step(&mut self) -> bool {
        false
    }

    /// Append this frame's geometry.
    fn draw(&self, list: &mut DrawList);

    /// Handle a key chord (e.g. `"KeyT"`, `"Ctrl+KeyT"`) not bound to a
    /// viewer action. Returns `true` if the module consumed it and needs a
    /// redraw.
    fn handle_key(&mut self, _chord: &str) -> bool {
        false
    }
}
