//! Input dispatch and command execution for [`Easel`].

use super::command::EaselCommand;
use super::{Easel, StateChanged};
use crate::input::InputEvent;

impl Easel {
    /// Process a platform-agnostic input event.
    ///
    /// Pointer drags and scrolls become camera commands and are executed
    /// immediately; button and modifier changes only update input state.
    ///
    /// ```ignore
    /// easel.handle_input(InputEvent::CursorMoved { x, y });
    /// easel.handle_input(InputEvent::Scroll { delta: 120.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> StateChanged {
        self.input
            .handle_event(event)
            .map_or(StateChanged::Unchanged, |cmd| self.execute(cmd))
    }

    /// Process a key press, given as a winit `KeyCode` debug string such
    /// as `"KeyS"`.
    ///
    /// Bound chords execute their command. Anything else is offered to the
    /// modules in registration order until one consumes it.
    pub fn handle_key(&mut self, key: &str) -> StateChanged {
        if let Some(cmd) = self.input.handle_key_press(key) {
            return self.execute(cmd);
        }
        let chord = self.input.chord(key);
        for module in &mut self.modules {
            if module.handle_key(&chord) {
                return StateChanged::Redraw;
            }
        }
        StateChanged::Unchanged
    }

    /// Execute a single command and report what changed.
    ///
    /// Camera file failures are logged rather than returned, so a failed
    /// save or load never interrupts the session.
    pub fn execute(&mut self, cmd: EaselCommand) -> StateChanged {
        match cmd {
            EaselCommand::Orbit { delta } => {
                self.camera.orbit(delta);
                StateChanged::Redraw
            }
            EaselCommand::Pan { delta } => {
                self.camera.pan(delta);
                StateChanged::Redraw
            }
            EaselCommand::Zoom { delta } => {
                self.camera.zoom(delta);
                StateChanged::Redraw
            }
            EaselCommand::ZoomFov { delta } => redraw_if(self.camera.zoom_fov(delta)),
            EaselCommand::CycleCamera => {
                let _ = self.camera.cycle();
                StateChanged::Redraw
            }
            EaselCommand::ToggleAutoRotate => {
                let _ = self.camera.toggle_auto_rotate();
                StateChanged::Redraw
            }
            EaselCommand::IncreaseRotateSpeed => {
                let _ = self.camera.increase_rotate_speed();
                StateChanged::Unchanged
            }
            EaselCommand::DecreaseRotateSpeed => {
                let _ = self.camera.decrease_rotate_speed();
                StateChanged::Unchanged
            }
            EaselCommand::SaveCameras => {
                if let Err(e) = self.camera.save() {
                    log::error!("Failed to save cameras: {e}");
                }
                StateChanged::Unchanged
            }
            EaselCommand::LoadCameras => match self.camera.load() {
                Ok(loaded) => redraw_if(loaded),
                Err(e) => {
                    log::error!("Failed to load cameras: {e}");
                    StateChanged::Unchanged
                }
            },
            EaselCommand::TogglePlane => {
                self.display.show_plane = !self.display.show_plane;
                StateChanged::Redraw
            }
            EaselCommand::TogglePlaneWireframe => {
                self.display.plane_wireframe = !self.display.plane_wireframe;
                StateChanged::Redraw
            }
            EaselCommand::ToggleAxes => {
                self.display.show_axes = !self.display.show_axes;
                StateChanged::Redraw
            }
            EaselCommand::ToggleDarkMode => {
                self.display.dark_mode = !self.display.dark_mode;
                if self.display.dark_mode {
                    log::info!("Enabling dark mode.");
                } else {
                    log::info!("Disabling dark mode.");
                }
                StateChanged::Redraw
            }
            EaselCommand::Quit => StateChanged::Exit,
        }
    }
}

fn redraw_if(changed: bool) -> StateChanged {
    if changed {
        StateChanged::Redraw
    } else {
        StateChanged::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::super::tests::{cleanup, easel};
    use super::*;
    use crate::draw::DrawList;
    use crate::input::{Modifiers, MouseButton};
    use crate::module::EaselModule;

    fn ctrl(e: &mut Easel) {
        let _ = e.handle_input(InputEvent::ModifiersChanged(Modifiers::CONTROL));
    }

    fn release(e: &mut Easel) {
        let _ = e.handle_input(InputEvent::ModifiersChanged(Modifiers::NONE));
    }

    #[derive(Default)]
    struct Toggle {
        shown: bool,
    }

    impl EaselModule for Toggle {
        fn name(&self) -> &str {
            "toggle"
        }

        fn draw(&self, list: &mut DrawList) {
            if self.shown {
                list.triangle([Vec3::ZERO, Vec3::X, Vec3::Y], [1.0; 4]);
            }
        }

        fn handle_key(&mut self, chord: &str) -> bool {
            if chord == "KeyT" {
                self.shown = !self.shown;
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn drag_orbits_active_camera() {
        let mut e = easel("drag");
        let yaw = e.camera_controller().active().yaw;
        let _ = e.handle_input(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = e.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let changed = e.handle_input(InputEvent::CursorMoved { x: 100.0, y: 0.0 });
        assert_eq!(changed, StateChanged::Redraw);
        assert!(e.camera_controller().active().yaw < yaw);
        cleanup(&e);
    }

    #[test]
    fn ctrl_scroll_changes_fov_not_distance() {
        let mut e = easel("ctrl-scroll");
        let before = e.camera_controller().active().clone();
        ctrl(&mut e);
        assert_eq!(
            e.handle_input(InputEvent::Scroll { delta: 120.0 }),
            StateChanged::Redraw
        );
        let after = e.camera_controller().active();
        assert!(after.fovy < before.fovy);
        assert_eq!(after.distance, before.distance);

        release(&mut e);
        let _ = e.handle_input(InputEvent::Scroll { delta: 120.0 });
        assert!(e.camera_controller().active().distance < before.distance);
        cleanup(&e);
    }

    #[test]
    fn ctrl_one_cycles_cameras() {
        let mut e = easel("cycle");
        ctrl(&mut e);
        for expected in [1, 2, 0] {
            assert_eq!(e.handle_key("Digit1"), StateChanged::Redraw);
            assert_eq!(e.camera_controller().stack().active_index(), expected);
        }
        release(&mut e);
        assert_eq!(e.handle_key("Digit1"), StateChanged::Unchanged);
        assert_eq!(e.camera_controller().stack().active_index(), 0);
        cleanup(&e);
    }

    #[test]
    fn ctrl_r_starts_stepping() {
        let mut e = easel("rotate");
        ctrl(&mut e);
        let _ = e.handle_key("KeyR");
        assert!(e.is_animating());
        let yaw = e.camera_controller().active().yaw;
        assert_eq!(e.step(), StateChanged::Redraw);
        assert!(e.camera_controller().active().yaw > yaw);

        let speed = e.camera_controller().active().rotate_speed;
        let _ = e.handle_key("Period");
        assert!(e.camera_controller().active().rotate_speed > speed);
        let _ = e.handle_key("Comma");
        assert!((e.camera_controller().active().rotate_speed - speed).abs() < 1e-6);
        cleanup(&e);
    }

    #[test]
    fn save_and_load_through_keys() {
        let mut e = easel("keys-persist");
        ctrl(&mut e);
        let _ = e.execute(EaselCommand::Orbit {
            delta: Vec2::new(40.0, 20.0),
        });
        let _ = e.handle_key("KeyS");
        let saved = e.camera_controller().stack().record();

        let _ = e.execute(EaselCommand::Zoom { delta: 360.0 });
        assert_ne!(e.camera_controller().stack().record(), saved);
        assert_eq!(e.handle_key("KeyL"), StateChanged::Redraw);
        assert_eq!(e.camera_controller().stack().record(), saved);
        cleanup(&e);
    }

    #[test]
    fn load_without_file_is_unchanged() {
        let mut e = easel("keys-absent");
        cleanup(&e);
        assert_eq!(e.execute(EaselCommand::LoadCameras), StateChanged::Unchanged);
    }

    #[test]
    fn display_toggles() {
        let mut e = easel("display");
        ctrl(&mut e);
        let _ = e.handle_key("KeyP");
        let _ = e.handle_key("KeyW");
        let _ = e.handle_key("KeyX");
        let _ = e.handle_key("KeyD");
        assert!(e.display().show_plane);
        assert!(e.display().plane_wireframe);
        assert!(!e.display().show_axes);
        assert!(e.display().dark_mode);
        assert_eq!(e.clear_color(), [0.1, 0.1, 0.1, 1.0]);

        let list = e.build_draw_list();
        assert!(list.triangles().is_empty());
        assert!(!list.lines().is_empty());
        cleanup(&e);
    }

    #[test]
    fn escape_exits() {
        let mut e = easel("escape");
        assert_eq!(e.handle_key("Escape"), StateChanged::Exit);
        cleanup(&e);
    }

    #[test]
    fn unbound_keys_reach_modules() {
        let mut e = easel("module-key");
        e.add_module(Box::<Toggle>::default());
        assert!(e.build_draw_list().triangles().is_empty());
        assert_eq!(e.handle_key("KeyT"), StateChanged::Redraw);
        assert_eq!(e.build_draw_list().triangles().len(), 3);

        ctrl(&mut e);
        assert_eq!(e.handle_key("KeyT"), StateChanged::Unchanged);
        cleanup(&e);
    }
}
