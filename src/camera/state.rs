use glam::{Mat3, Vec2, Vec3};

use super::rotation::chained_rotation;
use crate::options::CameraOptions;

/// Exclusive bounds of the vertical field of view, in degrees.
pub const FOVY_RANGE: (f32, f32) = (1.0, 360.0);

/// Orientation, framing and auto-rotation settings of one camera slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// Rotation about the yawed X axis, radians.
    pub pitch: f32,
    /// Rotation about the rolled Y axis, radians.
    pub yaw: f32,
    /// Rotation about world Z, radians.
    pub roll: f32,
    /// Distance from the pivot to the eye.
    pub distance: f32,
    /// Vertical field of view in degrees, inside [`FOVY_RANGE`].
    pub fovy: f32,
    /// World-space pivot the camera orbits and looks at.
    pub translation: Vec3,
    /// Whether [`step`](Self::step) advances yaw.
    pub auto_rotate: bool,
    /// Yaw advanced per auto-rotation step, radians.
    pub rotate_speed: f32,
    /// Granularity of rotate speed adjustments.
    pub rotate_speed_increment: f32,
}

/// Eye placement derived from a [`CameraState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the eye looks at.
    pub look_at: Vec3,
    /// Up direction of the view.
    pub up: Vec3,
}

impl CameraState {
    /// Defaults for slot `index`: later slots start further out and turned
    /// so that every camera shows a distinct view.
    #[must_use]
    pub fn for_slot(index: usize, options: &CameraOptions) -> Self {
        let i = index as f32;
        Self {
            pitch: (options.pitch_step_deg * i).to_radians(),
            yaw: (options.yaw_step_deg * i).to_radians(),
            roll: 0.0,
            distance: options.base_distance + options.distance_step * i,
            fovy: options.fovy,
            translation: Vec3::ZERO,
            auto_rotate: false,
            rotate_speed: options.rotate_speed,
            rotate_speed_increment: options.rotate_speed_increment,
        }
    }

    /// Rotation mapping the canonical view axis into world space.
    #[must_use]
    pub fn rotation(&self) -> Mat3 {
        chained_rotation(self.pitch, self.yaw, self.roll)
    }

    /// Eye position, look-at point and up direction.
    #[must_use]
    pub fn pose(&self) -> Pose {
        let rotation = self.rotation();
        Pose {
            position: rotation * Vec3::new(0.0, 0.0, self.distance)
                + self.translation,
            look_at: rotation * Vec3::ZERO + self.translation,
            up: rotation * Vec3::Y,
        }
    }

    /// Subtract the given angles (radians) from yaw and pitch.
    pub fn orbit(&mut self, angles: Vec2) {
        self.yaw -= angles.x;
        self.pitch -= angles.y;
    }

    /// Move the pivot in the camera plane. Positive `offset.x` drags the
    /// scene right (pivot moves left), positive `offset.y` moves it up.
    pub fn pan(&mut self, offset: Vec2) {
        self.translation += self.rotation() * Vec3::new(-offset.x, offset.y, 0.0);
    }

    /// Scale the distance by `factor`, clamping to `limit`.
    pub fn dolly(&mut self, factor: f32, limit: f32) {
        self.distance = (self.distance * factor).min(limit);
    }

    /// Scale the field of view by `factor`. Results outside [`FOVY_RANGE`]
    /// are rejected; returns whether the value changed.
    pub fn scale_fov(&mut self, factor: f32) -> bool {
        let fovy = self.fovy * factor;
        if fovy > FOVY_RANGE.0 && fovy < FOVY_RANGE.1 {
            self.fovy = fovy;
            true
        } else {
            false
        }
    }

    /// Flip auto-rotation; returns the new setting.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Raise the rotate speed by one increment unless that would reach
    /// `1 - increment`. Returns whether the speed changed.
    pub fn increase_rotate_speed(&mut self) -> bool {
        if self.rotate_speed < 1.0 - self.rotate_speed_increment {
            self.rotate_speed += self.rotate_speed_increment;
            true
        } else {
            false
        }
    }

    /// Lower the rotate speed by one increment unless it is already at or
    /// below one increment. Returns whether the speed changed.
    pub fn decrease_rotate_speed(&mut self) -> bool {
        if self.rotate_speed > self.rotate_speed_increment {
            self.rotate_speed -= self.rotate_speed_increment;
            true
        } else {
            false
        }
    }

    /// Advance yaw by one auto-rotation step if enabled.
    pub fn step(&mut self) -> bool {
        if self.auto_rotate {
            self.yaw += self.rotate_speed;
        }
        self.auto_rotate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!(a.abs_diff_eq(b, 1e-3), "{a} != {b}");
    }

    fn zeroed(distance: f32) -> CameraState {
        CameraState {
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            distance,
            ..CameraState::for_slot(0, &CameraOptions::default())
        }
    }

    #[test]
    fn identity_pose_looks_down_negative_z() {
        let pose = zeroed(250.0).pose();
        assert_vec_eq(pose.position, Vec3::new(0.0, 0.0, 250.0));
        assert_vec_eq(pose.look_at, Vec3::ZERO);
        assert_vec_eq(pose.up, Vec3::Y);
    }

    #[test]
    fn pose_follows_translation() {
        let mut cam = zeroed(10.0);
        cam.translation = Vec3::new(1.0, 2.0, 3.0);
        let pose = cam.pose();
        assert_vec_eq(pose.look_at, cam.translation);
        assert_vec_eq(pose.position, Vec3::new(1.0, 2.0, 13.0));
    }

    #[test]
    fn eye_stays_at_distance_from_pivot() {
        let mut cam = zeroed(42.0);
        cam.orbit(Vec2::new(0.8, -0.4));
        cam.translation = Vec3::new(5.0, -3.0, 1.0);
        let pose = cam.pose();
        assert!((pose.position.distance(pose.look_at) - 42.0).abs() < 1e-3);
        assert!(pose.up.dot(pose.position - pose.look_at).abs() < 1e-3);
    }

    #[test]
    fn slot_defaults_are_distinct() {
        let opts = CameraOptions::default();
        let c0 = CameraState::for_slot(0, &opts);
        let c2 = CameraState::for_slot(2, &opts);
        assert_eq!(c0.distance, 500.0);
        assert_eq!(c2.distance, 540.0);
        assert_eq!(c0.yaw, 0.0);
        assert!((c2.yaw - 90f32.to_radians()).abs() < 1e-6);
        assert!((c2.pitch - 50f32.to_radians()).abs() < 1e-6);
        assert_eq!(c2.fovy, 75.0);
        assert_eq!(c2.translation, Vec3::ZERO);
    }

    #[test]
    fn pan_moves_pivot_in_view_plane() {
        let mut cam = zeroed(10.0);
        cam.pan(Vec2::new(3.0, 2.0));
        assert_vec_eq(cam.translation, Vec3::new(-3.0, 2.0, 0.0));
    }

    #[test]
    fn dolly_clamps_to_limit() {
        let mut cam = zeroed(100.0);
        cam.dolly(0.5, 1000.0);
        assert_eq!(cam.distance, 50.0);
        cam.dolly(100.0, 1000.0);
        assert_eq!(cam.distance, 1000.0);
    }

    #[test]
    fn fov_rejects_out_of_range() {
        let mut cam = zeroed(10.0);
        cam.fovy = 300.0;
        assert!(!cam.scale_fov(1.5));
        assert_eq!(cam.fovy, 300.0);
        cam.fovy = 1.5;
        assert!(!cam.scale_fov(0.5));
        assert_eq!(cam.fovy, 1.5);
        assert!(cam.scale_fov(2.0));
        assert_eq!(cam.fovy, 3.0);
    }

    #[test]
    fn rotate_speed_floor() {
        let mut cam = zeroed(10.0);
        cam.rotate_speed = cam.rotate_speed_increment;
        assert!(!cam.decrease_rotate_speed());
        assert_eq!(cam.rotate_speed, cam.rotate_speed_increment);
    }

    #[test]
    fn rotate_speed_ceiling() {
        let mut cam = zeroed(10.0);
        let ceiling = 1.0 - cam.rotate_speed_increment;
        cam.rotate_speed = ceiling;
        assert!(!cam.increase_rotate_speed());
        assert_eq!(cam.rotate_speed, ceiling);
    }

    #[test]
    fn rotate_speed_steps_by_increment() {
        let mut cam = zeroed(10.0);
        let start = cam.rotate_speed;
        assert!(cam.increase_rotate_speed());
        assert!((cam.rotate_speed - (start + cam.rotate_speed_increment)).abs() < 1e-6);
        assert!(cam.decrease_rotate_speed());
        assert!((cam.rotate_speed - start).abs() < 1e-6);
    }

    #[test]
    fn step_only_turns_when_enabled() {
        let mut cam = zeroed(10.0);
        assert!(!cam.step());
        assert_eq!(cam.yaw, 0.0);
        assert!(cam.toggle_auto_rotate());
        assert!(cam.step());
        assert_eq!(cam.yaw, cam.rotate_speed);
    }
}
