//! Axis-chaining Euler composition used by every camera slot.
//!
//! Roll turns the frame about world Z. Yaw then turns about the rolled Y
//! axis, and pitch about the yawed X axis. The three rotations are composed
//! as `Rx * Ry * Rz`. Navigation feel depends on this exact order, so it
//! must not be replaced by a fixed-axis Euler convention.

use glam::{Mat3, Vec3};

/// Counter-clockwise rotation about `axis` by `angle` radians.
///
/// The axis does not need to be normalized. A zero axis yields the
/// identity.
#[must_use]
pub fn axis_angle(axis: Vec3, angle: f32) -> Mat3 {
    let Some(axis) = axis.try_normalize() else {
        return Mat3::IDENTITY;
    };
    Mat3::from_axis_angle(axis, angle)
}

/// Compose the camera rotation from pitch, yaw and roll (radians).
///
/// The result maps the canonical view axis `(0, 0, d)` to the world-space
/// offset of the eye from its pivot.
#[must_use]
pub fn chained_rotation(pitch: f32, yaw: f32, roll: f32) -> Mat3 {
    let rz = axis_angle(Vec3::Z, roll);
    let ry = axis_angle(rz * Vec3::Y, yaw);
    let rx = axis_angle(ry * Vec3::X, pitch);
    rx * ry * rz
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!(a.abs_diff_eq(b, 1e-5), "{a} != {b}");
    }

    #[test]
    fn zero_angles_are_identity() {
        let r = chained_rotation(0.0, 0.0, 0.0);
        assert!(r.abs_diff_eq(Mat3::IDENTITY, 1e-6));
    }

    #[test]
    fn axis_angle_is_counter_clockwise() {
        let r = axis_angle(Vec3::Z, FRAC_PI_2);
        assert_vec_eq(r * Vec3::X, Vec3::Y);
        // Non-unit axes are normalized
        let r = axis_angle(Vec3::new(0.0, 0.0, 5.0), FRAC_PI_2);
        assert_vec_eq(r * Vec3::X, Vec3::Y);
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(axis_angle(Vec3::ZERO, 1.0), Mat3::IDENTITY);
    }

    #[test]
    fn yaw_turns_view_axis_about_y() {
        let r = chained_rotation(0.0, FRAC_PI_2, 0.0);
        assert_vec_eq(r * Vec3::Z, Vec3::X);
        assert_vec_eq(r * Vec3::Y, Vec3::Y);
    }

    #[test]
    fn pitch_turns_view_axis_about_x() {
        let r = chained_rotation(FRAC_PI_2, 0.0, 0.0);
        assert_vec_eq(r * Vec3::Z, -Vec3::Y);
        assert_vec_eq(r * Vec3::Y, Vec3::Z);
    }

    #[test]
    fn pitch_axis_follows_yaw() {
        // Pitch turns about the yawed X axis (-Z after a quarter turn),
        // not about world X.
        let yaw = FRAC_PI_2;
        let pitch = 0.3;
        let ry = Mat3::from_axis_angle(Vec3::Y, yaw);
        let rx = Mat3::from_axis_angle(ry * Vec3::X, pitch);
        let expected = rx * ry;
        assert!(chained_rotation(pitch, yaw, 0.0).abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn result_is_orthonormal() {
        let r = chained_rotation(0.7, -1.3, 0.4);
        assert!((r.determinant() - 1.0).abs() < 1e-5);
        assert!((r.transpose() * r).abs_diff_eq(Mat3::IDENTITY, 1e-5));
    }
}
