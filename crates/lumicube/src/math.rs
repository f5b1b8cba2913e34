//! Math types and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) types so users don't need to
//! depend on it directly. The two matrix builders here are the only place the
//! cube's transforms are assembled.

pub use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Build the model-view matrix for the cube.
///
/// Starts from identity, translates by the fixed camera offset, then rotates
/// by `pitch` about X and by `yaw` about Y. Each step is post-multiplied, so
/// the rotations apply in the cube's local frame:
/// `M = T(offset) * Rx(pitch) * Ry(yaw)`.
pub fn model_view(camera: &CameraConfig, pitch: f32, yaw: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m *= Mat4::from_translation(camera.offset);
    m *= Mat4::from_rotation_x(pitch);
    m *= Mat4::from_rotation_y(yaw);
    m
}

/// Build the perspective projection.
///
/// Uses the OpenGL clip convention (depth in `[-w, w]`). The vertex shader
/// remaps depth to wgpu's `[0, w]` range so this matrix can be uploaded as-is.
pub fn projection(camera: &CameraConfig, aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(camera.fov_y, aspect, camera.near, camera.far)
}

/// Aspect ratio of a pixel surface. A zero height is treated as one pixel.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn projection_focal_term_is_cot_half_fov() {
        let camera = CameraConfig::default();
        let p = projection(&camera, 1.0).to_cols_array_2d();
        let expected = 1.0 / (PI / 8.0).tan();
        assert!(approx(p[1][1], expected), "got {}, expected {expected}", p[1][1]);
        assert!(approx(p[0][0], expected), "aspect 1 keeps x and y equal");
    }

    #[test]
    fn projection_divides_x_by_aspect() {
        let camera = CameraConfig::default();
        let p = projection(&camera, 2.0).to_cols_array_2d();
        assert!(approx(p[0][0] * 2.0, p[1][1]));
    }

    #[test]
    fn model_view_without_rotation_is_camera_offset() {
        let camera = CameraConfig::default();
        let m = model_view(&camera, 0.0, 0.0);
        assert_eq!(m, Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn model_view_applies_yaw_before_pitch_in_object_space() {
        let camera = CameraConfig::default();
        let pitch = 0.7;
        let yaw = -1.3;
        let m = model_view(&camera, pitch, yaw);

        // A point on the object's X axis: yaw moves it first, then pitch.
        let p = Vec3::X;
        let by_hand = Mat4::from_rotation_y(yaw).transform_point3(p);
        let by_hand = Mat4::from_rotation_x(pitch).transform_point3(by_hand);
        let by_hand = by_hand + camera.offset;

        let got = m.transform_point3(p);
        assert!((got - by_hand).length() < 1e-5, "got {got:?}, expected {by_hand:?}");
    }

    #[test]
    fn rotation_angles_are_periodic() {
        let camera = CameraConfig::default();
        let a = model_view(&camera, 0.25, 0.5);
        let b = model_view(&camera, 0.25 + 2.0 * PI, 0.5 - 4.0 * PI);
        assert!(a.abs_diff_eq(b, 1e-4));
    }

    #[test]
    fn aspect_ratio_guards_zero_height() {
        assert_eq!(aspect_ratio(800, 600), 800.0 / 600.0);
        assert_eq!(aspect_ratio(640, 0), 640.0);
    }
}
