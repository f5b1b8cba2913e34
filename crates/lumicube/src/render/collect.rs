//! # Collect — Build the Frame from Scene State
//!
//! Everything the GPU needs for one frame is derived here, without touching
//! the GPU: clear values, the depth test, the uniform block, and the draw
//! list. [`draw`](super::draw) then replays the [`FramePlan`] against wgpu.
//!
//! ```text
//! SceneState ──► model-view  (T(offset) · Rx(pitch) · Ry(yaw))
//!            ──► projection  (fovy, width / height, near, far)
//!            ──► light vectors + switches
//!                        │
//!                        ▼
//!                  SceneUniforms ──► FramePlan { clear, depth, draws }
//! ```

use std::ops::Range;

use super::geometry::INDEX_COUNT;
use super::pipeline::DEPTH_COMPARE;
use super::vertex::SceneUniforms;
use crate::config::{CameraConfig, ClearColor};
use crate::math::{model_view, projection};
use crate::scene::SceneState;

/// One indexed triangle-list draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub indices: Range<u32>,
    pub base_vertex: i32,
}

/// Everything one frame does, in order: clear, then draw with depth testing.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub clear_color: ClearColor,
    /// Value the depth buffer is cleared to (far plane).
    pub clear_depth: f32,
    /// Depth comparison the pipeline applies to the draws.
    pub depth_compare: wgpu::CompareFunction,
    pub uniforms: SceneUniforms,
    pub draws: Vec<DrawCall>,
}

impl FramePlan {
    /// Total indices submitted by this frame.
    pub fn index_count(&self) -> u32 {
        self.draws.iter().map(|d| d.indices.end - d.indices.start).sum()
    }

    /// Whether far fragments can be rejected by the depth buffer.
    pub fn depth_test_enabled(&self) -> bool {
        self.depth_compare != wgpu::CompareFunction::Always
    }
}

/// Pack the scene into the uniform block.
pub fn collect_uniforms(scene: &SceneState, camera: &CameraConfig, aspect: f32) -> SceneUniforms {
    let light = &scene.light;
    SceneUniforms {
        model_view: model_view(camera, scene.rotation_x, scene.rotation_y).to_cols_array_2d(),
        projection: projection(camera, aspect).to_cols_array_2d(),
        light_direction: light.direction.to_array(),
        use_directional_light: scene.use_directional_light as u32,
        light_position: light.position.to_array(),
        use_positional_light: scene.use_positional_light as u32,
        light_color: light.color.to_array(),
        _pad0: 0.0,
        ambient_color: light.ambient_color.to_array(),
        _pad1: 0.0,
    }
}

/// Build the plan for one frame of the current scene.
pub fn prepare_frame(
    scene: &SceneState,
    camera: &CameraConfig,
    clear_color: ClearColor,
    aspect: f32,
) -> FramePlan {
    FramePlan {
        clear_color,
        clear_depth: 1.0,
        depth_compare: DEPTH_COMPARE,
        uniforms: collect_uniforms(scene, camera, aspect),
        draws: vec![DrawCall {
            indices: 0..INDEX_COUNT,
            base_vertex: 0,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlTuning;
    use crate::controller::update_scene;
    use crate::input::{Input, KeyCode};
    use glam::Mat4;

    fn plan(scene: &SceneState) -> FramePlan {
        prepare_frame(scene, &CameraConfig::default(), ClearColor::default(), 4.0 / 3.0)
    }

    #[test]
    fn default_frame_is_one_depth_tested_draw_of_36_indices() {
        let frame = plan(&SceneState::default());
        assert_eq!(frame.draws.len(), 1);
        assert_eq!(frame.index_count(), 36);
        assert_eq!(frame.draws[0].indices, 0..36);
        assert!(frame.depth_test_enabled());
        assert_eq!(frame.depth_compare, wgpu::CompareFunction::Less);
        assert_eq!(frame.clear_depth, 1.0);
        assert_eq!(frame.clear_color.0, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(frame.uniforms.use_directional_light, 1);
        assert_eq!(frame.uniforms.use_positional_light, 1);
    }

    #[test]
    fn uniforms_carry_light_parameters() {
        let scene = SceneState::default();
        let u = collect_uniforms(&scene, &CameraConfig::default(), 1.0);
        assert_eq!(u.light_direction, [1.0, -1.0, -1.0]);
        assert_eq!(u.light_position, [2.0, 2.0, 2.0]);
        assert_eq!(u.light_color, [1.0, 1.0, 1.0]);
        assert_eq!(u.ambient_color, [0.1, 0.1, 0.1]);
    }

    #[test]
    fn switches_upload_as_zero_or_one() {
        let mut scene = SceneState::default();
        scene.use_directional_light = false;
        let u = collect_uniforms(&scene, &CameraConfig::default(), 1.0);
        assert_eq!(u.use_directional_light, 0);
        assert_eq!(u.use_positional_light, 1);
    }

    #[test]
    fn projection_uses_surface_aspect() {
        let u = collect_uniforms(&SceneState::default(), &CameraConfig::default(), 2.0);
        let p = u.projection;
        assert!((p[0][0] * 2.0 - p[1][1]).abs() < 1e-5);
    }

    #[test]
    fn model_view_follows_scene_rotation() {
        let mut scene = SceneState::default();
        scene.rotation_x = 0.3;
        scene.rotation_y = -0.8;
        let u = collect_uniforms(&scene, &CameraConfig::default(), 1.0);
        let expected = Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -5.0))
            * Mat4::from_rotation_x(0.3)
            * Mat4::from_rotation_y(-0.8);
        assert!(Mat4::from_cols_array_2d(&u.model_view).abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn frame_reflects_the_update_that_preceded_it() {
        let mut scene = SceneState::default();
        let mut keys = Input::new();
        keys.press(KeyCode::Digit2);
        keys.press(KeyCode::KeyD);
        update_scene(&mut scene, &keys, &ControlTuning::default());

        let frame = plan(&scene);
        assert_eq!(frame.uniforms.use_positional_light, 0);
        assert_eq!(frame.uniforms.light_position[0], 2.0 + 0.1);
        let idle = model_view(&CameraConfig::default(), 0.006, 0.006).to_cols_array_2d();
        assert_eq!(frame.uniforms.model_view, idle);
    }
}
