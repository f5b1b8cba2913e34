//! Mutable scene state.
//!
//! [`SceneState`] is the single record shared between the input controller
//! (the only writer) and the renderer (the only reader). Both run on the event
//! loop thread, one after the other, so it needs no synchronization.

use glam::Vec3;

/// Combined directional + positional light parameters.
///
/// Only `position` changes after startup (moved by the light keys).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Direction the directional light travels. Normalized in the shader.
    pub direction: Vec3,
    /// Eye-space position of the positional light.
    pub position: Vec3,
    /// RGB in `[0, 1]`.
    pub color: Vec3,
    /// RGB in `[0, 1]`.
    pub ambient_color: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: Vec3::new(1.0, -1.0, -1.0),
            position: Vec3::new(2.0, 2.0, 2.0),
            color: Vec3::ONE,
            ambient_color: Vec3::splat(0.1),
        }
    }
}

/// Rotation angles, light, and the two light-model switches.
///
/// Angles are radians and are never wrapped; every consumer goes through
/// trigonometric functions, which are periodic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    /// Pitch, about the X axis.
    pub rotation_x: f32,
    /// Yaw, about the Y axis.
    pub rotation_y: f32,
    pub light: Light,
    pub use_directional_light: bool,
    pub use_positional_light: bool,
}

impl SceneState {
    /// Unrotated cube with both light models enabled.
    pub fn new(light: Light) -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            light,
            use_directional_light: true,
            use_positional_light: true,
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(Light::default())
    }
}
