//! Demo configuration.
//!
//! There is no config file: a [`DemoConfig`] is built in code and handed to
//! [`Demo::with_config`](crate::demo::Demo::with_config). `Default` gives the
//! stock demo, and the builder methods override individual pieces.

use std::f32::consts::FRAC_PI_4;

use glam::Vec3;

use crate::scene::Light;

/// Background color the framebuffer is cleared to each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor(pub [f64; 4]);

impl Default for ClearColor {
    fn default() -> Self {
        // Opaque black.
        Self([0.0, 0.0, 0.0, 1.0])
    }
}

/// Fixed camera placement and lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Translation applied before the cube's rotations.
    pub offset: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 0.0, -5.0),
            fov_y: FRAC_PI_4,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Per-tick increments applied by the input controller.
///
/// These are per tick, not per second: speed follows the display refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlTuning {
    /// Radians added per tick while a rotation key is held.
    pub rotation_step: f32,
    /// Radians added to both angles on ticks with no rotation key held.
    pub idle_step: f32,
    /// Units the light moves per tick while a light key is held.
    pub light_step: f32,
}

impl Default for ControlTuning {
    fn default() -> Self {
        Self {
            rotation_step: 0.1,
            idle_step: 0.006,
            light_step: 0.1,
        }
    }
}

/// Everything the demo needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    /// Fixed inner size of the window in logical pixels.
    pub size: (u32, u32),
    pub clear_color: ClearColor,
    pub camera: CameraConfig,
    pub controls: ControlTuning,
    /// Light parameters at startup.
    pub light: Light,
    /// Frames between debug statistics lines. Zero disables them.
    pub stats_interval: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "lumicube".to_string(),
            size: (800, 600),
            clear_color: ClearColor::default(),
            camera: CameraConfig::default(),
            controls: ControlTuning::default(),
            light: Light::default(),
            stats_interval: 300,
        }
    }
}

impl DemoConfig {
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width.max(1), height.max(1));
        self
    }

    pub fn clear_color(mut self, color: ClearColor) -> Self {
        self.clear_color = color;
        self
    }

    pub fn camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn controls(mut self, controls: ControlTuning) -> Self {
        self.controls = controls;
        self
    }

    pub fn light(mut self, light: Light) -> Self {
        self.light = light;
        self
    }

    pub fn stats_interval(mut self, frames: u64) -> Self {
        self.stats_interval = frames;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_and_camera() {
        let config = DemoConfig::default();
        assert_eq!(config.clear_color.0, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(config.camera.offset, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(config.camera.fov_y, std::f32::consts::PI / 4.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.camera.far, 100.0);
        assert_eq!(config.controls.rotation_step, 0.1);
        assert_eq!(config.controls.idle_step, 0.006);
        assert_eq!(config.controls.light_step, 0.1);
    }

    #[test]
    fn size_is_clamped_to_one_pixel() {
        let config = DemoConfig::default().size(0, 0);
        assert_eq!(config.size, (1, 1));
    }

    #[test]
    fn builder_overrides_single_fields() {
        let config = DemoConfig::default()
            .title("spin")
            .stats_interval(0)
            .controls(ControlTuning {
                idle_step: 0.0,
                ..ControlTuning::default()
            });
        assert_eq!(config.title, "spin");
        assert_eq!(config.stats_interval, 0);
        assert_eq!(config.controls.idle_step, 0.0);
        assert_eq!(config.controls.rotation_step, 0.1);
        assert_eq!(config.camera, CameraConfig::default());
    }
}
