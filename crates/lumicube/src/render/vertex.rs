//! # Vertex — GPU Data Layouts
//!
//! ## Vertex
//!
//! ```text
//! CubeVertex (24 bytes)
//! ┌──────────────┬──────────────┐
//! │ position     │ normal       │
//! │ [f32; 3]     │ [f32; 3]     │
//! │ offset 0     │ offset 12    │
//! │ aPosition(0) │ aNormal(1)   │
//! └──────────────┴──────────────┘
//! ```
//!
//! ## Uniform Block
//!
//! All per-frame values go in one uniform buffer at `@group(0) @binding(0)`.
//! WGSL aligns `vec3<f32>` to 16 bytes, so each vec3 is followed by a 4-byte
//! slot. The two light switches ride in the slots after the first two vec3s:
//!
//! ```text
//! offset  member
//!      0  uModelViewMatrix      mat4x4<f32>
//!     64  uProjectionMatrix     mat4x4<f32>
//!    128  uLightDirection       vec3<f32>
//!    140  uUseDirectionalLight  u32
//!    144  uLightPosition        vec3<f32>
//!    156  uUsePositionalLight   u32
//!    160  uLightColor           vec3<f32>
//!    176  uAmbientColor         vec3<f32>
//!    192  (end)
//! ```

use bytemuck::{Pod, Zeroable};

use super::interface::ATTRIBUTES;

/// Per-vertex data: position and face normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl CubeVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<CubeVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // aPosition: vec3<f32>
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: ATTRIBUTES[0].location,
                format: wgpu::VertexFormat::Float32x3,
            },
            // aNormal: vec3<f32>
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: ATTRIBUTES[1].location,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    };
}

/// The uniform block, byte-compatible with `Uniforms` in the WGSL sources.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_direction: [f32; 3],
    pub use_directional_light: u32,
    pub light_position: [f32; 3],
    pub use_positional_light: u32,
    pub light_color: [f32; 3],
    pub _pad0: f32,
    pub ambient_color: [f32; 3],
    pub _pad1: f32,
}

impl SceneUniforms {
    pub const SIZE: u64 = std::mem::size_of::<SceneUniforms>() as u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_six_floats() {
        assert_eq!(std::mem::size_of::<CubeVertex>(), 24);
        assert_eq!(CubeVertex::LAYOUT.array_stride, 24);
    }

    #[test]
    fn uniform_block_is_192_bytes() {
        assert_eq!(SceneUniforms::SIZE, 192);
        assert_eq!(SceneUniforms::SIZE % 16, 0);
    }
}
