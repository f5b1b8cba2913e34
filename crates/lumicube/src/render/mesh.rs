//! GPU copy of the cube geometry.

use wgpu::util::DeviceExt;

use super::geometry::{INDEX_COUNT, INDICES, VERTICES};

/// Vertex and index buffers uploaded once at startup.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload the static cube vertices and `u16` indices.
    pub fn cube(device: &wgpu::Device) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube vertex buffer"),
            contents: bytemuck::cast_slice(&VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // wgpu requires buffer writes in multiples of 4 bytes; 36 u16 = 72 bytes.
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube index buffer"),
            contents: bytemuck::cast_slice(&INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: INDEX_COUNT,
        }
    }
}

/// Index format matching [`INDICES`].
pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint16;
