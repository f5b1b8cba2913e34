//! # Draw — Replay a Frame Plan on the GPU
//!
//! ```text
//! render(plan)
//!   ├─ acquire surface texture
//!   ├─ write plan.uniforms into the uniform buffer
//!   ├─ render pass: clear color + depth
//!   │     bind pipeline, uniforms, vertex + index buffers
//!   │     draw_indexed for each plan draw
//!   └─ submit + present
//! ```

use super::collect::FramePlan;
use super::gpu::GpuContext;
use super::mesh::{GpuMesh, INDEX_FORMAT};
use super::pipeline::{DEPTH_FORMAT, ShaderPipeline, ShaderSources};
use super::vertex::SceneUniforms;
use crate::error::Result;

/// Counters for the most recent frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub draw_calls: u32,
    pub indices: u32,
}

impl RenderStats {
    /// What a plan submits, whether or not it reaches a GPU.
    pub fn of(plan: &FramePlan) -> Self {
        Self {
            draw_calls: plan.draws.len() as u32,
            indices: plan.index_count(),
        }
    }
}

/// All GPU resources for drawing the cube. Built once after the pipeline
/// links successfully.
pub struct CubeRenderer {
    program: ShaderPipeline,
    mesh: GpuMesh,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    depth_texture: wgpu::TextureView,
}

impl CubeRenderer {
    /// Compile and link the shaders, then upload geometry and allocate the
    /// uniform and depth resources.
    pub fn new(gpu: &GpuContext, sources: &ShaderSources) -> Result<Self> {
        let device = &gpu.device;
        let program = ShaderPipeline::new(device, gpu.surface_format(), sources)?;
        let mesh = GpuMesh::cube(device);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cube uniform buffer"),
            size: SceneUniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube uniform bind group"),
            layout: &program.uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let (w, h) = gpu.surface_size();
        let depth_texture = create_depth_texture(device, w, h);

        Ok(Self {
            program,
            mesh,
            uniform_buffer,
            uniform_bind_group,
            depth_texture,
        })
    }

    /// Draw one frame.
    pub fn render(
        &self,
        gpu: &GpuContext,
        plan: &FramePlan,
    ) -> std::result::Result<RenderStats, wgpu::SurfaceError> {
        let output = gpu.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&plan.uniforms));

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("cube frame encoder"),
            });

        let clear = plan.clear_color.0;
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cube render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear[0],
                            g: clear[1],
                            b: clear[2],
                            a: clear[3],
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(plan.clear_depth),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.program.pipeline);
            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.mesh.index_buffer.slice(..), INDEX_FORMAT);
            for draw in &plan.draws {
                debug_assert!(draw.indices.end <= self.mesh.index_count);
                render_pass.draw_indexed(draw.indices.clone(), draw.base_vertex, 0..1);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(RenderStats::of(plan))
    }
}

/// Create a depth texture at the given dimensions.
fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("cube depth texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
