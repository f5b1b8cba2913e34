//! # Pipeline — Shader Compilation and Linking
//!
//! The cube is drawn by one program built from two independently compiled
//! WGSL stages:
//!
//! - **Compile**: each stage becomes a `wgpu::ShaderModule`. Creation runs
//!   inside a validation error scope, so WGSL parse and validation errors come
//!   back as [`Error::ShaderCompile`] with the compiler's diagnostics instead
//!   of surfacing later as a device-lost panic.
//!
//! - **Link**: the named interface of both stages is resolved and checked
//!   (see [`interface`](super::interface)), then both modules, the vertex
//!   layout and the uniform bind group layout are combined into a render
//!   pipeline, again inside an error scope. Interface mismatches (a renamed or
//!   relocated attribute, a reordered uniform block, stage outputs the next
//!   stage doesn't match) fail here as [`Error::ShaderLink`].
//!
//! Either failure is fatal: the renderer is never constructed, so no frame is
//! ever drawn with a broken program.
//!
//! ## Depth
//!
//! Depth testing uses `Depth32Float` with `Less`. Culling is off because the
//! cube's top and bottom faces wind clockwise (see
//! [`geometry`](super::geometry)).

use std::borrow::Cow;

use super::interface::{ATTRIBUTES, ShaderInterface, UNIFORM_BINDING, UNIFORMS};
use super::vertex::{CubeVertex, SceneUniforms};
use crate::error::{Error, Result, ShaderStage};

/// Depth texture format used by the cube pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Depth comparison applied to every fragment.
pub const DEPTH_COMPARE: wgpu::CompareFunction = wgpu::CompareFunction::Less;

const VERTEX_ENTRY: &str = "vs_main";
const FRAGMENT_ENTRY: &str = "fs_main";

/// WGSL source text for the two stages.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self {
            vertex: Cow::Borrowed(include_str!("cube.vert.wgsl")),
            fragment: Cow::Borrowed(include_str!("cube.frag.wgsl")),
        }
    }
}

/// The linked cube program and its uniform bind group layout.
pub struct ShaderPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub uniform_bind_group_layout: wgpu::BindGroupLayout,
}

impl ShaderPipeline {
    /// Compile both stages and link them for the given color target format.
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        sources: &ShaderSources,
    ) -> Result<Self> {
        let vertex = compile_stage(device, ShaderStage::Vertex, &sources.vertex)?;
        let fragment = compile_stage(device, ShaderStage::Fragment, &sources.fragment)?;
        resolve_interface(sources)?;

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("cube uniform layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: UNIFORM_BINDING,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(SceneUniforms::SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cube pipeline layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cube phong pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: Some(VERTEX_ENTRY),
                buffers: &[CubeVertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: Some(FRAGMENT_ENTRY),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: DEPTH_COMPARE,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(Error::ShaderLink {
                diagnostics: err.to_string(),
            });
        }

        log::info!(
            "Shader program linked ({} attributes, {} uniforms)",
            ATTRIBUTES.len(),
            UNIFORMS.len()
        );

        Ok(Self {
            pipeline,
            uniform_bind_group_layout,
        })
    }
}

/// Check both stages' names against the attribute and uniform tables.
fn resolve_interface(sources: &ShaderSources) -> Result<()> {
    ShaderInterface::reflect(ShaderStage::Vertex, &sources.vertex, VERTEX_ENTRY)?
        .check(ShaderStage::Vertex)?;
    ShaderInterface::reflect(ShaderStage::Fragment, &sources.fragment, FRAGMENT_ENTRY)?
        .check(ShaderStage::Fragment)
}

fn compile_stage(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let label = format!("cube {stage} shader");
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label.as_str()),
        source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
    });

    match pollster::block_on(device.pop_error_scope()) {
        Some(err) => Err(Error::ShaderCompile {
            stage,
            diagnostics: err.to_string(),
        }),
        None => Ok(module),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A device on wgpu's no-op backend. It draws nothing but runs the same
    /// shader and pipeline validation as a real adapter.
    fn noop_device() -> wgpu::Device {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::NOOP,
            backend_options: wgpu::BackendOptions {
                noop: wgpu::NoopBackendOptions { enable: true },
                ..Default::default()
            },
            ..Default::default()
        });
        let adapter =
            pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default()))
                .unwrap();
        let (device, _queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
                .unwrap();
        device
    }

    fn build(sources: &ShaderSources) -> Result<()> {
        ShaderPipeline::new(
            &noop_device(),
            wgpu::TextureFormat::Rgba8UnormSrgb,
            sources,
        )
        .map(|_| ())
    }

    #[test]
    fn default_sources_link() {
        if let Err(err) = build(&ShaderSources::default()) {
            panic!("{err}");
        }
    }

    #[test]
    fn broken_vertex_source_fails_to_compile() {
        let sources = ShaderSources {
            vertex: Cow::Borrowed("fn vs_main( {"),
            ..ShaderSources::default()
        };
        let err = build(&sources).unwrap_err();
        assert!(
            matches!(
                err,
                Error::ShaderCompile {
                    stage: ShaderStage::Vertex,
                    ..
                }
            ),
            "{err}"
        );
        assert!(err.to_string().starts_with("vertex shader failed to compile"));
    }

    #[test]
    fn broken_fragment_source_fails_to_compile() {
        let sources = ShaderSources {
            fragment: Cow::Borrowed("fn fs_main( {"),
            ..ShaderSources::default()
        };
        let err = build(&sources).unwrap_err();
        assert!(
            matches!(
                err,
                Error::ShaderCompile {
                    stage: ShaderStage::Fragment,
                    ..
                }
            ),
            "{err}"
        );
    }

    #[test]
    fn reordered_uniform_block_fails_to_link() {
        let defaults = ShaderSources::default();
        let sources = ShaderSources {
            fragment: Cow::Owned(defaults.fragment.replace(
                "    uLightColor: vec3<f32>,\n    uAmbientColor: vec3<f32>,",
                "    uAmbientColor: vec3<f32>,\n    uLightColor: vec3<f32>,",
            )),
            ..defaults
        };
        match build(&sources) {
            Err(Error::ShaderLink { diagnostics }) => {
                assert!(diagnostics.contains("uLightColor"), "{diagnostics}");
            }
            other => panic!("expected a link error, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_stage_interface_fails_to_link() {
        // The fragment stage reads a location the vertex stage never writes.
        let defaults = ShaderSources::default();
        let sources = ShaderSources {
            fragment: Cow::Owned(
                defaults
                    .fragment
                    .replace("@location(1) eye_normal", "@location(2) eye_normal"),
            ),
            ..defaults
        };
        let err = build(&sources).unwrap_err();
        assert!(matches!(err, Error::ShaderLink { .. }), "{err}");
    }

    #[test]
    fn default_sources_name_their_entry_points() {
        let sources = ShaderSources::default();
        assert!(sources.vertex.contains(VERTEX_ENTRY));
        assert!(sources.fragment.contains(FRAGMENT_ENTRY));
        assert_eq!(ATTRIBUTES.len(), CubeVertex::LAYOUT.attributes.len());
        assert_eq!(UNIFORMS.last().map(|u| u.offset + 12), Some(SceneUniforms::SIZE - 4));
    }
}
