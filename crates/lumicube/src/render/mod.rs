//! Rendering subsystem — the cube mesh, its shader program, and the
//! per-frame draw.
//!
//! Frame building is split in two: [`collect`] turns scene state into a
//! [`FramePlan`] with no GPU involvement, and [`draw`] replays that plan
//! through wgpu.

pub mod collect;
pub mod draw;
pub mod geometry;
pub mod gpu;
pub mod interface;
pub mod mesh;
pub mod pipeline;
pub mod vertex;

pub use collect::{FramePlan, prepare_frame};
pub use draw::{CubeRenderer, RenderStats};
pub use gpu::GpuContext;
pub use pipeline::ShaderSources;
