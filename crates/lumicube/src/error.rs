//! Error types.
//!
//! Almost every error here is an initialization failure. Once the window,
//! device and shader pipeline exist, the only fatal per-frame error is the
//! GPU running out of memory while acquiring a surface texture. Other surface
//! errors are recovered in place by the window loop.

use std::fmt;

/// A shader stage, used to attribute compile diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Fatal errors that stop the demo from starting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats for this adapter")]
    UnsupportedSurface,

    #[error("{stage} shader failed to compile:\n{diagnostics}")]
    ShaderCompile {
        stage: ShaderStage,
        diagnostics: String,
    },

    #[error("shader program failed to link:\n{diagnostics}")]
    ShaderLink { diagnostics: String },

    #[error("GPU ran out of memory while acquiring a frame")]
    GpuOutOfMemory,
}

pub type Result<T> = std::result::Result<T, Error>;
