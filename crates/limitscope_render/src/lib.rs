//! Limitscope Render
//!
//! Native host backed by wgpu: the GL backend stands in for the WebGL
//! contexts, the primary backends (Vulkan, Metal, DX12) for WebGPU.

pub mod backend;
pub mod host;

pub use host::{WgpuHost, WgpuHostConfig};
pub use wgpu;

/// Rendering backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Metal (macOS, iOS)
    Metal,
    /// DirectX 12 (Windows)
    DirectX12,
    /// Vulkan (cross-platform)
    Vulkan,
    /// OpenGL / GLES (cross-platform, fallback)
    OpenGL,
    /// WebGPU (browser)
    WebGpu,
    /// No real backend
    Unknown,
}

impl BackendType {
    /// Name as shown in the renderer string
    pub fn name(self) -> &'static str {
        match self {
            BackendType::Metal => "Metal",
            BackendType::DirectX12 => "DirectX 12",
            BackendType::Vulkan => "Vulkan",
            BackendType::OpenGL => "OpenGL",
            BackendType::WebGpu => "WebGPU",
            BackendType::Unknown => "Unknown",
        }
    }
}
