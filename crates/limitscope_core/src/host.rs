//! Host environment abstraction
//!
//! A host exposes up to three capability surfaces: WebGL and WebGL2 contexts
//! created on demand, and a WebGPU entry point that hands out an adapter and
//! then a device. Every acquisition may come back empty.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the extension that unmasks vendor/renderer strings
pub const DEBUG_RENDERER_INFO: &str = "WEBGL_debug_renderer_info";

/// Context type requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    WebGl,
    /// Pre-standard alias of `webgl` still answered by some hosts
    ExperimentalWebGl,
    WebGl2,
}

impl ContextKind {
    pub fn name(self) -> &'static str {
        match self {
            ContextKind::WebGl => "webgl",
            ContextKind::ExperimentalWebGl => "experimental-webgl",
            ContextKind::WebGl2 => "webgl2",
        }
    }

    /// WebGL2-only parameters are invalid enums on the older contexts
    pub fn is_webgl2(self) -> bool {
        matches!(self, ContextKind::WebGl2)
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// GL parameters read by the probes, with their standard enum values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum GlParameter {
    MaxTextureSize = 0x0D33,
    Max3dTextureSize = 0x8073,
    MaxArrayTextureLayers = 0x88FF,
    MaxVertexTextureImageUnits = 0x8B4C,
    MaxTextureImageUnits = 0x8872,
    MaxVertexAttribs = 0x8869,
    MaxVertexUniformVectors = 0x8DFB,
    MaxFragmentUniformVectors = 0x8DFD,
    MaxUniformBlockSize = 0x8A30,
    MaxVertexUniformBlocks = 0x8A2B,
    MaxFragmentUniformBlocks = 0x8A2D,
    UniformBufferOffsetAlignment = 0x8A34,
    MaxDrawBuffers = 0x8824,
    /// Only meaningful with [`DEBUG_RENDERER_INFO`] enabled
    UnmaskedVendorWebgl = 0x9245,
    /// Only meaningful with [`DEBUG_RENDERER_INFO`] enabled
    UnmaskedRendererWebgl = 0x9246,
}

impl GlParameter {
    pub const ALL: [GlParameter; 15] = [
        GlParameter::MaxTextureSize,
        GlParameter::Max3dTextureSize,
        GlParameter::MaxArrayTextureLayers,
        GlParameter::MaxVertexTextureImageUnits,
        GlParameter::MaxTextureImageUnits,
        GlParameter::MaxVertexAttribs,
        GlParameter::MaxVertexUniformVectors,
        GlParameter::MaxFragmentUniformVectors,
        GlParameter::MaxUniformBlockSize,
        GlParameter::MaxVertexUniformBlocks,
        GlParameter::MaxFragmentUniformBlocks,
        GlParameter::UniformBufferOffsetAlignment,
        GlParameter::MaxDrawBuffers,
        GlParameter::UnmaskedVendorWebgl,
        GlParameter::UnmaskedRendererWebgl,
    ];

    /// The GL constant name, e.g. `MAX_TEXTURE_SIZE`
    pub fn name(self) -> &'static str {
        match self {
            GlParameter::MaxTextureSize => "MAX_TEXTURE_SIZE",
            GlParameter::Max3dTextureSize => "MAX_3D_TEXTURE_SIZE",
            GlParameter::MaxArrayTextureLayers => "MAX_ARRAY_TEXTURE_LAYERS",
            GlParameter::MaxVertexTextureImageUnits => "MAX_VERTEX_TEXTURE_IMAGE_UNITS",
            GlParameter::MaxTextureImageUnits => "MAX_TEXTURE_IMAGE_UNITS",
            GlParameter::MaxVertexAttribs => "MAX_VERTEX_ATTRIBS",
            GlParameter::MaxVertexUniformVectors => "MAX_VERTEX_UNIFORM_VECTORS",
            GlParameter::MaxFragmentUniformVectors => "MAX_FRAGMENT_UNIFORM_VECTORS",
            GlParameter::MaxUniformBlockSize => "MAX_UNIFORM_BLOCK_SIZE",
            GlParameter::MaxVertexUniformBlocks => "MAX_VERTEX_UNIFORM_BLOCKS",
            GlParameter::MaxFragmentUniformBlocks => "MAX_FRAGMENT_UNIFORM_BLOCKS",
            GlParameter::UniformBufferOffsetAlignment => "UNIFORM_BUFFER_OFFSET_ALIGNMENT",
            GlParameter::MaxDrawBuffers => "MAX_DRAW_BUFFERS",
            GlParameter::UnmaskedVendorWebgl => "UNMASKED_VENDOR_WEBGL",
            GlParameter::UnmaskedRendererWebgl => "UNMASKED_RENDERER_WEBGL",
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Raw value returned by a parameter query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(u64),
    Text(String),
}

impl ParamValue {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            ParamValue::Integer(value) => Some(*value),
            ParamValue::Text(_) => None,
        }
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(u64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// WebGPU limits read by the probes. Field names follow the WebGPU IDL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GpuLimits {
    #[serde(rename = "maxTextureDimension2D")]
    pub max_texture_dimension_2d: Option<u64>,
    #[serde(rename = "maxTextureDimension3D")]
    pub max_texture_dimension_3d: Option<u64>,
    pub max_texture_array_layers: Option<u64>,
    pub max_sampled_textures_per_shader_stage: Option<u64>,
    pub max_vertex_attributes: Option<u64>,
    pub max_uniform_buffer_binding_size: Option<u64>,
    pub max_uniform_buffers_per_shader_stage: Option<u64>,
    pub min_uniform_buffer_offset_alignment: Option<u64>,
    pub max_color_attachments: Option<u64>,
}

/// Adapter identification (`GPUAdapterInfo`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterDescription {
    pub vendor: String,
    pub description: String,
    pub backend: String,
}

/// A WebGL-style context
pub trait GlContext {
    /// `getParameter`; `None` when the host rejects or lacks the parameter
    fn parameter(&self, parameter: GlParameter) -> Option<ParamValue>;

    /// `getExtension(name) != null`
    fn supports_extension(&self, name: &str) -> bool;
}

/// A WebGPU device session
pub trait GpuDevice {
    fn limits(&self) -> GpuLimits;
}

/// A WebGPU adapter
#[async_trait(?Send)]
pub trait GpuAdapter {
    type Device: GpuDevice;

    fn limits(&self) -> GpuLimits;

    fn info(&self) -> Option<AdapterDescription>;

    async fn request_device(&self) -> Option<Self::Device>;
}

/// The environment the probes run against
#[async_trait(?Send)]
pub trait Host {
    type Context: GlContext;
    type Adapter: GpuAdapter;

    fn create_context(&self, kind: ContextKind) -> Option<Self::Context>;

    /// Whether the WebGPU entry point exists at all
    fn has_gpu(&self) -> bool;

    async fn request_adapter(&self) -> Option<Self::Adapter>;
}
