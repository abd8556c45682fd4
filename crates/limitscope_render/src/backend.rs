//! wgpu adapter translation
//!
//! Maps what a wgpu adapter reports onto the WebGL/WebGPU vocabulary the
//! probes read.

use crate::BackendType;
use limitscope_core::host::{ContextKind, GlParameter, GpuLimits};

impl From<wgpu::Backend> for BackendType {
    fn from(backend: wgpu::Backend) -> Self {
        match backend {
            wgpu::Backend::Vulkan => BackendType::Vulkan,
            wgpu::Backend::Metal => BackendType::Metal,
            wgpu::Backend::Dx12 => BackendType::DirectX12,
            wgpu::Backend::Gl => BackendType::OpenGL,
            wgpu::Backend::BrowserWebGpu => BackendType::WebGpu,
            #[allow(unreachable_patterns)]
            _ => BackendType::Unknown,
        }
    }
}

/// Vendor name for a PCI vendor id
pub fn vendor_name(vendor_id: u32) -> Option<&'static str> {
    let name = match vendor_id {
        0x1002 | 0x1022 => "AMD",
        0x10DE => "NVIDIA",
        0x8086 => "Intel",
        0x13B5 => "ARM",
        0x5143 => "Qualcomm",
        0x1010 => "ImgTec",
        0x106B => "Apple",
        0x1414 => "Microsoft",
        0x15AD => "VMware",
        0x10005 => "Mesa",
        _ => return None,
    };
    Some(name)
}

/// Vendor label for display, falling back to the hex id
pub fn vendor_label(info: &wgpu::AdapterInfo) -> String {
    match vendor_name(info.vendor) {
        Some(name) => name.to_string(),
        None if !info.driver.is_empty() => info.driver.clone(),
        None => format!("0x{:04X}", info.vendor),
    }
}

/// WebGPU-named view of a wgpu limit set
pub fn gpu_limits(limits: &wgpu::Limits) -> GpuLimits {
    GpuLimits {
        max_texture_dimension_2d: Some(u64::from(limits.max_texture_dimension_2d)),
        max_texture_dimension_3d: Some(u64::from(limits.max_texture_dimension_3d)),
        max_texture_array_layers: Some(u64::from(limits.max_texture_array_layers)),
        max_sampled_textures_per_shader_stage: Some(u64::from(
            limits.max_sampled_textures_per_shader_stage,
        )),
        max_vertex_attributes: Some(u64::from(limits.max_vertex_attributes)),
        max_uniform_buffer_binding_size: Some(u64::from(limits.max_uniform_buffer_binding_size)),
        max_uniform_buffers_per_shader_stage: Some(u64::from(
            limits.max_uniform_buffers_per_shader_stage,
        )),
        min_uniform_buffer_offset_alignment: Some(u64::from(
            limits.min_uniform_buffer_offset_alignment,
        )),
        max_color_attachments: Some(u64::from(limits.max_color_attachments)),
    }
}

/// Answer a GL parameter from the limits of a GL-backend adapter.
///
/// wgpu derives these limits from the same GL queries, so the mapping is
/// direct. Parameters introduced by WebGL2 are invalid on the older context,
/// and uniform vector counts are not exposed by wgpu at all.
pub fn gl_parameter(kind: ContextKind, limits: &wgpu::Limits, parameter: GlParameter) -> Option<u64> {
    let value = match parameter {
        GlParameter::MaxTextureSize => limits.max_texture_dimension_2d,
        GlParameter::MaxVertexTextureImageUnits | GlParameter::MaxTextureImageUnits => {
            limits.max_sampled_textures_per_shader_stage
        }
        GlParameter::MaxVertexAttribs => limits.max_vertex_attributes,
        GlParameter::Max3dTextureSize if kind.is_webgl2() => limits.max_texture_dimension_3d,
        GlParameter::MaxArrayTextureLayers if kind.is_webgl2() => limits.max_texture_array_layers,
        GlParameter::MaxUniformBlockSize if kind.is_webgl2() => {
            return Some(u64::from(limits.max_uniform_buffer_binding_size));
        }
        GlParameter::MaxVertexUniformBlocks | GlParameter::MaxFragmentUniformBlocks
            if kind.is_webgl2() =>
        {
            limits.max_uniform_buffers_per_shader_stage
        }
        GlParameter::UniformBufferOffsetAlignment if kind.is_webgl2() => {
            limits.min_uniform_buffer_offset_alignment
        }
        GlParameter::MaxDrawBuffers if kind.is_webgl2() => limits.max_color_attachments,
        _ => return None,
    };
    Some(u64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names() {
        assert_eq!(BackendType::from(wgpu::Backend::Vulkan).name(), "Vulkan");
        assert_eq!(BackendType::from(wgpu::Backend::Gl).name(), "OpenGL");
        assert_eq!(BackendType::from(wgpu::Backend::Dx12).name(), "DirectX 12");
    }

    #[test]
    fn known_vendors() {
        assert_eq!(vendor_name(0x10DE), Some("NVIDIA"));
        assert_eq!(vendor_name(0x106B), Some("Apple"));
        assert_eq!(vendor_name(0xBEEF), None);
    }

    #[test]
    fn webgl_rejects_webgl2_parameters() {
        let limits = wgpu::Limits::downlevel_webgl2_defaults();
        for parameter in [
            GlParameter::Max3dTextureSize,
            GlParameter::MaxArrayTextureLayers,
            GlParameter::MaxUniformBlockSize,
            GlParameter::UniformBufferOffsetAlignment,
            GlParameter::MaxDrawBuffers,
        ] {
            assert_eq!(gl_parameter(ContextKind::WebGl, &limits, parameter), None);
            assert!(gl_parameter(ContextKind::WebGl2, &limits, parameter).is_some());
        }
    }

    #[test]
    fn shared_parameters_map_to_limits() {
        let limits = wgpu::Limits::downlevel_webgl2_defaults();
        assert_eq!(
            gl_parameter(ContextKind::WebGl, &limits, GlParameter::MaxTextureSize),
            Some(u64::from(limits.max_texture_dimension_2d))
        );
        assert_eq!(
            gl_parameter(ContextKind::WebGl2, &limits, GlParameter::MaxVertexAttribs),
            Some(u64::from(limits.max_vertex_attributes))
        );
    }

    #[test]
    fn uniform_vectors_are_not_exposed() {
        let limits = wgpu::Limits::default();
        assert_eq!(
            gl_parameter(ContextKind::WebGl2, &limits, GlParameter::MaxVertexUniformVectors),
            None
        );
        assert_eq!(
            gl_parameter(ContextKind::WebGl2, &limits, GlParameter::UnmaskedVendorWebgl),
            None
        );
    }

    #[test]
    fn limits_use_webgpu_names() {
        let limits = wgpu::Limits::default();
        let gpu = gpu_limits(&limits);
        assert_eq!(
            gpu.max_texture_dimension_2d,
            Some(u64::from(limits.max_texture_dimension_2d))
        );
        assert_eq!(
            gpu.max_color_attachments,
            Some(u64::from(limits.max_color_attachments))
        );
    }
}
