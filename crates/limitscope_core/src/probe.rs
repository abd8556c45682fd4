//! Capability probes
//!
//! Each probe tries to acquire its handle from the host and reads a fixed set
//! of limits from it. Missing handles are reported as
//! [`ProbeOutcome::Unavailable`], never as errors: a host lacking a
//! generation is the normal case, and the remaining probes must still run.

use crate::host::{
    AdapterDescription, ContextKind, GlContext, GlParameter, GpuAdapter, GpuDevice, GpuLimits,
    Host, DEBUG_RENDERER_INFO,
};
use crate::record::{CapabilityRecord, Limit, ProbeOutcome, RecordBuilder};

/// GL reports uniform capacity in vec4 slots of 16 bytes each
const UNIFORM_VECTOR_BYTES: u64 = 16;

/// Probe the WebGL surface (falling back to `experimental-webgl`)
pub fn probe_webgl<H: Host>(host: &H) -> ProbeOutcome {
    let Some(gl) = host
        .create_context(ContextKind::WebGl)
        .or_else(|| host.create_context(ContextKind::ExperimentalWebGl))
    else {
        tracing::info!("WebGL context unavailable");
        return ProbeOutcome::Unavailable;
    };

    let mut record = RecordBuilder::new();
    record
        .set(Limit::TextureSize2d, gl.parameter(GlParameter::MaxTextureSize))
        .set(
            Limit::VertexTextureUnits,
            gl.parameter(GlParameter::MaxVertexTextureImageUnits),
        )
        .set(
            Limit::FragmentTextureUnits,
            gl.parameter(GlParameter::MaxTextureImageUnits),
        )
        .set(Limit::VertexAttributes, gl.parameter(GlParameter::MaxVertexAttribs))
        .set_bytes(
            Limit::VertexUniformsSize,
            uniform_vector_bytes(&gl, GlParameter::MaxVertexUniformVectors),
        )
        .set_bytes(
            Limit::FragmentUniformsSize,
            uniform_vector_bytes(&gl, GlParameter::MaxFragmentUniformVectors),
        );
    read_debug_renderer_info(&gl, &mut record);

    tracing::debug!("WebGL context probed");
    ProbeOutcome::Available(record.finish())
}

/// Probe the WebGL2 surface
pub fn probe_webgl2<H: Host>(host: &H) -> ProbeOutcome {
    let Some(gl) = host.create_context(ContextKind::WebGl2) else {
        tracing::info!("WebGL2 context unavailable");
        return ProbeOutcome::Unavailable;
    };

    let integer = |p: GlParameter| gl.parameter(p).and_then(|v| v.as_integer());

    let mut record = RecordBuilder::new();
    record
        .set(Limit::TextureSize2d, gl.parameter(GlParameter::MaxTextureSize))
        .set(Limit::TextureSize3d, gl.parameter(GlParameter::Max3dTextureSize))
        .set(
            Limit::ArrayTextureLayers,
            gl.parameter(GlParameter::MaxArrayTextureLayers),
        )
        .set(
            Limit::VertexTextureUnits,
            gl.parameter(GlParameter::MaxVertexTextureImageUnits),
        )
        .set(
            Limit::FragmentTextureUnits,
            gl.parameter(GlParameter::MaxTextureImageUnits),
        )
        .set(Limit::VertexAttributes, gl.parameter(GlParameter::MaxVertexAttribs))
        .set_bytes(
            Limit::VertexUniformsSize,
            uniform_vector_bytes(&gl, GlParameter::MaxVertexUniformVectors),
        )
        .set_bytes(
            Limit::FragmentUniformsSize,
            uniform_vector_bytes(&gl, GlParameter::MaxFragmentUniformVectors),
        )
        .set_bytes(
            Limit::UniformBufferSize,
            integer(GlParameter::MaxUniformBlockSize),
        )
        .set(
            Limit::UniformBuffersPerVertex,
            gl.parameter(GlParameter::MaxVertexUniformBlocks),
        )
        .set(
            Limit::UniformBuffersPerFragment,
            gl.parameter(GlParameter::MaxFragmentUniformBlocks),
        )
        .set_bytes(
            Limit::UniformBufferAlignment,
            integer(GlParameter::UniformBufferOffsetAlignment),
        )
        .set(Limit::RenderTargets, gl.parameter(GlParameter::MaxDrawBuffers));
    read_debug_renderer_info(&gl, &mut record);

    tracing::debug!("WebGL2 context probed");
    ProbeOutcome::Available(record.finish())
}

/// Outcome of the two-step WebGPU probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebGpuProbe {
    /// Limits of the active device session
    pub device: ProbeOutcome,
    /// Limits the adapter itself advertises
    pub adapter: ProbeOutcome,
}

impl WebGpuProbe {
    fn unavailable() -> Self {
        Self {
            device: ProbeOutcome::Unavailable,
            adapter: ProbeOutcome::Unavailable,
        }
    }
}

/// Probe WebGPU: request an adapter, then a device from it.
///
/// A missing adapter leaves both records unavailable. A refused device only
/// loses the device record; the adapter record still stands.
pub async fn probe_webgpu<H: Host>(host: &H) -> WebGpuProbe {
    if !host.has_gpu() {
        tracing::info!("WebGPU entry point unavailable");
        return WebGpuProbe::unavailable();
    }

    let Some(adapter) = host.request_adapter().await else {
        tracing::info!("WebGPU adapter unavailable");
        return WebGpuProbe::unavailable();
    };
    let adapter_record = gpu_limits(&adapter.limits()).finish();

    let device = match adapter.request_device().await {
        Some(device) => {
            let mut record = gpu_limits(&device.limits());
            if let Some(info) = adapter.info() {
                read_adapter_description(&info, &mut record);
            }
            tracing::debug!("WebGPU device probed");
            ProbeOutcome::Available(record.finish())
        }
        None => {
            tracing::info!("WebGPU device unavailable; keeping adapter limits");
            ProbeOutcome::Unavailable
        }
    };

    WebGpuProbe {
        device,
        adapter: ProbeOutcome::Available(adapter_record),
    }
}

/// Records from every probe, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probes {
    pub webgl: CapabilityRecord,
    pub webgl2: CapabilityRecord,
    pub webgpu_device: CapabilityRecord,
    pub webgpu_adapter: CapabilityRecord,
}

/// Run the three probes in sequence
pub async fn probe_all<H: Host>(host: &H) -> Probes {
    let webgl = probe_webgl(host);
    let webgl2 = probe_webgl2(host);
    let webgpu = probe_webgpu(host).await;

    let probes = Probes {
        webgl: webgl.into_record(),
        webgl2: webgl2.into_record(),
        webgpu_device: webgpu.device.into_record(),
        webgpu_adapter: webgpu.adapter.into_record(),
    };
    tracing::info!(
        webgl = probes.webgl.support(),
        webgl2 = probes.webgl2.support(),
        webgpu = probes.webgpu_device.support(),
        "capability probes finished"
    );
    probes
}

fn uniform_vector_bytes(gl: &impl GlContext, parameter: GlParameter) -> Option<u64> {
    gl.parameter(parameter)?
        .as_integer()?
        .checked_mul(UNIFORM_VECTOR_BYTES)
}

/// Vendor/renderer strings, only when the debug extension is exposed
fn read_debug_renderer_info(gl: &impl GlContext, record: &mut RecordBuilder) {
    if !gl.supports_extension(DEBUG_RENDERER_INFO) {
        tracing::debug!("{DEBUG_RENDERER_INFO} not exposed");
        return;
    }
    record
        .set(Limit::Vendor, gl.parameter(GlParameter::UnmaskedVendorWebgl))
        .set(
            Limit::Renderer,
            gl.parameter(GlParameter::UnmaskedRendererWebgl),
        );
}

fn gpu_limits(limits: &GpuLimits) -> RecordBuilder {
    let mut record = RecordBuilder::new();
    record
        .set(Limit::TextureSize2d, limits.max_texture_dimension_2d)
        .set(Limit::TextureSize3d, limits.max_texture_dimension_3d)
        .set(Limit::ArrayTextureLayers, limits.max_texture_array_layers)
        .set(
            Limit::VertexTextureUnits,
            limits.max_sampled_textures_per_shader_stage,
        )
        .set(
            Limit::FragmentTextureUnits,
            limits.max_sampled_textures_per_shader_stage,
        )
        .set(Limit::VertexAttributes, limits.max_vertex_attributes)
        .set_bytes(
            Limit::UniformBufferSize,
            limits.max_uniform_buffer_binding_size,
        )
        .set(
            Limit::UniformBuffersPerStage,
            limits.max_uniform_buffers_per_shader_stage,
        )
        .set_bytes(
            Limit::UniformBufferAlignment,
            limits.min_uniform_buffer_offset_alignment,
        )
        .set(Limit::RenderTargets, limits.max_color_attachments);
    record
}

fn read_adapter_description(info: &AdapterDescription, record: &mut RecordBuilder) {
    record
        .set(Limit::Vendor, Some(info.vendor.clone()))
        .set(
            Limit::Renderer,
            Some(format!("{} {}", info.description, info.backend)),
        );
}
