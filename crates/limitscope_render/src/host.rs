//! wgpu-backed [`Host`]

use crate::backend::{gl_parameter, gpu_limits, vendor_label};
use crate::BackendType;
use async_trait::async_trait;
use limitscope_core::host::{
    AdapterDescription, ContextKind, GlContext, GlParameter, GpuAdapter, GpuDevice, GpuLimits,
    Host, ParamValue, DEBUG_RENDERER_INFO,
};

#[derive(Debug, Clone)]
pub struct WgpuHostConfig {
    pub power_preference: wgpu::PowerPreference,
}

impl Default for WgpuHostConfig {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
        }
    }
}

/// Host probing the local GPU through wgpu
pub struct WgpuHost {
    gl: wgpu::Instance,
    primary: wgpu::Instance,
    config: WgpuHostConfig,
}

impl WgpuHost {
    pub fn new(config: WgpuHostConfig) -> Self {
        let gl = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::GL,
            ..Default::default()
        });
        let primary = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        Self {
            gl,
            primary,
            config,
        }
    }
}

impl Default for WgpuHost {
    fn default() -> Self {
        Self::new(WgpuHostConfig::default())
    }
}

#[async_trait(?Send)]
impl Host for WgpuHost {
    type Context = WgpuGlContext;
    type Adapter = WgpuAdapter;

    fn create_context(&self, kind: ContextKind) -> Option<WgpuGlContext> {
        if kind == ContextKind::ExperimentalWebGl {
            return None;
        }
        // The adapter is only held long enough to copy out what it reports.
        let adapter = self
            .gl
            .enumerate_adapters(wgpu::Backends::GL)
            .into_iter()
            .next()?;
        let info = adapter.get_info();
        tracing::debug!(%kind, adapter = %info.name, "GL adapter acquired");
        Some(WgpuGlContext {
            kind,
            limits: adapter.limits(),
            info,
        })
    }

    fn has_gpu(&self) -> bool {
        true
    }

    async fn request_adapter(&self) -> Option<WgpuAdapter> {
        let adapter = self
            .primary
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: self.config.power_preference,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await?;
        tracing::debug!(adapter = %adapter.get_info().name, "adapter acquired");
        Some(WgpuAdapter { adapter })
    }
}

/// GL-backend adapter standing in for a WebGL/WebGL2 context
pub struct WgpuGlContext {
    kind: ContextKind,
    limits: wgpu::Limits,
    info: wgpu::AdapterInfo,
}

impl GlContext for WgpuGlContext {
    fn parameter(&self, parameter: GlParameter) -> Option<ParamValue> {
        match parameter {
            GlParameter::UnmaskedVendorWebgl => Some(ParamValue::Text(vendor_label(&self.info))),
            GlParameter::UnmaskedRendererWebgl => Some(ParamValue::Text(self.info.name.clone())),
            _ => gl_parameter(self.kind, &self.limits, parameter).map(ParamValue::Integer),
        }
    }

    fn supports_extension(&self, name: &str) -> bool {
        name == DEBUG_RENDERER_INFO && !self.info.name.is_empty()
    }
}

pub struct WgpuAdapter {
    adapter: wgpu::Adapter,
}

#[async_trait(?Send)]
impl GpuAdapter for WgpuAdapter {
    type Device = WgpuDevice;

    fn limits(&self) -> GpuLimits {
        gpu_limits(&self.adapter.limits())
    }

    fn info(&self) -> Option<AdapterDescription> {
        let info = self.adapter.get_info();
        Some(AdapterDescription {
            vendor: vendor_label(&info),
            description: info.name.clone(),
            backend: BackendType::from(info.backend).name().to_string(),
        })
    }

    async fn request_device(&self) -> Option<WgpuDevice> {
        // Default limits, as a WebGPU device requested without constraints gets.
        let request = self.adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("limitscope probe device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
            },
            None,
        );
        match request.await {
            Ok((device, _queue)) => Some(WgpuDevice {
                limits: device.limits(),
            }),
            Err(err) => {
                tracing::warn!(%err, "device request refused");
                None
            }
        }
    }
}

/// Limits captured from a device session; the device itself is dropped
pub struct WgpuDevice {
    limits: wgpu::Limits,
}

impl GpuDevice for WgpuDevice {
    fn limits(&self) -> GpuLimits {
        gpu_limits(&self.limits)
    }
}
