//! Host backed by a recorded capability snapshot
//!
//! A snapshot is a JSON document describing which capability surfaces a host
//! exposes and what they report:
//!
//! ```json
//! {
//!   "webgl":  { "parameters": { "MAX_TEXTURE_SIZE": 16384 }, "extensions": ["WEBGL_debug_renderer_info"] },
//!   "webgl2": { "parameters": { "MAX_3D_TEXTURE_SIZE": 2048 } },
//!   "gpu": {
//!     "adapter": {
//!       "limits": { "maxTextureDimension2D": 16384 },
//!       "info": { "vendor": "nvidia", "description": "GeForce", "backend": "Vulkan" },
//!       "device": { "limits": { "maxTextureDimension2D": 8192 } }
//!     }
//!   }
//! }
//! ```
//!
//! Missing sections mean the host does not offer that surface.

use crate::host::{
    AdapterDescription, ContextKind, GlContext, GlParameter, GpuAdapter, GpuDevice, GpuLimits,
    Host, ParamValue,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A recorded WebGL/WebGL2 context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSnapshot {
    /// Keyed by GL constant name, e.g. `MAX_TEXTURE_SIZE`
    pub parameters: BTreeMap<String, ParamValue>,
    pub extensions: BTreeSet<String>,
}

impl GlContext for ContextSnapshot {
    fn parameter(&self, parameter: GlParameter) -> Option<ParamValue> {
        self.parameters.get(parameter.name()).cloned()
    }

    fn supports_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSnapshot {
    pub limits: GpuLimits,
}

impl GpuDevice for DeviceSnapshot {
    fn limits(&self) -> GpuLimits {
        self.limits.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterSnapshot {
    pub limits: GpuLimits,
    pub info: Option<AdapterDescription>,
    /// `None` when the adapter refuses to create a device
    pub device: Option<DeviceSnapshot>,
}

#[async_trait(?Send)]
impl GpuAdapter for AdapterSnapshot {
    type Device = DeviceSnapshot;

    fn limits(&self) -> GpuLimits {
        self.limits.clone()
    }

    fn info(&self) -> Option<AdapterDescription> {
        self.info.clone()
    }

    async fn request_device(&self) -> Option<DeviceSnapshot> {
        self.device.clone()
    }
}

/// The WebGPU entry point; `adapter` is `None` when no adapter is offered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuSnapshot {
    pub adapter: Option<AdapterSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotHost {
    pub webgl: Option<ContextSnapshot>,
    #[serde(rename = "experimental-webgl")]
    pub experimental_webgl: Option<ContextSnapshot>,
    pub webgl2: Option<ContextSnapshot>,
    pub gpu: Option<GpuSnapshot>,
}

impl SnapshotHost {
    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[async_trait(?Send)]
impl Host for SnapshotHost {
    type Context = ContextSnapshot;
    type Adapter = AdapterSnapshot;

    fn create_context(&self, kind: ContextKind) -> Option<ContextSnapshot> {
        match kind {
            ContextKind::WebGl => self.webgl.clone(),
            ContextKind::ExperimentalWebGl => self.experimental_webgl.clone(),
            ContextKind::WebGl2 => self.webgl2.clone(),
        }
    }

    fn has_gpu(&self) -> bool {
        self.gpu.is_some()
    }

    async fn request_adapter(&self) -> Option<AdapterSnapshot> {
        self.gpu.as_ref()?.adapter.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_offers_nothing() {
        let host = SnapshotHost::from_json("{}").unwrap();
        assert!(host.create_context(ContextKind::WebGl).is_none());
        assert!(host.create_context(ContextKind::WebGl2).is_none());
        assert!(!host.has_gpu());
        assert!(pollster::block_on(host.request_adapter()).is_none());
    }

    #[test]
    fn contexts_answer_by_constant_name() {
        let host = SnapshotHost::from_value(json!({
            "webgl2": {
                "parameters": { "MAX_3D_TEXTURE_SIZE": 2048 },
                "extensions": ["WEBGL_debug_renderer_info"]
            }
        }))
        .unwrap();
        let gl = host.create_context(ContextKind::WebGl2).unwrap();

        assert_eq!(
            gl.parameter(GlParameter::Max3dTextureSize),
            Some(ParamValue::Integer(2048))
        );
        assert_eq!(gl.parameter(GlParameter::MaxTextureSize), None);
        assert!(gl.supports_extension("WEBGL_debug_renderer_info"));
        assert!(!gl.supports_extension("OES_texture_float"));
    }

    #[test]
    fn gpu_without_adapter() {
        let host = SnapshotHost::from_value(json!({ "gpu": { "adapter": null } })).unwrap();
        assert!(host.has_gpu());
        assert!(pollster::block_on(host.request_adapter()).is_none());
    }

    #[test]
    fn adapter_without_device() {
        let host = SnapshotHost::from_value(json!({
            "gpu": { "adapter": { "limits": { "maxVertexAttributes": 16 } } }
        }))
        .unwrap();
        let adapter = pollster::block_on(host.request_adapter()).unwrap();
        assert_eq!(adapter.limits().max_vertex_attributes, Some(16));
        assert!(adapter.info().is_none());
        assert!(pollster::block_on(adapter.request_device()).is_none());
    }

    #[test]
    fn demo_snapshot_parses() {
        let host = SnapshotHost::from_json(include_str!("../../../demos/snapshot.json")).unwrap();
        assert!(host.create_context(ContextKind::WebGl).is_some());
        assert!(host.create_context(ContextKind::ExperimentalWebGl).is_none());
        let adapter = pollster::block_on(host.request_adapter()).unwrap();
        assert_eq!(adapter.info().unwrap().backend, "D3D12");
        assert!(adapter.device.is_some());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = SnapshotHost::from_json(r#"{ "webgl": 3 }"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SnapshotHost::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
