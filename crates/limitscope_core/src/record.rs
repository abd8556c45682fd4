//! Capability records produced by the probes

use crate::format::{format_bytes, NOT_AVAILABLE};
use crate::host::ParamValue;
use std::collections::BTreeMap;
use std::fmt;

/// Logical metric a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Limit {
    TextureSize2d,
    TextureSize3d,
    ArrayTextureLayers,
    VertexTextureUnits,
    FragmentTextureUnits,
    VertexAttributes,
    VertexUniformsSize,
    FragmentUniformsSize,
    UniformBufferSize,
    UniformBuffersPerVertex,
    UniformBuffersPerFragment,
    /// WebGPU reports a single per-stage count for every shader stage
    UniformBuffersPerStage,
    UniformBufferAlignment,
    RenderTargets,
    Vendor,
    Renderer,
}

/// A displayable value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Integer(u64),
    Text(String),
}

impl Cell {
    /// Byte count rendered through [`format_bytes`]
    pub fn bytes(bytes: Option<u64>) -> Self {
        Cell::Text(format_bytes(bytes))
    }
}

impl From<ParamValue> for Cell {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Integer(n) => Cell::Integer(n),
            ParamValue::Text(s) => Cell::Text(s),
        }
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Integer(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// Render an optional cell, falling back to [`NOT_AVAILABLE`]
pub fn display_or_unavailable(cell: Option<&Cell>) -> String {
    cell.map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string)
}

/// Limits read from one capability surface.
///
/// An unsupported record carries no values at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapabilityRecord {
    support: bool,
    values: BTreeMap<Limit, Cell>,
}

impl CapabilityRecord {
    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn supported(values: BTreeMap<Limit, Cell>) -> Self {
        Self {
            support: true,
            values,
        }
    }

    pub fn support(&self) -> bool {
        self.support
    }

    pub fn get(&self, limit: Limit) -> Option<&Cell> {
        self.values.get(&limit)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Collects values for a record under construction.
///
/// Absent values are skipped so that the finished record only holds what the
/// host actually reported.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    values: BTreeMap<Limit, Cell>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, limit: Limit, value: Option<impl Into<Cell>>) -> &mut Self {
        if let Some(value) = value {
            self.values.insert(limit, value.into());
        }
        self
    }

    pub fn set_bytes(&mut self, limit: Limit, bytes: Option<u64>) -> &mut Self {
        self.values.insert(limit, Cell::bytes(bytes));
        self
    }

    pub fn finish(self) -> CapabilityRecord {
        CapabilityRecord::supported(self.values)
    }
}

/// Result of one probe: either a populated record or nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Available(CapabilityRecord),
    Unavailable,
}

impl ProbeOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Available(_))
    }

    /// Collapse into a record; unavailability becomes the unsupported marker
    pub fn into_record(self) -> CapabilityRecord {
        match self {
            ProbeOutcome::Available(record) => record,
            ProbeOutcome::Unavailable => CapabilityRecord::unsupported(),
        }
    }
}
