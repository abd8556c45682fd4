//! End-to-end pipeline: probe, build, render

use crate::catalog::{build_sections, Section};
use crate::host::Host;
use crate::probe::{probe_all, Probes};
use crate::render::render_table;

/// One capability snapshot of a host, rendered
#[derive(Debug, Clone)]
pub struct Report {
    pub probes: Probes,
    pub sections: Vec<Section>,
    pub table: String,
}

impl Report {
    pub async fn generate<H: Host>(host: &H) -> Self {
        let probes = probe_all(host).await;
        let sections = build_sections(&probes);
        let table = render_table(&sections);
        tracing::debug!(bytes = table.len(), "comparison table rendered");
        Self {
            probes,
            sections,
            table,
        }
    }
}
