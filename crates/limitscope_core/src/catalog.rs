//! Comparison table catalog
//!
//! [`CATALOG`] is the hand-authored mapping from displayed metric to the
//! record field feeding each column. Building the table is a lookup over it.

use crate::probe::Probes;
use crate::record::{CapabilityRecord, Cell, Limit};

/// Number of comparison columns in every row
pub const COLUMN_COUNT: usize = 4;

/// Comparison column, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    WebGl,
    WebGl2,
    WebGpuDevice,
    WebGpuAdapter,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::WebGl,
        Column::WebGl2,
        Column::WebGpuDevice,
        Column::WebGpuAdapter,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::WebGl => "WebGL",
            Column::WebGl2 => "WebGL2",
            Column::WebGpuDevice => "WebGPU (Device)",
            Column::WebGpuAdapter => "WebGPU (Adapter)",
        }
    }

    fn record(self, probes: &Probes) -> &CapabilityRecord {
        match self {
            Column::WebGl => &probes.webgl,
            Column::WebGl2 => &probes.webgl2,
            Column::WebGpuDevice => &probes.webgpu_device,
            Column::WebGpuAdapter => &probes.webgpu_adapter,
        }
    }
}

/// Where a cell's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub column: Column,
    pub limit: Limit,
}

const fn field(column: Column, limit: Limit) -> Option<Source> {
    Some(Source { column, limit })
}

#[derive(Debug, Clone, Copy)]
pub struct RowSpec {
    pub label: &'static str,
    /// `None` marks a metric that does not apply to that column
    pub cells: [Option<Source>; COLUMN_COUNT],
}

#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub title: &'static str,
    pub rows: &'static [RowSpec],
}

use Column::{WebGl, WebGl2, WebGpuAdapter, WebGpuDevice};

/// Sections, rows and the field feeding each cell
pub const CATALOG: &[SectionSpec] = &[
    SectionSpec {
        title: "Textures",
        rows: &[
            RowSpec {
                label: "Texture Size (2D)",
                cells: [
                    field(WebGl, Limit::TextureSize2d),
                    field(WebGl2, Limit::TextureSize2d),
                    field(WebGpuDevice, Limit::TextureSize2d),
                    field(WebGpuAdapter, Limit::TextureSize2d),
                ],
            },
            RowSpec {
                label: "Texture Size (3D)",
                cells: [
                    None,
                    field(WebGl2, Limit::TextureSize3d),
                    field(WebGpuDevice, Limit::TextureSize3d),
                    field(WebGpuAdapter, Limit::TextureSize3d),
                ],
            },
            RowSpec {
                label: "Array Texture Layers",
                cells: [
                    None,
                    field(WebGl2, Limit::ArrayTextureLayers),
                    field(WebGpuDevice, Limit::ArrayTextureLayers),
                    field(WebGpuAdapter, Limit::ArrayTextureLayers),
                ],
            },
            RowSpec {
                label: "Vertex Texture Units",
                cells: [
                    field(WebGl, Limit::VertexTextureUnits),
                    field(WebGl2, Limit::VertexTextureUnits),
                    field(WebGpuDevice, Limit::VertexTextureUnits),
                    field(WebGpuAdapter, Limit::VertexTextureUnits),
                ],
            },
            RowSpec {
                label: "Fragment Texture Units",
                cells: [
                    field(WebGl, Limit::FragmentTextureUnits),
                    field(WebGl2, Limit::FragmentTextureUnits),
                    field(WebGpuDevice, Limit::FragmentTextureUnits),
                    field(WebGpuAdapter, Limit::FragmentTextureUnits),
                ],
            },
        ],
    },
    SectionSpec {
        title: "Vertex Buffers",
        rows: &[RowSpec {
            label: "Vertex Attributes",
            cells: [
                field(WebGl, Limit::VertexAttributes),
                field(WebGl2, Limit::VertexAttributes),
                field(WebGpuDevice, Limit::VertexAttributes),
                field(WebGpuAdapter, Limit::VertexAttributes),
            ],
        }],
    },
    SectionSpec {
        title: "Uniforms",
        rows: &[
            RowSpec {
                label: "Vertex Uniforms Size",
                cells: [
                    field(WebGl, Limit::VertexUniformsSize),
                    field(WebGl2, Limit::VertexUniformsSize),
                    None,
                    None,
                ],
            },
            RowSpec {
                label: "Fragment Uniforms Size",
                cells: [
                    field(WebGl, Limit::FragmentUniformsSize),
                    field(WebGl2, Limit::FragmentUniformsSize),
                    None,
                    None,
                ],
            },
            RowSpec {
                label: "Uniform Buffer Size",
                cells: [
                    None,
                    field(WebGl2, Limit::UniformBufferSize),
                    field(WebGpuDevice, Limit::UniformBufferSize),
                    field(WebGpuAdapter, Limit::UniformBufferSize),
                ],
            },
            RowSpec {
                label: "Uniform Buffers per Vertex",
                cells: [
                    None,
                    field(WebGl2, Limit::UniformBuffersPerVertex),
                    field(WebGpuDevice, Limit::UniformBuffersPerStage),
                    field(WebGpuAdapter, Limit::UniformBuffersPerStage),
                ],
            },
            RowSpec {
                label: "Uniform Buffers per Fragment",
                cells: [
                    None,
                    field(WebGl2, Limit::UniformBuffersPerFragment),
                    field(WebGpuDevice, Limit::UniformBuffersPerStage),
                    field(WebGpuAdapter, Limit::UniformBuffersPerStage),
                ],
            },
            RowSpec {
                label: "Uniform Buffer Alignment",
                cells: [
                    None,
                    field(WebGl2, Limit::UniformBufferAlignment),
                    field(WebGpuDevice, Limit::UniformBufferAlignment),
                    field(WebGpuAdapter, Limit::UniformBufferAlignment),
                ],
            },
        ],
    },
    SectionSpec {
        title: "Render Targets",
        rows: &[RowSpec {
            label: "Render Targets",
            cells: [
                field(WebGl, Limit::RenderTargets),
                field(WebGl2, Limit::RenderTargets),
                field(WebGpuDevice, Limit::RenderTargets),
                field(WebGpuAdapter, Limit::RenderTargets),
            ],
        }],
    },
    SectionSpec {
        title: "Vendor / Renderer",
        rows: &[
            // the adapter column repeats the device's identification
            RowSpec {
                label: "Vendor",
                cells: [
                    field(WebGl, Limit::Vendor),
                    field(WebGl2, Limit::Vendor),
                    field(WebGpuDevice, Limit::Vendor),
                    field(WebGpuDevice, Limit::Vendor),
                ],
            },
            RowSpec {
                label: "Renderer",
                cells: [
                    field(WebGl, Limit::Renderer),
                    field(WebGl2, Limit::Renderer),
                    field(WebGpuDevice, Limit::Renderer),
                    field(WebGpuDevice, Limit::Renderer),
                ],
            },
        ],
    },
];

/// Total metric rows across the catalog
pub fn metric_row_count() -> usize {
    CATALOG.iter().map(|section| section.rows.len()).sum()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: &'static str,
    pub values: [Option<Cell>; COLUMN_COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub rows: Vec<Row>,
}

/// Fill the catalog from the probe records
pub fn build_sections(probes: &Probes) -> Vec<Section> {
    CATALOG
        .iter()
        .map(|section| Section {
            title: section.title,
            rows: section
                .rows
                .iter()
                .map(|row| Row {
                    label: row.label,
                    values: row.cells.map(|source| {
                        let source = source?;
                        source.column.record(probes).get(source.limit).cloned()
                    }),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordBuilder;

    fn unsupported() -> Probes {
        Probes {
            webgl: CapabilityRecord::unsupported(),
            webgl2: CapabilityRecord::unsupported(),
            webgpu_device: CapabilityRecord::unsupported(),
            webgpu_adapter: CapabilityRecord::unsupported(),
        }
    }

    fn row<'a>(sections: &'a [Section], label: &str) -> &'a Row {
        sections
            .iter()
            .flat_map(|s| &s.rows)
            .find(|r| r.label == label)
            .unwrap()
    }

    #[test]
    fn catalog_shape() {
        let titles: Vec<_> = CATALOG.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "Textures",
                "Vertex Buffers",
                "Uniforms",
                "Render Targets",
                "Vendor / Renderer"
            ]
        );
        assert_eq!(metric_row_count(), 15);
    }

    #[test]
    fn sources_stay_in_their_column() {
        for section in CATALOG {
            for row in section.rows {
                for (column, source) in Column::ALL.iter().zip(row.cells) {
                    let Some(source) = source else { continue };
                    let identification = matches!(source.limit, Limit::Vendor | Limit::Renderer);
                    if *column == Column::WebGpuAdapter && identification {
                        assert_eq!(source.column, Column::WebGpuDevice, "{}", row.label);
                    } else {
                        assert_eq!(source.column, *column, "{}", row.label);
                    }
                }
            }
        }
    }

    #[test]
    fn legacy_column_lacks_newer_metrics() {
        for label in [
            "Texture Size (3D)",
            "Array Texture Layers",
            "Uniform Buffer Size",
            "Uniform Buffer Alignment",
        ] {
            let spec = CATALOG
                .iter()
                .flat_map(|s| s.rows)
                .find(|r| r.label == label)
                .unwrap();
            assert!(spec.cells[0].is_none(), "{label}");
        }
    }

    #[test]
    fn unsupported_probes_yield_empty_cells() {
        let sections = build_sections(&unsupported());
        assert_eq!(sections.len(), CATALOG.len());
        for row in sections.iter().flat_map(|s| &s.rows) {
            assert!(row.values.iter().all(Option::is_none), "{}", row.label);
        }
    }

    #[test]
    fn per_stage_count_fans_out() {
        let mut device = RecordBuilder::new();
        device.set(Limit::UniformBuffersPerStage, Some(12u64));
        let probes = Probes {
            webgpu_device: device.finish(),
            ..unsupported()
        };
        let sections = build_sections(&probes);

        for label in ["Uniform Buffers per Vertex", "Uniform Buffers per Fragment"] {
            assert_eq!(row(&sections, label).values[2], Some(Cell::Integer(12)));
            assert_eq!(row(&sections, label).values[3], None);
        }
    }

    #[test]
    fn adapter_column_repeats_device_identification() {
        let mut device = RecordBuilder::new();
        device.set(Limit::Vendor, Some("amd".to_string()));
        let mut adapter = RecordBuilder::new();
        adapter.set(Limit::Vendor, Some("ignored".to_string()));
        let probes = Probes {
            webgpu_device: device.finish(),
            webgpu_adapter: adapter.finish(),
            ..unsupported()
        };
        let sections = build_sections(&probes);

        let vendor = row(&sections, "Vendor");
        assert_eq!(vendor.values[2], Some(Cell::Text("amd".to_string())));
        assert_eq!(vendor.values[3], Some(Cell::Text("amd".to_string())));
    }
}
