//! Limitscope Runtime
//!
//! Probes the local GPU (or a recorded snapshot) and writes the WebGL /
//! WebGL2 / WebGPU limits comparison as HTML.

use anyhow::{Context, Result};
use clap::Parser;
use limitscope_core::render::render_document;
use limitscope_core::snapshot::SnapshotHost;
use limitscope_core::Report;
use limitscope_render::{wgpu, WgpuHost, WgpuHostConfig};
use limitscope_services::logging::init_logging;
use limitscope_services::settings::{PowerPreference, Settings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "limitscope",
    about = "Compare WebGL, WebGL2 and WebGPU limits side by side",
    version
)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render from a capability snapshot (JSON) instead of the local GPU
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Emit only the table markup
    #[arg(long)]
    table_only: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    tracing::info!("Limitscope v{}", limitscope_core::VERSION);

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.report.table_only |= cli.table_only;

    let report = match &cli.snapshot {
        Some(path) => {
            let host = SnapshotHost::load(path)
                .with_context(|| format!("loading snapshot from {}", path.display()))?;
            tracing::info!(snapshot = %path.display(), "probing snapshot host");
            pollster::block_on(Report::generate(&host))
        }
        None => {
            let host = WgpuHost::new(WgpuHostConfig {
                power_preference: power_preference(settings.probe.power_preference),
            });
            tracing::info!("probing local GPU");
            pollster::block_on(Report::generate(&host))
        }
    };

    let markup = if settings.report.table_only {
        report.table
    } else {
        render_document(
            &settings.report.container_id,
            &settings.report.page_title,
            &report.table,
        )
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, markup)
                .with_context(|| format!("writing report to {}", path.display()))?;
            tracing::info!(output = %path.display(), "report written");
        }
        None => println!("{markup}"),
    }

    Ok(())
}

fn power_preference(preference: PowerPreference) -> wgpu::PowerPreference {
    match preference {
        PowerPreference::HighPerformance => wgpu::PowerPreference::HighPerformance,
        PowerPreference::LowPower => wgpu::PowerPreference::LowPower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "limitscope",
            "--snapshot",
            "host.json",
            "-o",
            "out.html",
            "--table-only",
        ]);
        assert_eq!(cli.snapshot, Some(PathBuf::from("host.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert!(cli.table_only);
        assert!(cli.config.is_none());
    }

    #[test]
    fn power_preference_maps_to_wgpu() {
        assert_eq!(
            power_preference(PowerPreference::LowPower),
            wgpu::PowerPreference::LowPower
        );
    }
}
