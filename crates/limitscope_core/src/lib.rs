//! Limitscope Core
//!
//! Probes the WebGL, WebGL2 and WebGPU capability surfaces of a host and
//! lays their limits out side by side:
//! - Host abstraction and a snapshot-backed host
//! - Capability probes and records
//! - The static comparison catalog
//! - Byte formatting and HTML rendering

pub mod catalog;
pub mod format;
pub mod host;
pub mod probe;
pub mod record;
pub mod render;
pub mod report;
pub mod snapshot;

pub use report::Report;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
