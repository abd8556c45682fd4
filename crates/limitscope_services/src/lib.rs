//! Limitscope Services Layer
//!
//! Settings and logging setup shared by the binaries.

pub mod logging;
pub mod settings;

pub use settings::Settings;
