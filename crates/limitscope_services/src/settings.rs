//! Settings management

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Report settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub report: ReportSettings,
    pub probe: ProbeSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Id of the element the table is placed in
    pub container_id: String,
    pub page_title: String,
    /// Emit only the table markup, without the surrounding page
    pub table_only: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            container_id: "gpu_table_container".to_string(),
            page_title: "GPU Limits".to_string(),
            table_only: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerPreference {
    #[default]
    HighPerformance,
    LowPower,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    pub power_preference: PowerPreference,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.report.container_id, "gpu_table_container");
        assert!(!settings.report.table_only);
        assert_eq!(settings.probe.power_preference, PowerPreference::HighPerformance);
    }

    #[test]
    fn partial_documents_keep_defaults() {
        let settings =
            Settings::from_json(r#"{ "probe": { "power_preference": "low-power" } }"#).unwrap();
        assert_eq!(settings.probe.power_preference, PowerPreference::LowPower);
        assert_eq!(settings.report, ReportSettings::default());
    }

    #[test]
    fn unknown_power_preference_is_rejected() {
        let err = Settings::from_json(r#"{ "probe": { "power_preference": "turbo" } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "report": {{ "container_id": "limits", "table_only": true }} }}"#
        )
        .unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.report.container_id, "limits");
        assert!(settings.report.table_only);
        assert_eq!(settings.report.page_title, "GPU Limits");
    }

    #[test]
    fn missing_file() {
        let err = Settings::load("/no/such/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
