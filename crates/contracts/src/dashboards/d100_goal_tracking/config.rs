use super::export_layout::ExportSettings;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Static settings of the goal dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub brand: String,
    pub subtitle: String,
    #[serde(default)]
    pub export: ExportSettings,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r##"{
    "brand": "Janela",
    "subtitle": "Acompanhamento de Metas",
    "export": {
        "root_element_id": "dashboard-content",
        "scale": 2.0,
        "background_color": "#0a0a0a",
        "exclude_class": "no-print",
        "page": { "width_mm": 297.0, "height_mm": 210.0 },
        "filename": "janela-bar-metas.pdf"
    }
}"##;

/// Load configuration
///
/// An override document supplied by the host page wins; otherwise the
/// embedded default is used. Missing `export` keys fall back to defaults.
pub fn load_config(override_json: Option<&str>) -> anyhow::Result<DashboardConfig> {
    match override_json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => serde_json::from_str(json).context("Invalid dashboard config override"),
        None => serde_json::from_str(DEFAULT_CONFIG).context("Invalid embedded dashboard config"),
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand: "Janela".to_string(),
            subtitle: "Acompanhamento de Metas".to_string(),
            export: ExportSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_embedded_config_matches_export_defaults() {
        // Parsed directly, so the JSON literal and the code defaults are checked independently.
        let parsed: DashboardConfig = serde_json::from_str(DEFAULT_CONFIG).unwrap();
        let defaults = ExportSettings::default();
        assert_eq!(parsed.brand, "Janela");
        assert_eq!(parsed.subtitle, "Acompanhamento de Metas");
        assert_eq!(parsed.export.root_element_id, defaults.root_element_id);
        assert_eq!(parsed.export.scale, defaults.scale);
        assert_eq!(parsed.export.background_color, "#0a0a0a");
        assert_eq!(parsed.export.background_color, defaults.background_color);
        assert_eq!(parsed.export.exclude_class, defaults.exclude_class);
        assert_eq!(parsed.export.page, defaults.page);
        assert_eq!(parsed.export.filename, defaults.filename);
    }

    #[test]
    fn test_blank_override_uses_default() {
        let config = load_config(Some("   ")).unwrap();
        assert_eq!(config.brand, "Janela");
    }

    #[test]
    fn test_partial_override() {
        let config = load_config(Some(
            r#"{ "brand": "Outro Bar", "subtitle": "Metas", "export": { "filename": "x.pdf" } }"#,
        ))
        .unwrap();
        assert_eq!(config.brand, "Outro Bar");
        assert_eq!(config.export.filename, "x.pdf");
        assert_eq!(config.export.scale, 2.0);
        assert_eq!(config.export.root_element_id, "dashboard-content");
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        let err = load_config(Some("{ not json")).unwrap_err();
        assert!(err.to_string().contains("override"));
    }
}
