use serde::Deserialize;

/// Response of `GET /api/config-status`.
///
/// Loaded once at startup and read-only afterwards. Absent fields keep their
/// defaults, and the whole struct falls back to `Default` when the request
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatus {
    /// Forces ZIP export on and keeps the export action enabled even when
    /// nothing is selected.
    #[serde(default)]
    pub force_enable_zip_export: bool,
    /// `false` when the backend started without its `.env` file.
    #[serde(default = "default_true")]
    pub has_env_file: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ConfigStatus {
    fn default() -> Self {
        Self {
            force_enable_zip_export: false,
            has_env_file: true,
            error_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: ConfigStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConfigStatus::default());
    }

    #[test]
    fn test_force_flag_and_env_status() {
        let json = r#"{"forceEnableZipExport": true, "hasEnvFile": false, "errorMessage": "missing .env"}"#;
        let config: ConfigStatus = serde_json::from_str(json).unwrap();
        assert!(config.force_enable_zip_export);
        assert!(!config.has_env_file);
        assert_eq!(config.error_message.as_deref(), Some("missing .env"));
    }
}
