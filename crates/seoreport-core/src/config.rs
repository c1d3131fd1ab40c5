//! Configuration loading and management.
//!
//! Configuration lives in one TOML file. [`ConfigManager`] knows where that
//! file is and how to turn a config into TOML or environment variables;
//! [`AppConfig`] is the configuration this workspace uses.
//!
//! Resolution order for the file path:
//!
//! 1. an explicit path (the CLI's `--config`)
//! 2. the `SEOREPORT_CONFIG` environment variable
//! 3. `<platform config dir>/seoreport/config.toml`
//!
//! A missing file is not an error; defaults apply.

use std::path::PathBuf;

use chrono::Month;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::period::{self, DEFAULT_MONTH, REPORT_YEAR, ReportPeriod};
use crate::output::PREVIEW_HEIGHT;
use crate::rows::INITIAL_ROWS;
use crate::{Error, Result};

// ============================================================================
// ConfigManager
// ============================================================================

/// A TOML-backed configuration type.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Short project name, used for the config directory and in messages.
    fn project_name() -> &'static str;

    /// Environment variable that may point at the config file.
    fn config_env_var() -> String {
        format!("{}_CONFIG", Self::project_name().to_uppercase())
    }

    /// Platform default location of the config file.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve the config file path from an explicit path, the environment,
    /// or the platform default, in that order.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(Self::config_env_var())
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Load the config, falling back to defaults when the file is absent.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            log::debug!("no config path for this platform, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            log::debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Check values that deserialize fine but cannot be used.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Serialize the config as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Flatten the config into `PROJECT_SECTION_KEY=value` pairs.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_env(&Self::project_name().to_uppercase(), &value, &mut vars);
        Ok(vars)
    }
}

fn flatten_env(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let name = format!("{prefix}_{}", key.to_uppercase());
                flatten_env(&name, child, out);
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

// ============================================================================
// AppConfig
// ============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP form server
    pub server: ServerConfig,
    /// Reporting period
    pub report: ReportConfig,
    /// Form layout
    pub form: FormConfig,
}

impl ConfigManager for AppConfig {
    fn project_name() -> &'static str {
        "seoreport"
    }

    fn validate(&self) -> Result<()> {
        let month = self.report.default_month()?;
        ReportPeriod::new(month, self.report.year)?;
        if self.form.preview_height == 0 {
            return Err(Error::config("form.preview_height must be greater than 0"));
        }
        Ok(())
    }
}

/// HTTP form server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl ServerConfig {
    /// `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which period reports cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Year every report covers
    pub year: i32,
    /// Month preselected on a fresh form
    #[serde(rename = "default_month")]
    pub default_month_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            year: REPORT_YEAR,
            default_month_name: DEFAULT_MONTH.name().to_string(),
        }
    }
}

impl ReportConfig {
    /// The preselected month.
    pub fn default_month(&self) -> Result<Month> {
        period::parse_month(&self.default_month_name)
    }
}

/// Form layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Keyword rows on a fresh form
    pub initial_rows: usize,
    /// Preview frame height in pixels
    pub preview_height: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            initial_rows: INITIAL_ROWS,
            preview_height: PREVIEW_HEIGHT,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8501");
        assert_eq!(config.report.year, 2025);
        assert_eq!(config.report.default_month().unwrap(), Month::July);
        assert_eq!(config.form.initial_rows, 5);
        assert_eq!(config.form.preview_height, 800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_missing_file_uses_defaults() {
        let config = AppConfig::load(Some("/nonexistent/seoreport.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9000\n\n[report]\ndefault_month = \"March\"\n")
            .unwrap();

        let config = AppConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.report.default_month().unwrap(), Month::March);
        assert_eq!(config.report.year, 2025);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = AppConfig::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let path = AppConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }

    #[test]
    fn test_config_env_var_name() {
        assert_eq!(AppConfig::config_env_var(), "SEOREPORT_CONFIG");
    }

    #[test]
    fn test_to_toml_string_roundtrip() {
        let config = AppConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("default_month = \"July\""));
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_to_env_vars() {
        let vars = AppConfig::default().to_env_vars().unwrap();
        assert!(vars.contains(&("SEOREPORT_SERVER_PORT".to_string(), "8501".to_string())));
        assert!(vars.contains(&(
            "SEOREPORT_REPORT_DEFAULT_MONTH".to_string(),
            "July".to_string()
        )));
        assert!(vars.contains(&("SEOREPORT_FORM_INITIAL_ROWS".to_string(), "5".to_string())));
    }

    #[test]
    fn test_validate_rejects_bad_month() {
        let mut config = AppConfig::default();
        config.report.default_month_name = "Smarch".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_preview_height() {
        let mut config = AppConfig::default();
        config.form.preview_height = 0;
        assert!(config.validate().is_err());
    }
}
