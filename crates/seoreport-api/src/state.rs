//! Shared, read-only server state.
//!
//! Only configuration is shared between requests. Everything a session
//! owns comes in with the form post.

use std::sync::Arc;

use chrono::Month;
use seoreport_core::{AppConfig, ConfigManager, FormSession, FormValues};

use crate::Result;

/// State handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    default_month: Month,
}

impl AppState {
    /// Validates `config` and wraps it for sharing.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let default_month = config.report.default_month()?;
        Ok(Self {
            config: Arc::new(config),
            default_month,
        })
    }

    /// The configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Month preselected on a fresh form.
    pub fn default_month(&self) -> Month {
        self.default_month
    }

    /// Year every report covers.
    pub fn year(&self) -> i32 {
        self.config.report.year
    }

    /// A fresh session.
    pub fn new_session(&self) -> FormSession {
        FormSession::new(self.config.form.initial_rows)
    }

    /// A session resumed from a form post.
    pub fn resume_session(&self, values: FormValues) -> FormSession {
        FormSession::resume(values, self.config.form.initial_rows)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_config() {
        let mut config = AppConfig::default();
        config.form.initial_rows = 3;
        config.report.default_month_name = "May".to_string();
        let state = AppState::new(config).unwrap();

        assert_eq!(state.default_month(), Month::May);
        assert_eq!(state.year(), 2025);
        assert_eq!(state.new_session().row_count(), 3);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.report.default_month_name = "Smarch".to_string();
        assert!(AppState::new(config).is_err());
    }

    #[test]
    fn test_resume_session() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let values = FormValues::new().with("rows", "7");
        assert_eq!(state.resume_session(values).row_count(), 7);
    }
}
