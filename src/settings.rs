//! User settings stored as settings.json in the app data directory,
//! plus the payee configuration resolved from settings and environment.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Payee (overridden by UPI_ID / UPI_NAME)
    pub upi_id: Option<String>,
    pub upi_name: Option<String>,

    // Device classification (overridden by UPI_PAY_USER_AGENT)
    pub user_agent: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// User agent used for device classification; the environment wins over the file.
    pub fn resolve_user_agent(&self) -> Option<String> {
        non_blank(std::env::var(ENV_USER_AGENT).ok()).or_else(|| non_blank(self.user_agent.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("payee UPI id is not configured (set UPI_ID or upi_id in settings.json)")]
    MissingPayeeId,
    #[error("payee name is not configured (set UPI_NAME or upi_name in settings.json)")]
    MissingPayeeName,
}

/// Who receives the payment. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayeeConfig {
    pub payee_id: String,
    pub payee_name: String,
}

impl PayeeConfig {
    pub fn new(payee_id: impl Into<String>, payee_name: impl Into<String>) -> Result<Self, ConfigError> {
        let payee_id = non_blank(Some(payee_id.into())).ok_or(ConfigError::MissingPayeeId)?;
        let payee_name = non_blank(Some(payee_name.into())).ok_or(ConfigError::MissingPayeeName)?;
        Ok(Self { payee_id, payee_name })
    }

    /// Resolve from UPI_ID / UPI_NAME, falling back to the settings file.
    pub fn resolve(settings: &Settings) -> Result<Self, ConfigError> {
        Self::from_sources(
            std::env::var(ENV_UPI_ID).ok(),
            std::env::var(ENV_UPI_NAME).ok(),
            settings,
        )
    }

    fn from_sources(
        env_id: Option<String>,
        env_name: Option<String>,
        settings: &Settings,
    ) -> Result<Self, ConfigError> {
        let payee_id = non_blank(env_id).or_else(|| settings.upi_id.clone());
        let payee_name = non_blank(env_name).or_else(|| settings.upi_name.clone());
        Self::new(payee_id.unwrap_or_default(), payee_name.unwrap_or_default())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("upi-pay-desk-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn environment_overrides_settings() {
        let settings = Settings {
            upi_id: Some("file@bank".into()),
            upi_name: Some("File Name".into()),
            ..Default::default()
        };
        let payee =
            PayeeConfig::from_sources(Some("env@bank".into()), None, &settings).unwrap();
        assert_eq!(payee.payee_id, "env@bank");
        assert_eq!(payee.payee_name, "File Name");
    }

    #[test]
    fn missing_payee_fails_fast() {
        let settings = Settings::default();
        assert_eq!(
            PayeeConfig::from_sources(None, Some("Shop".into()), &settings),
            Err(ConfigError::MissingPayeeId)
        );
        assert_eq!(
            PayeeConfig::from_sources(Some("shop@bank".into()), Some("   ".into()), &settings),
            Err(ConfigError::MissingPayeeName)
        );
    }

    #[test]
    fn new_trims_and_rejects_blank() {
        let payee = PayeeConfig::new(" shop@bank ", "Shop").unwrap();
        assert_eq!(payee.payee_id, "shop@bank");
        assert_eq!(PayeeConfig::new("", "Shop"), Err(ConfigError::MissingPayeeId));
    }

    #[test]
    fn settings_survive_save_and_load() {
        let dir = scratch_dir("save");
        let settings = Settings {
            window_w: Some(640.0),
            upi_id: Some("shop@bank".into()),
            user_agent: Some("Android".into()),
            ..Default::default()
        };
        settings.save(&dir);
        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_w, Some(640.0));
        assert_eq!(loaded.upi_id.as_deref(), Some("shop@bank"));
        assert_eq!(loaded.user_agent.as_deref(), Some("Android"));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join(SETTINGS_FILE_NAME), "{ not json").unwrap();
        let loaded = Settings::load(&dir);
        assert!(loaded.upi_id.is_none());
        assert!(loaded.window_x.is_none());
        std::fs::remove_dir_all(&dir).ok();
    }
}
