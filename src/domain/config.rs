//! Application configuration loaded from a `reelkit.toml` file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Environment variable naming an alternative config file path.
pub const CONFIG_PATH_ENV: &str = "REELKIT_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    /// Bonus-gate configuration.
    #[serde(default)]
    pub access: AccessConfig,
}

impl AppConfig {
    /// Load configuration from an explicit path, falling back to the
    /// `REELKIT_CONFIG` environment variable, then to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
        };
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(&path).map_err(|e| {
            AppError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: AppConfig =
            toml::from_str(&raw).map_err(|e| AppError::config(format!("Malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// API base URL; the model path is appended per request.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Fixed model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout_secs() }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config("model must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config("timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Bonus-gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessConfig {
    /// Purchaser emails admitted through the bonus gate.
    /// An empty list disables gating entirely.
    #[serde(default = "default_allowed_emails")]
    pub allowed_emails: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self { allowed_emails: default_allowed_emails() }
    }
}

fn default_allowed_emails() -> Vec<String> {
    vec!["estalontech@gmail.com".to_string(), "litogarin@gmail.com".to_string()]
}
