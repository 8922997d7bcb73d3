//! Application configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::errors::{PanelError, Result};
use crate::models::PanelId;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the gateway REST API
    pub server_url: String,
    /// Client-wide request timeout in seconds
    pub request_timeout_secs: u64,
    /// Status poller period in seconds
    pub poll_interval_secs: u64,
    /// UI configuration
    pub ui: UiConfig,
    /// Initial form values
    pub defaults: FormDefaults,
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Panel shown at startup
    pub initial_panel: PanelId,
    /// Number of status notifications kept in history
    pub status_history: usize,
}

/// Values pre-filled into the panel forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub rtu_port: String,
    pub rtu_baudrate: u32,
    pub tcp_host: String,
    pub tcp_port: u16,
    pub slave_id: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 10,
            poll_interval_secs: 5,
            ui: UiConfig::default(),
            defaults: FormDefaults::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_panel: PanelId::Network,
            status_history: 50,
        }
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            rtu_port: "/dev/ttyUSB0".to_string(),
            rtu_baudrate: 9600,
            tcp_host: "0.0.0.0".to_string(),
            tcp_port: 5020,
            slave_id: 1,
        }
    }
}

impl AppConfig {
    /// Default configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gateway-panel").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    log::debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PanelError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_server_url(&self.server_url)?;

        if self.poll_interval_secs == 0 {
            return Err(PanelError::Config(
                "poll_interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(PanelError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_server_url(mut self, server_url: Option<String>) -> Result<Self> {
        if let Some(url) = server_url {
            validate_server_url(&url)?;
            self.server_url = url;
        }
        Ok(self)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn validate_server_url(server_url: &str) -> Result<()> {
    let parsed = Url::parse(server_url)
        .map_err(|e| PanelError::Config(format!("invalid server URL {:?}: {}", server_url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PanelError::Config(format!(
            "invalid URL scheme '{}'. Only http and https are allowed",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(PanelError::Config(format!(
            "server URL {:?} has no host",
            server_url
        )));
    }
    Ok(())
}
