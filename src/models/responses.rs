//! Shared API response models

use serde::{Deserialize, Serialize};

use super::modbus::RtuStatus;
use super::tcp::TcpStatus;
use crate::errors::{PanelError, Result};

/// Generic `{success, error?}` acknowledgement returned by every mutation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: Option<&str>) -> Self {
        Self {
            success: false,
            error: error.map(str::to_string),
        }
    }

    /// Turn a domain failure into `PanelError::Domain`, keeping the cause if any.
    pub fn into_result(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(PanelError::Domain(self.error))
        }
    }
}

/// The gateway's configuration document.
///
/// Round-tripped verbatim between `config/get` and `config/update`; the panel
/// only parses and pretty-prints it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(pub serde_json::Value);

impl ConfigDocument {
    /// Parse editor text. Any JSON value is accepted.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map(ConfigDocument)
            .map_err(|e| PanelError::Validation(format!("config is not valid JSON: {}", e)))
    }

    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Reply of `GET /api/system/status`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemStatus {
    #[serde(default)]
    pub rtu: Option<RtuStatus>,
    #[serde(default)]
    pub tcp: Option<TcpStatus>,
    #[serde(default)]
    pub hostname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_document_keeps_key_order() {
        let text = r#"{"zeta": 1, "alpha": {"nested": true}, "mid": [1, 2]}"#;
        let doc = ConfigDocument::parse(text).unwrap();
        let compact = serde_json::to_string(&doc).unwrap();
        assert_eq!(compact, r#"{"zeta":1,"alpha":{"nested":true},"mid":[1,2]}"#);
    }

    #[test]
    fn test_config_document_rejects_broken_text() {
        let err = ConfigDocument::parse("{not json").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_failed_response_carries_cause() {
        let response: CommandResponse =
            serde_json::from_str(r#"{"success": false, "error": "port busy"}"#).unwrap();
        match response.into_result() {
            Err(PanelError::Domain(Some(msg))) => assert_eq!(msg, "port busy"),
            other => panic!("Expected domain error, got: {:?}", other),
        }
    }
}
