//! Error types for gateway panel operations

use std::fmt;

/// Failure to obtain a JSON document from the gateway at all.
///
/// Connection refused, timeouts and bodies that are not JSON all land here.
/// A well-formed reply carrying `success: false` is never a transport error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub cause: String,
}

impl TransportError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::new(format!("request timed out: {}", err))
        } else if err.is_connect() {
            TransportError::new(format!("connection failed: {}", err))
        } else {
            TransportError::new(err.to_string())
        }
    }
}

/// Main error type for gateway panel operations
#[derive(Debug)]
pub enum PanelError {
    /// Local input rejected before any request was issued
    Validation(String),
    /// Gateway unreachable or replied with something that is not JSON
    Transport(TransportError),
    /// JSON reply did not match the schema expected for the endpoint
    Schema { endpoint: String, message: String },
    /// Gateway answered `success: false`, with or without a cause
    Domain(Option<String>),
    /// Configuration related errors
    Config(String),
    /// General I/O errors
    Io(std::io::Error),
    /// Serialization errors
    Serialization(String),
}

/// Message shown when the gateway reports a failure without a cause.
pub const GENERIC_FAILURE: &str = "Operation failed";

impl PanelError {
    /// Error text the way the status line shows it.
    ///
    /// Domain failures render the gateway's message verbatim so the user sees
    /// exactly what the backend reported.
    pub fn user_message(&self) -> String {
        match self {
            PanelError::Domain(Some(msg)) => msg.clone(),
            PanelError::Domain(None) => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PanelError::Validation(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, PanelError::Transport(_))
    }
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            PanelError::Transport(err) => write!(f, "Transport error: {}", err),
            PanelError::Schema { endpoint, message } => {
                write!(f, "Unexpected response from {}: {}", endpoint, message)
            }
            PanelError::Domain(Some(msg)) => write!(f, "{}", msg),
            PanelError::Domain(None) => write!(f, "{}", GENERIC_FAILURE),
            PanelError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PanelError::Io(err) => write!(f, "I/O error: {}", err),
            PanelError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PanelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PanelError::Transport(err) => Some(err),
            PanelError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransportError> for PanelError {
    fn from(err: TransportError) -> Self {
        PanelError::Transport(err)
    }
}

impl From<std::io::Error> for PanelError {
    fn from(err: std::io::Error) -> Self {
        PanelError::Io(err)
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for PanelError {
    fn from(err: toml::de::Error) -> Self {
        PanelError::Config(err.to_string())
    }
}

/// Result type alias for gateway panel operations
pub type Result<T> = std::result::Result<T, PanelError>;
