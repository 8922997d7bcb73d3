//! Modbus TCP server models

use serde::{Deserialize, Serialize};

/// Body of `POST /api/modbus/tcp/start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpStartRequest {
    pub host: String,
    pub port: u16,
}

/// Reply of `GET /api/modbus/tcp/status`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TcpStatus {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
}
