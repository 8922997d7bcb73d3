//! Host network identity models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One network interface as reported by the gateway host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceInfo {
    pub ip: String,
    pub status: String,
}

/// Reply of `GET /api/network/config`
///
/// The host answers `{}` when it cannot enumerate interfaces, so both fields
/// are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkState {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub interfaces: BTreeMap<String, InterfaceInfo>,
}

impl NetworkState {
    pub fn is_empty(&self) -> bool {
        self.hostname.is_none() && self.interfaces.is_empty()
    }
}

/// Body of `POST /api/network/hostname`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostnameRequest {
    pub hostname: String,
}

/// Reply of `GET /api/network/hostname`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostnameInfo {
    pub hostname: String,
}
