//! REST endpoints exposed by the gateway

use reqwest::Method;
use std::fmt;

/// Every endpoint the panel talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SystemStatus,
    NetworkConfig,
    Hostname,
    SetHostname,
    RtuConnect,
    RtuDisconnect,
    RtuRead,
    RtuWrite,
    RtuStatus,
    TcpStart,
    TcpStop,
    TcpStatus,
    ConfigGet,
    ConfigUpdate,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::SystemStatus
            | Endpoint::NetworkConfig
            | Endpoint::Hostname
            | Endpoint::RtuStatus
            | Endpoint::TcpStatus
            | Endpoint::ConfigGet => Method::GET,
            Endpoint::SetHostname
            | Endpoint::RtuConnect
            | Endpoint::RtuDisconnect
            | Endpoint::RtuRead
            | Endpoint::RtuWrite
            | Endpoint::TcpStart
            | Endpoint::TcpStop
            | Endpoint::ConfigUpdate => Method::POST,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::SystemStatus => "/api/system/status",
            Endpoint::NetworkConfig => "/api/network/config",
            Endpoint::Hostname | Endpoint::SetHostname => "/api/network/hostname",
            Endpoint::RtuConnect => "/api/modbus/rtu/connect",
            Endpoint::RtuDisconnect => "/api/modbus/rtu/disconnect",
            Endpoint::RtuRead => "/api/modbus/rtu/read",
            Endpoint::RtuWrite => "/api/modbus/rtu/write",
            Endpoint::RtuStatus => "/api/modbus/rtu/status",
            Endpoint::TcpStart => "/api/modbus/tcp/start",
            Endpoint::TcpStop => "/api/modbus/tcp/stop",
            Endpoint::TcpStatus => "/api/modbus/tcp/status",
            Endpoint::ConfigGet => "/api/config/get",
            Endpoint::ConfigUpdate => "/api/config/update",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_endpoints_share_path() {
        assert_eq!(Endpoint::Hostname.path(), Endpoint::SetHostname.path());
        assert_eq!(Endpoint::Hostname.method(), Method::GET);
        assert_eq!(Endpoint::SetHostname.method(), Method::POST);
    }

    #[test]
    fn test_display_includes_method() {
        assert_eq!(
            Endpoint::RtuWrite.to_string(),
            "POST /api/modbus/rtu/write"
        );
    }
}
