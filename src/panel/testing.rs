//! In-memory gateway used by the panel tests

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::errors::{Result, TransportError};
use crate::models::*;
use crate::remote::{Endpoint, GatewayApi};

#[derive(Debug)]
pub struct FakeState {
    pub hostname: String,
    pub rtu_connected: bool,
    pub tcp_running: bool,
    pub config: Value,
    /// Reply returned by every mutation when set
    pub command_reply: Option<CommandResponse>,
    /// Endpoints that fail with a transport error
    pub unreachable: HashSet<Endpoint>,
}

/// Gateway fake that records how often each endpoint was called.
#[derive(Debug)]
pub struct RecordingGateway {
    calls: Mutex<HashMap<Endpoint, usize>>,
    pub state: Mutex<FakeState>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(HashMap::new()),
            state: Mutex::new(FakeState {
                hostname: "gateway".to_string(),
                rtu_connected: false,
                tcp_running: false,
                config: json!({"rtu": {"port": "/dev/ttyUSB0"}, "tcp": {"port": 5020}}),
                command_reply: None,
                unreachable: HashSet::new(),
            }),
        }
    }

    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls.lock().unwrap().get(&endpoint).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn set_unreachable(&self, endpoint: Endpoint, unreachable: bool) {
        let mut state = self.state.lock().unwrap();
        if unreachable {
            state.unreachable.insert(endpoint);
        } else {
            state.unreachable.remove(&endpoint);
        }
    }

    pub fn reply_with(&self, reply: Option<CommandResponse>) {
        self.state.lock().unwrap().command_reply = reply;
    }

    fn record(&self, endpoint: Endpoint) -> Result<()> {
        *self.calls.lock().unwrap().entry(endpoint).or_insert(0) += 1;
        if self.state.lock().unwrap().unreachable.contains(&endpoint) {
            return Err(TransportError::new("connection refused").into());
        }
        Ok(())
    }

    fn command(
        &self,
        endpoint: Endpoint,
        apply: impl FnOnce(&mut FakeState),
    ) -> Result<CommandResponse> {
        self.record(endpoint)?;
        let mut state = self.state.lock().unwrap();
        if let Some(reply) = state.command_reply.clone() {
            return Ok(reply);
        }
        apply(&mut state);
        Ok(CommandResponse::ok())
    }
}

#[async_trait]
impl GatewayApi for RecordingGateway {
    async fn system_status(&self) -> Result<SystemStatus> {
        self.record(Endpoint::SystemStatus)?;
        Ok(SystemStatus::default())
    }

    async fn network_config(&self) -> Result<NetworkState> {
        self.record(Endpoint::NetworkConfig)?;
        let state = self.state.lock().unwrap();
        let mut interfaces = std::collections::BTreeMap::new();
        interfaces.insert(
            "eth0".to_string(),
            InterfaceInfo {
                ip: "192.168.1.10".to_string(),
                status: "up".to_string(),
            },
        );
        Ok(NetworkState {
            hostname: Some(state.hostname.clone()),
            interfaces,
        })
    }

    async fn hostname(&self) -> Result<HostnameInfo> {
        self.record(Endpoint::Hostname)?;
        Ok(HostnameInfo {
            hostname: self.state.lock().unwrap().hostname.clone(),
        })
    }

    async fn set_hostname(&self, request: &HostnameRequest) -> Result<CommandResponse> {
        let hostname = request.hostname.clone();
        self.command(Endpoint::SetHostname, |s| s.hostname = hostname)
    }

    async fn rtu_connect(&self, _request: &RtuConnectRequest) -> Result<CommandResponse> {
        self.command(Endpoint::RtuConnect, |s| s.rtu_connected = true)
    }

    async fn rtu_disconnect(&self) -> Result<CommandResponse> {
        self.command(Endpoint::RtuDisconnect, |s| s.rtu_connected = false)
    }

    async fn rtu_read(&self, request: &ReadRequest) -> Result<ReadResponse> {
        self.record(Endpoint::RtuRead)?;
        let data: Vec<u16> = (0..request.quantity).map(|i| request.start_addr + i).collect();
        Ok(ReadResponse {
            success: true,
            data: Some(json!(data)),
            error: None,
        })
    }

    async fn rtu_write(&self, _request: &WriteRequest) -> Result<CommandResponse> {
        self.command(Endpoint::RtuWrite, |_| {})
    }

    async fn rtu_status(&self) -> Result<RtuStatus> {
        self.record(Endpoint::RtuStatus)?;
        Ok(RtuStatus {
            connected: self.state.lock().unwrap().rtu_connected,
            ..RtuStatus::default()
        })
    }

    async fn tcp_start(&self, _request: &TcpStartRequest) -> Result<CommandResponse> {
        self.command(Endpoint::TcpStart, |s| s.tcp_running = true)
    }

    async fn tcp_stop(&self) -> Result<CommandResponse> {
        self.command(Endpoint::TcpStop, |s| s.tcp_running = false)
    }

    async fn tcp_status(&self) -> Result<TcpStatus> {
        self.record(Endpoint::TcpStatus)?;
        Ok(TcpStatus {
            running: self.state.lock().unwrap().tcp_running,
            host: Some("0.0.0.0".to_string()),
            port: Some(5020),
            error: None,
        })
    }

    async fn config_get(&self) -> Result<ConfigDocument> {
        self.record(Endpoint::ConfigGet)?;
        Ok(ConfigDocument(self.state.lock().unwrap().config.clone()))
    }

    async fn config_update(&self, document: &ConfigDocument) -> Result<CommandResponse> {
        let value = document.0.clone();
        self.command(Endpoint::ConfigUpdate, |s| s.config = value)
    }
}
