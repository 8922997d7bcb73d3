//! Typed gateway API seam used by the views

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{
    CommandResponse, ConfigDocument, HostnameInfo, HostnameRequest, NetworkState, ReadRequest,
    ReadResponse, RtuConnectRequest, RtuStatus, SystemStatus, TcpStartRequest, TcpStatus,
    WriteRequest,
};

/// One async method per gateway endpoint.
///
/// `Ok` means a schema-valid reply arrived; whether the operation itself
/// succeeded is carried inside the reply (`success`) and is the caller's call.
#[async_trait]
pub trait GatewayApi: Send + Sync {
    async fn system_status(&self) -> Result<SystemStatus>;

    async fn network_config(&self) -> Result<NetworkState>;
    async fn hostname(&self) -> Result<HostnameInfo>;
    async fn set_hostname(&self, request: &HostnameRequest) -> Result<CommandResponse>;

    async fn rtu_connect(&self, request: &RtuConnectRequest) -> Result<CommandResponse>;
    async fn rtu_disconnect(&self) -> Result<CommandResponse>;
    async fn rtu_read(&self, request: &ReadRequest) -> Result<ReadResponse>;
    async fn rtu_write(&self, request: &WriteRequest) -> Result<CommandResponse>;
    async fn rtu_status(&self) -> Result<RtuStatus>;

    async fn tcp_start(&self, request: &TcpStartRequest) -> Result<CommandResponse>;
    async fn tcp_stop(&self) -> Result<CommandResponse>;
    async fn tcp_status(&self) -> Result<TcpStatus>;

    async fn config_get(&self) -> Result<ConfigDocument>;
    async fn config_update(&self, document: &ConfigDocument) -> Result<CommandResponse>;
}
