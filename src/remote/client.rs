//! HTTP transport to the gateway REST API

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use super::api::GatewayApi;
use super::endpoints::Endpoint;
use crate::errors::{PanelError, Result, TransportError};
use crate::models::{
    CommandResponse, ConfigDocument, HostnameInfo, HostnameRequest, NetworkState, ReadRequest,
    ReadResponse, RtuConnectRequest, RtuStatus, SystemStatus, TcpStartRequest, TcpStatus,
    WriteRequest,
};

/// Reqwest-backed client for one gateway
#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: String,
    http: reqwest::Client,
}

impl GatewayClient {
    /// Build a client. The timeout is fixed for the client's lifetime.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PanelError::Transport(e.into()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and return the JSON body.
    ///
    /// The body is sent as JSON only when present. HTTP status codes are not
    /// inspected: any JSON reply is handed back and a non-JSON reply is a
    /// transport failure.
    pub async fn call(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> std::result::Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            let snippet: String = text.chars().take(80).collect();
            log::debug!("Non-JSON reply from {} ({}): {}", url, status, snippet);
            TransportError::new(format!(
                "HTTP {} returned a body that is not JSON ({}): {}",
                status, e, snippet
            ))
        })
    }

    async fn fetch<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R> {
        let value = self
            .call(endpoint.path(), endpoint.method(), None)
            .await?;
        decode(endpoint, value)
    }

    async fn send<B: Serialize + Sync, R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<R> {
        let body = serde_json::to_value(body)?;
        let value = self
            .call(endpoint.path(), endpoint.method(), Some(&body))
            .await?;
        decode(endpoint, value)
    }
}

/// Validate a JSON reply against the schema expected for `endpoint`.
pub fn decode<R: DeserializeOwned>(endpoint: Endpoint, value: Value) -> Result<R> {
    serde_json::from_value(value).map_err(|e| PanelError::Schema {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl GatewayApi for GatewayClient {
    async fn system_status(&self) -> Result<SystemStatus> {
        self.fetch(Endpoint::SystemStatus).await
    }

    async fn network_config(&self) -> Result<NetworkState> {
        self.fetch(Endpoint::NetworkConfig).await
    }

    async fn hostname(&self) -> Result<HostnameInfo> {
        self.fetch(Endpoint::Hostname).await
    }

    async fn set_hostname(&self, request: &HostnameRequest) -> Result<CommandResponse> {
        self.send(Endpoint::SetHostname, request).await
    }

    async fn rtu_connect(&self, request: &RtuConnectRequest) -> Result<CommandResponse> {
        self.send(Endpoint::RtuConnect, request).await
    }

    async fn rtu_disconnect(&self) -> Result<CommandResponse> {
        self.fetch(Endpoint::RtuDisconnect).await
    }

    async fn rtu_read(&self, request: &ReadRequest) -> Result<ReadResponse> {
        self.send(Endpoint::RtuRead, request).await
    }

    async fn rtu_write(&self, request: &WriteRequest) -> Result<CommandResponse> {
        self.send(Endpoint::RtuWrite, request).await
    }

    async fn rtu_status(&self) -> Result<RtuStatus> {
        self.fetch(Endpoint::RtuStatus).await
    }

    async fn tcp_start(&self, request: &TcpStartRequest) -> Result<CommandResponse> {
        self.send(Endpoint::TcpStart, request).await
    }

    async fn tcp_stop(&self) -> Result<CommandResponse> {
        self.fetch(Endpoint::TcpStop).await
    }

    async fn tcp_status(&self) -> Result<TcpStatus> {
        self.fetch(Endpoint::TcpStatus).await
    }

    async fn config_get(&self) -> Result<ConfigDocument> {
        self.fetch(Endpoint::ConfigGet).await
    }

    async fn config_update(&self, document: &ConfigDocument) -> Result<CommandResponse> {
        self.send(Endpoint::ConfigUpdate, document).await
    }
}
