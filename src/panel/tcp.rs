//! Modbus TCP server view

use super::dispatch::Dispatcher;
use super::state::{Generation, RemoteState, StatusLine};
use crate::codec;
use crate::config::FormDefaults;
use crate::errors::Result;
use crate::models::{AppEvent, Badge, CommandKind, TcpStartRequest, TcpStatus};

#[derive(Debug)]
pub struct TcpView {
    pub status: RemoteState<TcpStatus>,
    pub host_input: String,
    pub port_input: String,
    generation: Generation,
}

impl TcpView {
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            status: RemoteState::Unknown,
            host_input: defaults.tcp_host.clone(),
            port_input: defaults.tcp_port.to_string(),
            generation: Generation::default(),
        }
    }

    pub fn badge(&self) -> Badge {
        match &self.status {
            RemoteState::Unknown => Badge::Unknown,
            RemoteState::Ready(status) if status.running => Badge::Running,
            RemoteState::Ready(_) => Badge::Stopped,
            RemoteState::Failed { .. } => Badge::Error,
        }
    }

    pub fn refresh(&mut self, dispatcher: &Dispatcher) {
        let generation = self.generation.next();
        dispatcher.spawn(move |api| async move {
            AppEvent::TcpStatusRefreshed(generation, api.tcp_status().await)
        });
    }

    /// Apply a status result; returns false when it was superseded.
    pub fn apply_status(&mut self, generation: u64, result: Result<TcpStatus>) -> bool {
        if !self.generation.is_current(generation) {
            log::debug!(
                "Dropping TCP status #{} (latest is #{})",
                generation,
                self.generation.latest()
            );
            return false;
        }
        if let Err(e) = &result {
            log::warn!("TCP status refresh failed: {}", e);
        }
        self.status.apply(result);
        true
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation.latest()
    }

    pub fn start(&mut self, dispatcher: &Dispatcher, status: &mut StatusLine) {
        let port = match codec::parse_field::<u16>("Bind port", &self.port_input) {
            Ok(port) => port,
            Err(e) => {
                status.error(e.to_string());
                return;
            }
        };
        let request = TcpStartRequest {
            host: self.host_input.trim().to_string(),
            port,
        };

        log::info!("Starting TCP server on {}:{}", request.host, request.port);
        dispatcher.spawn(move |api| async move {
            AppEvent::CommandFinished(CommandKind::TcpStart, api.tcp_start(&request).await)
        });
    }

    pub fn stop(&mut self, dispatcher: &Dispatcher) {
        dispatcher.spawn(move |api| async move {
            AppEvent::CommandFinished(CommandKind::TcpStop, api.tcp_stop().await)
        });
    }
}

/// Status block for a TCP status reply; an `error` field replaces the details.
pub fn describe_status(status: &TcpStatus) -> Vec<String> {
    if let Some(error) = &status.error {
        return vec![format!("Status unavailable: {}", error)];
    }
    vec![
        format!(
            "Status: {}",
            if status.running { "Running" } else { "Stopped" }
        ),
        format!("Host: {}", status.host.as_deref().unwrap_or("-")),
        format!(
            "Port: {}",
            status
                .port
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string())
        ),
    ]
}
