//! Host network identity view

use super::dispatch::Dispatcher;
use super::state::{Generation, RemoteState, StatusLine};
use crate::errors::{PanelError, Result};
use crate::models::{AppEvent, CommandKind, HostnameRequest, NetworkState};

#[derive(Debug, Default)]
pub struct NetworkView {
    pub state: RemoteState<NetworkState>,
    pub hostname_input: String,
    generation: Generation,
}

impl NetworkView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, dispatcher: &Dispatcher) {
        let generation = self.generation.next();
        dispatcher.spawn(move |api| async move {
            AppEvent::NetworkRefreshed(generation, api.network_config().await)
        });
    }

    /// Apply a refresh result; returns false when it was superseded.
    pub fn apply_refresh(&mut self, generation: u64, result: Result<NetworkState>) -> bool {
        if !self.generation.is_current(generation) {
            log::debug!(
                "Dropping network refresh #{} (latest is #{})",
                generation,
                self.generation.latest()
            );
            return false;
        }

        match &result {
            Ok(state) => {
                if let Some(hostname) = &state.hostname {
                    self.hostname_input = hostname.clone();
                }
            }
            Err(e) => log::warn!("Network refresh failed: {}", e),
        }
        self.state.apply(result);
        true
    }

    pub fn set_hostname(&mut self, dispatcher: &Dispatcher, status: &mut StatusLine) {
        let hostname = self.hostname_input.trim().to_string();
        if hostname.is_empty() {
            status.error(
                PanelError::Validation("please enter a hostname".to_string()).to_string(),
            );
            return;
        }

        log::info!("Setting hostname to {}", hostname);
        dispatcher.spawn(move |api| async move {
            let request = HostnameRequest { hostname };
            AppEvent::CommandFinished(CommandKind::SetHostname, api.set_hostname(&request).await)
        });
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation.latest()
    }
}
