//! Modbus RTU link view

use super::dispatch::Dispatcher;
use super::state::{Generation, RemoteState, ResultPanel, StatusLine};
use crate::codec;
use crate::config::FormDefaults;
use crate::errors::{GENERIC_FAILURE, Result};
use crate::models::{
    AppEvent, Badge, CommandKind, CommandResponse, ReadKind, ReadResponse, RtuConnectRequest,
    RtuStatus, WriteKind,
};

#[derive(Debug)]
pub struct RtuView {
    pub link: RemoteState<RtuStatus>,

    pub port_input: String,
    pub baudrate_input: String,

    pub read_slave: String,
    pub read_kind: ReadKind,
    pub read_start: String,
    pub read_quantity: String,
    pub read_result: Option<ResultPanel>,

    pub write_slave: String,
    pub write_kind: WriteKind,
    pub write_addr: String,
    pub write_value: String,
    pub write_result: Option<ResultPanel>,

    generation: Generation,
}

impl RtuView {
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            link: RemoteState::Unknown,
            port_input: defaults.rtu_port.clone(),
            baudrate_input: defaults.rtu_baudrate.to_string(),
            read_slave: defaults.slave_id.to_string(),
            read_kind: ReadKind::HoldingRegisters,
            read_start: "0".to_string(),
            read_quantity: "1".to_string(),
            read_result: None,
            write_slave: defaults.slave_id.to_string(),
            write_kind: WriteKind::Register,
            write_addr: "0".to_string(),
            write_value: String::new(),
            write_result: None,
            generation: Generation::default(),
        }
    }

    pub fn badge(&self) -> Badge {
        match &self.link {
            RemoteState::Unknown => Badge::Unknown,
            RemoteState::Ready(status) if status.connected => Badge::Online,
            RemoteState::Ready(_) => Badge::Offline,
            RemoteState::Failed { .. } => Badge::Error,
        }
    }

    pub fn refresh_status(&mut self, dispatcher: &Dispatcher) {
        let generation = self.generation.next();
        dispatcher.spawn(move |api| async move {
            AppEvent::RtuStatusRefreshed(generation, api.rtu_status().await)
        });
    }

    /// Apply a status result; returns false when it was superseded.
    pub fn apply_status(&mut self, generation: u64, result: Result<RtuStatus>) -> bool {
        if !self.generation.is_current(generation) {
            log::debug!(
                "Dropping RTU status #{} (latest is #{})",
                generation,
                self.generation.latest()
            );
            return false;
        }
        if let Err(e) = &result {
            log::warn!("RTU status refresh failed: {}", e);
        }
        self.link.apply(result);
        true
    }

    pub fn connect(&mut self, dispatcher: &Dispatcher, status: &mut StatusLine) {
        let baudrate = match codec::parse_field::<u32>("Baud rate", &self.baudrate_input) {
            Ok(baudrate) => baudrate,
            Err(e) => {
                status.error(e.to_string());
                return;
            }
        };
        let request = RtuConnectRequest {
            port: self.port_input.trim().to_string(),
            baudrate,
        };

        log::info!("Connecting RTU on {} at {} baud", request.port, request.baudrate);
        dispatcher.spawn(move |api| async move {
            AppEvent::CommandFinished(CommandKind::RtuConnect, api.rtu_connect(&request).await)
        });
    }

    pub fn disconnect(&mut self, dispatcher: &Dispatcher) {
        dispatcher.spawn(move |api| async move {
            AppEvent::CommandFinished(CommandKind::RtuDisconnect, api.rtu_disconnect().await)
        });
    }

    pub fn read(&mut self, dispatcher: &Dispatcher, status: &mut StatusLine) {
        let request = match codec::build_read_request(
            &self.read_slave,
            self.read_kind,
            &self.read_start,
            &self.read_quantity,
        ) {
            Ok(request) => request,
            Err(e) => {
                status.error(e.to_string());
                return;
            }
        };

        log::debug!("RTU read {:?}", request);
        dispatcher.spawn(move |api| async move {
            AppEvent::RtuReadFinished(api.rtu_read(&request).await)
        });
    }

    pub fn write(&mut self, dispatcher: &Dispatcher, status: &mut StatusLine) {
        let request = match codec::build_write_request(
            &self.write_slave,
            self.write_kind,
            &self.write_addr,
            &self.write_value,
        ) {
            Ok(request) => request,
            Err(e) => {
                status.error(e.to_string());
                return;
            }
        };

        log::debug!("RTU write {:?}", request);
        dispatcher.spawn(move |api| async move {
            AppEvent::RtuWriteFinished(api.rtu_write(&request).await)
        });
    }

    pub fn apply_read(&mut self, result: Result<ReadResponse>) {
        self.read_result = Some(match result {
            Ok(response) if response.success => ResultPanel::success(format!(
                "Data: {}",
                codec::render_value(response.data.as_ref())
            )),
            Ok(response) => ResultPanel::error(format!(
                "Error: {}",
                response.error.as_deref().unwrap_or(GENERIC_FAILURE)
            )),
            Err(e) => ResultPanel::error(format!("Error: {}", e)),
        });
    }

    pub fn apply_write(&mut self, result: Result<CommandResponse>) {
        self.write_result = Some(match result {
            Ok(response) if response.success => ResultPanel::success("Success! Data written"),
            Ok(response) => ResultPanel::error(format!(
                "Error: {}",
                response.error.as_deref().unwrap_or(GENERIC_FAILURE)
            )),
            Err(e) => ResultPanel::error(format!("Error: {}", e)),
        });
    }
}
