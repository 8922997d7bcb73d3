//! Top-level panel controller

use std::sync::Arc;
use tokio::sync::mpsc;

use super::config_view::ConfigView;
use super::dispatch::Dispatcher;
use super::form::{self, FormItem};
use super::network::NetworkView;
use super::rtu::RtuView;
use super::state::UiState;
use super::tcp::TcpView;
use crate::config::AppConfig;
use crate::errors::{GENERIC_FAILURE, PanelError, Result};
use crate::models::{
    AppEvent, Badge, ChoiceId, CommandKind, CommandResponse, FieldId, PanelAction, PanelId,
    RefreshHook, TabIndicator,
};
use crate::remote::GatewayApi;

/// Owns the UI state and the four views, and routes actions and completions
/// between them.
pub struct PanelController {
    pub ui: UiState,
    pub network: NetworkView,
    pub rtu: RtuView,
    pub tcp: TcpView,
    pub config: ConfigView,
    dispatcher: Dispatcher,
}

impl PanelController {
    pub fn new(
        config: &AppConfig,
        api: Arc<dyn GatewayApi>,
        tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            ui: UiState::new(config.ui.initial_panel, config.ui.status_history),
            network: NetworkView::new(),
            rtu: RtuView::new(&config.defaults),
            tcp: TcpView::new(&config.defaults),
            config: ConfigView::new(),
            dispatcher: Dispatcher::new(api, tx),
        }
    }

    /// Initial fetches issued once when the session starts
    pub fn initialize(&mut self) {
        log::info!("Initializing panel on {:?}", self.ui.active_panel);
        self.rtu.refresh_status(&self.dispatcher);
        self.tcp.refresh(&self.dispatcher);
        self.network.refresh(&self.dispatcher);
        if self.ui.active_panel == PanelId::Config {
            self.config.load(&self.dispatcher);
        }
    }

    /// Make `panel` the only active panel, highlight `indicator`, and fire the
    /// panel's refresh hook if it has one.
    pub fn select(&mut self, panel: PanelId, indicator: TabIndicator) -> Option<RefreshHook> {
        log::debug!("Selecting panel {:?} via tab {}", panel, indicator.0);
        self.ui.active_panel = panel;
        self.ui.active_indicator = indicator;
        self.ui.focus = 0;

        let hook = match panel {
            PanelId::Network => Some(RefreshHook::Network),
            PanelId::Tcp => Some(RefreshHook::Tcp),
            PanelId::Config => Some(RefreshHook::Config),
            PanelId::Rtu => None,
        };
        match hook {
            Some(RefreshHook::Network) => self.network.refresh(&self.dispatcher),
            Some(RefreshHook::Tcp) => self.tcp.refresh(&self.dispatcher),
            Some(RefreshHook::Config) => self.config.load(&self.dispatcher),
            None => {}
        }
        hook
    }

    pub fn perform(&mut self, action: PanelAction) {
        log::debug!("Performing {:?}", action);
        let dispatcher = &self.dispatcher;
        let status = &mut self.ui.status;
        match action {
            PanelAction::SetHostname => self.network.set_hostname(dispatcher, status),
            PanelAction::RefreshNetwork => self.network.refresh(dispatcher),
            PanelAction::RtuConnect => self.rtu.connect(dispatcher, status),
            PanelAction::RtuDisconnect => self.rtu.disconnect(dispatcher),
            PanelAction::RtuRead => self.rtu.read(dispatcher, status),
            PanelAction::RtuWrite => self.rtu.write(dispatcher, status),
            PanelAction::TcpStart => self.tcp.start(dispatcher, status),
            PanelAction::TcpStop => self.tcp.stop(dispatcher),
            PanelAction::RefreshTcp => self.tcp.refresh(dispatcher),
            PanelAction::LoadConfig => self.config.load(dispatcher),
            PanelAction::SaveConfig => self.config.save(dispatcher, status),
        }
    }

    /// Poller tick: link and server liveness only
    pub fn on_poll_tick(&mut self) {
        self.rtu.refresh_status(&self.dispatcher);
        self.tcp.refresh(&self.dispatcher);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::NetworkRefreshed(generation, result) => {
                self.network.apply_refresh(generation, result);
            }
            AppEvent::RtuStatusRefreshed(generation, result) => {
                self.rtu.apply_status(generation, result);
            }
            AppEvent::TcpStatusRefreshed(generation, result) => {
                self.tcp.apply_status(generation, result);
            }
            AppEvent::ConfigLoaded(generation, result) => {
                self.config.apply_load(generation, result, &mut self.ui.status);
            }
            AppEvent::CommandFinished(kind, result) => self.handle_command_finished(kind, result),
            AppEvent::RtuReadFinished(result) => self.rtu.apply_read(result),
            AppEvent::RtuWriteFinished(result) => self.rtu.apply_write(result),
            AppEvent::PollTick => self.on_poll_tick(),
            AppEvent::Tick => {}
        }
    }

    fn handle_command_finished(&mut self, kind: CommandKind, result: Result<CommandResponse>) {
        match result.and_then(CommandResponse::into_result) {
            Ok(()) => {
                self.ui.status.success(success_message(kind));
                match kind {
                    CommandKind::SetHostname => self.network.refresh(&self.dispatcher),
                    CommandKind::RtuConnect | CommandKind::RtuDisconnect => {
                        self.rtu.refresh_status(&self.dispatcher)
                    }
                    CommandKind::TcpStart | CommandKind::TcpStop => {
                        self.tcp.refresh(&self.dispatcher)
                    }
                    CommandKind::SaveConfig => {}
                }
            }
            Err(PanelError::Domain(cause)) => {
                self.ui.status.error(format!(
                    "{}: {}",
                    failure_prefix(kind),
                    cause.as_deref().unwrap_or(GENERIC_FAILURE)
                ));
            }
            Err(e) => self.ui.status.error(format!("{}: {}", failure_prefix(kind), e)),
        }
    }

    pub fn rtu_badge(&self) -> Badge {
        self.rtu.badge()
    }

    pub fn tcp_badge(&self) -> Badge {
        self.tcp.badge()
    }

    pub fn field_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Hostname => &mut self.network.hostname_input,
            FieldId::RtuPort => &mut self.rtu.port_input,
            FieldId::RtuBaudrate => &mut self.rtu.baudrate_input,
            FieldId::ReadSlave => &mut self.rtu.read_slave,
            FieldId::ReadStart => &mut self.rtu.read_start,
            FieldId::ReadQuantity => &mut self.rtu.read_quantity,
            FieldId::WriteSlave => &mut self.rtu.write_slave,
            FieldId::WriteAddr => &mut self.rtu.write_addr,
            FieldId::WriteValue => &mut self.rtu.write_value,
            FieldId::TcpHost => &mut self.tcp.host_input,
            FieldId::TcpPort => &mut self.tcp.port_input,
        }
    }

    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Hostname => &self.network.hostname_input,
            FieldId::RtuPort => &self.rtu.port_input,
            FieldId::RtuBaudrate => &self.rtu.baudrate_input,
            FieldId::ReadSlave => &self.rtu.read_slave,
            FieldId::ReadStart => &self.rtu.read_start,
            FieldId::ReadQuantity => &self.rtu.read_quantity,
            FieldId::WriteSlave => &self.rtu.write_slave,
            FieldId::WriteAddr => &self.rtu.write_addr,
            FieldId::WriteValue => &self.rtu.write_value,
            FieldId::TcpHost => &self.tcp.host_input,
            FieldId::TcpPort => &self.tcp.port_input,
        }
    }

    pub fn choice_label(&self, choice: ChoiceId) -> &'static str {
        match choice {
            ChoiceId::ReadKind => self.rtu.read_kind.label(),
            ChoiceId::WriteKind => self.rtu.write_kind.label(),
        }
    }

    pub fn cycle_choice(&mut self, choice: ChoiceId, forward: bool) {
        match (choice, forward) {
            (ChoiceId::ReadKind, true) => self.rtu.read_kind = self.rtu.read_kind.next(),
            (ChoiceId::ReadKind, false) => self.rtu.read_kind = self.rtu.read_kind.previous(),
            (ChoiceId::WriteKind, true) => self.rtu.write_kind = self.rtu.write_kind.next(),
            (ChoiceId::WriteKind, false) => self.rtu.write_kind = self.rtu.write_kind.previous(),
        }
    }

    pub fn focused_item(&self) -> Option<FormItem> {
        form::items(self.ui.active_panel).get(self.ui.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = form::items(self.ui.active_panel).len();
        self.ui.focus = (self.ui.focus + 1) % count;
    }

    pub fn focus_previous(&mut self) {
        let count = form::items(self.ui.active_panel).len();
        self.ui.focus = (self.ui.focus + count - 1) % count;
    }
}

fn success_message(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::SetHostname => "Hostname updated successfully",
        CommandKind::RtuConnect => "RTU connected successfully",
        CommandKind::RtuDisconnect => "RTU disconnected",
        CommandKind::TcpStart => "TCP server started successfully",
        CommandKind::TcpStop => "TCP server stopped",
        CommandKind::SaveConfig => "Configuration saved successfully",
    }
}

fn failure_prefix(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::SetHostname => "Failed to set hostname",
        CommandKind::RtuConnect => "Connection failed",
        CommandKind::RtuDisconnect => "Disconnect failed",
        CommandKind::TcpStart => "Failed to start TCP server",
        CommandKind::TcpStop => "Failed to stop TCP server",
        CommandKind::SaveConfig => "Failed to save configuration",
    }
}
