//! TUI-specific data models

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Panels of the control panel; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Network,
    Rtu,
    Tcp,
    Config,
}

impl PanelId {
    pub const ALL: [PanelId; 4] = [PanelId::Network, PanelId::Rtu, PanelId::Tcp, PanelId::Config];

    pub fn title(&self) -> &'static str {
        match self {
            PanelId::Network => "Network",
            PanelId::Rtu => "Modbus RTU",
            PanelId::Tcp => "Modbus TCP",
            PanelId::Config => "Configuration",
        }
    }

    /// Position of the panel's tab in the tab bar
    pub fn tab_index(&self) -> usize {
        match self {
            PanelId::Network => 0,
            PanelId::Rtu => 1,
            PanelId::Tcp => 2,
            PanelId::Config => 3,
        }
    }

    pub fn from_tab_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Tab-bar element that activated a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabIndicator(pub usize);

impl TabIndicator {
    pub fn of(panel: PanelId) -> Self {
        TabIndicator(panel.tab_index())
    }
}

/// Refresh fired when a panel becomes active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshHook {
    Network,
    Tcp,
    Config,
}

/// Button-style actions the panel can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    SetHostname,
    RefreshNetwork,
    RtuConnect,
    RtuDisconnect,
    RtuRead,
    RtuWrite,
    TcpStart,
    TcpStop,
    RefreshTcp,
    LoadConfig,
    SaveConfig,
}

impl PanelAction {
    pub fn label(&self) -> &'static str {
        match self {
            PanelAction::SetHostname => "Set hostname",
            PanelAction::RefreshNetwork => "Refresh",
            PanelAction::RtuConnect => "Connect",
            PanelAction::RtuDisconnect => "Disconnect",
            PanelAction::RtuRead => "Read",
            PanelAction::RtuWrite => "Write",
            PanelAction::TcpStart => "Start",
            PanelAction::TcpStop => "Stop",
            PanelAction::RefreshTcp => "Refresh",
            PanelAction::LoadConfig => "Load",
            PanelAction::SaveConfig => "Save",
        }
    }
}

/// Free-text form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Hostname,
    RtuPort,
    RtuBaudrate,
    ReadSlave,
    ReadStart,
    ReadQuantity,
    WriteSlave,
    WriteAddr,
    WriteValue,
    TcpHost,
    TcpPort,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Hostname => "Hostname",
            FieldId::RtuPort => "Serial port",
            FieldId::RtuBaudrate => "Baud rate",
            FieldId::ReadSlave | FieldId::WriteSlave => "Slave ID",
            FieldId::ReadStart => "Start address",
            FieldId::ReadQuantity => "Quantity",
            FieldId::WriteAddr => "Address",
            FieldId::WriteValue => "Value",
            FieldId::TcpHost => "Bind host",
            FieldId::TcpPort => "Bind port",
        }
    }
}

/// Selector fields cycled with Left/Right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceId {
    ReadKind,
    WriteKind,
}

/// Connectivity indicator shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Unknown,
    Online,
    Offline,
    Running,
    Stopped,
    Error,
}

impl Badge {
    pub fn color(&self) -> Color {
        match self {
            Badge::Unknown => Color::Gray,
            Badge::Online | Badge::Running => Color::Green,
            Badge::Offline | Badge::Stopped => Color::Yellow,
            Badge::Error => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Badge::Unknown => "⏳",
            Badge::Online | Badge::Running => "🟢",
            Badge::Offline | Badge::Stopped => "⚪",
            Badge::Error => "❌",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::Unknown => "unknown",
            Badge::Online => "online",
            Badge::Offline => "offline",
            Badge::Running => "running",
            Badge::Stopped => "stopped",
            Badge::Error => "unreachable",
        }
    }
}

/// Severity of a status-line notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl StatusLevel {
    pub fn color(&self) -> Color {
        match self {
            StatusLevel::Info => Color::Cyan,
            StatusLevel::Success => Color::Green,
            StatusLevel::Error => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StatusLevel::Info => "ℹ️ ",
            StatusLevel::Success => "✅",
            StatusLevel::Error => "❌",
        }
    }
}
