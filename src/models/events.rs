//! Application events for TUI and controller communication

use crate::errors::Result;
use crate::models::modbus::{ReadResponse, RtuStatus};
use crate::models::network::NetworkState;
use crate::models::responses::{CommandResponse, ConfigDocument};
use crate::models::tcp::TcpStatus;

/// Mutation that ended with a plain acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    SetHostname,
    RtuConnect,
    RtuDisconnect,
    TcpStart,
    TcpStop,
    SaveConfig,
}

/// Application events for communication between components
#[derive(Debug)]
pub enum AppEvent {
    // Refresh completions, tagged with the generation that issued them
    NetworkRefreshed(u64, Result<NetworkState>),
    RtuStatusRefreshed(u64, Result<RtuStatus>),
    TcpStatusRefreshed(u64, Result<TcpStatus>),
    ConfigLoaded(u64, Result<ConfigDocument>),

    // Mutation completions
    CommandFinished(CommandKind, Result<CommandResponse>),
    RtuReadFinished(Result<ReadResponse>),
    RtuWriteFinished(Result<CommandResponse>),

    // Background poller
    PollTick,

    // General events
    Tick,
}
