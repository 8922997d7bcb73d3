//! Command line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{ReadKind, WriteKind};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "gateway-panel")]
#[command(about = "🔌 Control panel for a Modbus RTU/TCP gateway")]
pub struct Cli {
    /// Gateway REST API base URL (overrides the configuration file)
    #[arg(long, global = true, value_name = "URL")]
    pub server_url: Option<String>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Without a command the interactive panel starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Show RTU link, TCP server and hostname at once
    Status,
    /// Host network identity
    Network {
        #[command(subcommand)]
        action: NetworkCommand,
    },
    /// Modbus RTU master
    Rtu {
        #[command(subcommand)]
        action: RtuCommand,
    },
    /// Modbus TCP server
    Tcp {
        #[command(subcommand)]
        action: TcpCommand,
    },
    /// Gateway configuration document
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum NetworkCommand {
    /// Show hostname and interfaces
    Show,
    /// Print the hostname only
    Hostname,
    /// Change the hostname
    SetHostname {
        #[arg(value_name = "NAME")]
        hostname: String,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum RtuCommand {
    /// Open the serial link
    Connect {
        /// Serial port (e.g., /dev/ttyUSB0, COM3)
        #[arg(short, long)]
        port: Option<String>,
        #[arg(short, long)]
        baudrate: Option<u32>,
    },
    /// Close the serial link
    Disconnect,
    /// Show link status
    Status,
    /// Read coils or registers
    Read {
        #[arg(short, long)]
        slave: Option<u8>,
        #[arg(short, long, value_enum, default_value = "holding_registers")]
        kind: ReadKind,
        #[arg(long, default_value_t = 0)]
        start: u16,
        #[arg(long, default_value_t = 1)]
        quantity: u16,
    },
    /// Write coils or registers
    Write {
        #[arg(short, long)]
        slave: Option<u8>,
        #[arg(short, long, value_enum, default_value = "register")]
        kind: WriteKind,
        #[arg(short, long, default_value_t = 0)]
        addr: u16,
        /// Number, true/false, or a JSON array such as [1,2,3]
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum TcpCommand {
    /// Start the TCP server
    Start {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Stop the TCP server
    Stop,
    /// Show server status
    Status,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigCommand {
    /// Print the configuration document as pretty JSON
    Get,
    /// Replace the configuration document
    Set {
        /// JSON file to upload, or - for stdin
        #[arg(value_name = "FILE")]
        source: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
