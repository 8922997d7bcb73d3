//! Gateway Panel - control panel for a Modbus RTU/TCP gateway
//!
//! Talks to the gateway's REST API to show and change the host network
//! identity, the RTU serial link and the TCP server, and to edit the
//! gateway configuration document. Runs as an interactive terminal panel or
//! as one-shot CLI commands.

pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod models;
pub mod panel;
pub mod remote;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use errors::*;
pub use models::*;
pub use remote::{GatewayApi, GatewayClient};

/// Gateway panel version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gateway panel application name
pub const APP_NAME: &str = "gateway-panel";
