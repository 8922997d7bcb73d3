//! Data models and types used throughout the gateway panel

pub mod events;
pub mod modbus;
pub mod network;
pub mod responses;
pub mod tcp;
pub mod tui;

// Re-export commonly used types
pub use events::*;
pub use modbus::*;
pub use network::*;
pub use responses::*;
pub use tcp::*;
pub use tui::*;
