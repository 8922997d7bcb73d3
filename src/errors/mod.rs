//! Error taxonomy for the gateway panel

pub mod types;

pub use types::*;
