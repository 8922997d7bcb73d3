//! Configuration management for the gateway panel

pub mod app_config;

pub use app_config::*;
