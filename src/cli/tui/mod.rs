//! Terminal User Interface components

pub mod event_loop;
pub mod main_app;
pub mod ui;

#[cfg(test)]
mod tests;

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::remote::GatewayClient;
use crate::services::spawn_poller;

/// Run the interactive control panel
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    let client = GatewayClient::new(&config.server_url, config.request_timeout())?;
    let (tx, rx) = mpsc::unbounded_channel();

    let app = main_app::App::new(config, Arc::new(client), tx.clone());
    spawn_poller(tx.clone(), config.poll_interval());

    log::info!("Starting control panel for {}", config.server_url);
    event_loop::run_tui_event_loop(app, tx, rx).await
}
