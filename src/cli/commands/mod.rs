//! CLI command implementations

pub mod config;
pub mod network;
pub mod rtu;
pub mod status;
pub mod tcp;

use anyhow::Result;

use crate::cli::args::Commands;
use crate::config::AppConfig;
use crate::errors::GENERIC_FAILURE;
use crate::models::CommandResponse;
use crate::remote::{GatewayApi, GatewayClient};

/// Execute a CLI command against the configured gateway
pub async fn execute_command(command: Commands, app_config: &AppConfig) -> Result<()> {
    let client = GatewayClient::new(&app_config.server_url, app_config.request_timeout())?;
    log::debug!("Using gateway at {}", client.base_url());
    dispatch(command, &client, app_config).await
}

/// Run `command` against any gateway implementation
pub async fn dispatch(
    command: Commands,
    api: &dyn GatewayApi,
    app_config: &AppConfig,
) -> Result<()> {
    let defaults = &app_config.defaults;
    match command {
        Commands::Status => status::execute_status_command(api).await,
        Commands::Network { action } => network::execute_network_command(api, action).await,
        Commands::Rtu { action } => rtu::execute_rtu_command(api, action, defaults).await,
        Commands::Tcp { action } => tcp::execute_tcp_command(api, action, defaults).await,
        Commands::Config { action } => config::execute_config_command(api, action).await,
    }
}

/// Turn a `success: false` acknowledgement into an error carrying the cause.
pub(crate) fn ensure_success(response: CommandResponse, prefix: &str) -> Result<()> {
    if response.success {
        return Ok(());
    }
    Err(anyhow::anyhow!(
        "{}: {}",
        prefix,
        response.error.as_deref().unwrap_or(GENERIC_FAILURE)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_failure_keeps_cause_or_falls_back() {
        assert!(ensure_success(CommandResponse::ok(), "Stop").is_ok());

        let err = ensure_success(CommandResponse::failed(Some("port busy")), "Connect").unwrap_err();
        assert_eq!(err.to_string(), "Connect: port busy");

        let err = ensure_success(CommandResponse::failed(None), "Connect").unwrap_err();
        assert_eq!(err.to_string(), "Connect: Operation failed");
    }
}
